use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use indicatif_log_bridge::LogWrapper;
use log::{Level, LevelFilter};
use env_logger::{Builder, Env, fmt::Color};
use std::io::Write;
use once_cell::sync::OnceCell;

static INSTANCE: OnceCell<Logger> = OnceCell::new();

/// Environment variable overriding the verbosity requested on the command line. (e.g. `IQODDS_LOG=debug`)
pub const LOG_ENV_VAR: &str = "IQODDS_LOG";

const PROGRESS_TEMPLATE: &str = "{msg:<40} [{elapsed_precise}] {wide_bar:.cyan/blue} {pos:>6}/{len:6} rows ({eta})";

#[derive(Debug)]
pub struct Logger {
    multi_pg: MultiProgress,
}

impl Logger {

    /// Initialize the global logger, with the given verbosity level. `IQODDS_LOG` takes precedence
    /// over `verbosity`, if set. Subsequent calls only update the verbosity level.
    pub fn init(verbosity: u8) {
        let mut first_init = false;
        INSTANCE.get_or_init(|| {
            first_init = true;
            let env = Env::default().filter(LOG_ENV_VAR);
            let logger = Builder::new().filter_level(Self::verbosity_to_filter(verbosity))
                .format(|buf, record| {
                    // Errors carry their source location.
                    let (traceback, intense) = match record.level() {
                        Level::Error => (format!("(@ {}:{}) ", record.file().unwrap_or("unknown"), record.line().unwrap_or(0)), true),
                        _            => (String::new(), false),
                    };

                    let mut arg_style = buf.style();
                    arg_style.set_intense(intense);

                    let mut level_style = buf.style();
                    let color = match record.level() {
                        Level::Error => Color::Red,
                        Level::Warn  => Color::Yellow,
                        Level::Info  => Color::Green,
                        Level::Debug => Color::Blue,
                        Level::Trace => Color::Cyan
                    };
                    level_style.set_color(color).set_bold(true);

                    writeln!(
                        buf,
                        "[{} {: <5} {}] {traceback}{}",
                        chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                        level_style.value(record.level()),
                        record.target(),
                        arg_style.value(record.args())
                    )
                })
                .parse_env(env)
                .build();

            // Route log records through the progress bars, so that they do not tear each other.
            let multi_pg = MultiProgress::new();
            if let Err(e) = LogWrapper::new(multi_pg.clone(), logger).try_init() {
                eprintln!("Failed to initialize logger: {e}");
            }
            Self{multi_pg}
        });

        if !first_init {
            Self::set_level(verbosity);
        }
    }

    fn verbosity_to_filter(verbosity: u8) -> LevelFilter {
        match verbosity {
            0            => LevelFilter::Error,
            1            => LevelFilter::Warn,
            2            => LevelFilter::Info,
            3            => LevelFilter::Debug,
            4..= u8::MAX => LevelFilter::Trace
        }
    }

    pub fn set_level(verbosity: u8) {
        log::set_max_level(Self::verbosity_to_filter(verbosity));
    }

    /// Create a progress bar of `len` steps, attached to the logger's `MultiProgress`.
    ///
    /// The bar is hidden if the logger was never initialized, or when running in quiet mode.
    pub fn progress_bar(len: u64, message: &str) -> ProgressBar {
        let style = ProgressStyle::with_template(PROGRESS_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar());

        let bar = match INSTANCE.get() {
            Some(logger) if log::max_level() > LevelFilter::Error => logger.multi_pg.add(ProgressBar::new(len)),
            _ => ProgressBar::hidden(),
        };
        bar.set_length(len);
        bar.with_style(style).with_message(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level(){
        Logger::init(0);
        Logger::init(0);
        assert!(INSTANCE.get().is_some());
        for level in 0..u8::MAX {
            Logger::set_level(level);

            let expected_level = match level {
                0           => LevelFilter::Error,
                1           => LevelFilter::Warn,
                2           => LevelFilter::Info,
                3           => LevelFilter::Debug,
                4..=u8::MAX => LevelFilter::Trace
            };

            assert_eq!(log::max_level(), expected_level);
        }
    }

    #[test]
    fn progress_bar() {
        let bar = Logger::progress_bar(42, "Evaluating grid");
        assert_eq!(bar.length(), Some(42));
        assert_eq!(bar.message(), "Evaluating grid");
        bar.inc(2);
        assert_eq!(bar.position(), 2);
    }
}
