use clap::Parser;
use std::path::PathBuf;

use super::Fixture;

/// Build and run an `iqodds plot` command within a temporary output directory.
#[derive(Default)]
pub struct PlotRunnerBuilder {
    figure    : Option<String>,
    iq_step   : Option<f64>,
    kids_step : Option<f64>,
    overwrite : bool,
    extra_args: Vec<String>,
}

impl PlotRunnerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn figure(mut self, figure: &str) -> Self {
        self.figure = Some(figure.to_string());
        self
    }

    pub fn iq_step(mut self, step: f64) -> Self {
        self.iq_step = Some(step);
        self
    }

    pub fn kids_step(mut self, step: f64) -> Self {
        self.kids_step = Some(step);
        self
    }

    pub fn overwrite(mut self) -> Self {
        self.overwrite = true;
        self
    }

    pub fn arg(mut self, arg: &str) -> Self {
        self.extra_args.extend(arg.split_whitespace().map(ToString::to_string));
        self
    }

    pub fn build(self) -> PlotRunner {
        let output_dir = Fixture::blank("iqodds-test-output");
        let mut args = format!("iqodds plot --output-dir {output_dir}");
        if let Some(figure) = &self.figure {
            args.push_str(&format!(" --figure {figure}"));
        }
        if let Some(step) = self.iq_step {
            args.push_str(&format!(" --iq-step {step}"));
        }
        if let Some(step) = self.kids_step {
            args.push_str(&format!(" --kids-step {step}"));
        }
        if self.overwrite {
            args.push_str(" --overwrite");
        }
        for arg in &self.extra_args {
            args.push(' ');
            args.push_str(arg);
        }
        PlotRunner{args, output_dir}
    }
}

pub struct PlotRunner {
    args      : String,
    output_dir: Fixture,
}

impl PlotRunner {
    pub fn cli(&self) -> parser::Cli {
        parser::Cli::parse_from(self.args.split_whitespace())
    }

    /// Parse and run the command, then serialize its arguments, the same way the `iqodds` binary does.
    pub fn run(&self) -> anyhow::Result<()> {
        let cli = self.cli();
        iqodds::run(&cli)?;
        cli.serialize()
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.to_path_buf()
    }
}
