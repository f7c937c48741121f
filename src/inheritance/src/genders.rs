use std::fmt::{self, Display, Formatter};

use log::warn;
use serde::{Serialize, Deserialize};

use crate::ModelError;

/// Which offspring may count as a success.
/// - `Single`: only children of one sex qualify (legacy mode `1`).
/// - `Both`  : every child qualifies (legacy mode `2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genders {
    Single,
    Both,
}

impl Default for Genders {
    fn default() -> Self {Self::Single}
}

impl Genders {
    /// Convert a raw gender count into a `Genders` value, falling back to `Genders::Single`
    /// (with a warning) whenever the count is neither 1 nor 2.
    pub fn from_count_lossy(count: i64) -> Self {
        Self::try_from(count).unwrap_or_else(|e| {
            warn!("{e}. Default of 1 used.");
            Self::Single
        })
    }

    /// Legacy integer representation of this mode.
    pub fn count(&self) -> i64 {
        match self {
            Self::Single => 1,
            Self::Both   => 2,
        }
    }
}

impl TryFrom<i64> for Genders {
    type Error = ModelError;

    fn try_from(count: i64) -> Result<Self, Self::Error> {
        match count {
            1 => Ok(Self::Single),
            2 => Ok(Self::Both),
            _ => Err(ModelError::InvalidGenderCount(count)),
        }
    }
}

impl Display for Genders {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "single gender"),
            Self::Both   => write!(f, "both genders"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, sync::Once};
    use log::{Level, LevelFilter, Log, Metadata, Record};

    thread_local! {
        static RECORDS: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
    }

    /// Collects log records emitted by the current test thread.
    struct Collector;
    static COLLECTOR: Collector = Collector;
    static INIT: Once = Once::new();

    impl Log for Collector {
        fn enabled(&self, _: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            RECORDS.with(|records| records.borrow_mut().push((record.level(), record.args().to_string())));
        }

        fn flush(&self) {}
    }

    fn collect_logs<T>(f: impl FnOnce() -> T) -> (T, Vec<(Level, String)>) {
        INIT.call_once(|| {
            log::set_logger(&COLLECTOR).expect("Failed to install log collector");
        });
        log::set_max_level(LevelFilter::Trace);
        RECORDS.with(|records| records.borrow_mut().clear());
        let output = f();
        (output, RECORDS.with(|records| records.borrow_mut().drain(..).collect()))
    }

    #[test]
    fn valid_counts() {
        assert_eq!(Genders::try_from(1), Ok(Genders::Single));
        assert_eq!(Genders::try_from(2), Ok(Genders::Both));
    }

    #[test]
    fn invalid_counts_are_rejected() {
        for count in [-1, 0, 3, 42, i64::MIN, i64::MAX] {
            assert_eq!(Genders::try_from(count), Err(ModelError::InvalidGenderCount(count)));
        }
    }

    #[test]
    fn invalid_counts_default_to_single() {
        for count in [-1, 0, 3] {
            assert_eq!(Genders::from_count_lossy(count), Genders::Single);
        }
        assert_eq!(Genders::from_count_lossy(2), Genders::Both);
    }

    #[test]
    fn invalid_counts_emit_a_warning() {
        for count in [-1, 0, 3] {
            let (genders, records) = collect_logs(|| Genders::from_count_lossy(count));
            assert_eq!(genders, Genders::Single);
            assert_eq!(records.len(), 1, "{count}: {records:?}");

            let (level, message) = &records[0];
            assert_eq!(*level, Level::Warn);
            assert!(message.contains(&count.to_string()), "{message}");
            assert!(message.ends_with("Default of 1 used."), "{message}");
        }
    }

    #[test]
    fn valid_counts_are_silent() {
        for (count, want) in [(1, Genders::Single), (2, Genders::Both)] {
            let (genders, records) = collect_logs(|| Genders::from_count_lossy(count));
            assert_eq!(genders, want);
            assert!(records.is_empty(), "{count}: {records:?}");
        }
    }

    #[test]
    fn count_roundtrip() {
        for genders in [Genders::Single, Genders::Both] {
            assert_eq!(Genders::try_from(genders.count()), Ok(genders));
        }
    }

    #[test]
    fn default_is_single() {
        assert_eq!(Genders::default(), Genders::Single);
    }
}
