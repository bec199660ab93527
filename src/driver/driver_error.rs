use std::io;

use thiserror::Error;

/// Everything that can stop a driver run.
///
/// The first three come from the thread-count argument and are reported to
/// the operator. `WorkerPanicked` is not a recognized failure: callers treat
/// it as fatal.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("1 argument needed (the number of threads).")]
    MissingArgument,

    #[error("No conversion could be performed from {arg}")]
    InvalidNumber { arg: String },

    #[error(
        "Value out of range. Argument provided ( {arg} ) is not in the acceptable range [0, {max}]."
    )]
    OutOfRange { arg: String, max: usize },

    #[error("could not spawn worker {index}: {source}")]
    WorkerSpawn {
        index: usize,
        #[source]
        source: io::Error,
    },

    #[error("worker {index} panicked")]
    WorkerPanicked { index: usize },
}

impl DriverError {
    /// `true` for the failures the driver knows how to report and recover from.
    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        !matches!(self, DriverError::WorkerPanicked { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_messages() {
        assert_eq!(
            DriverError::MissingArgument.to_string(),
            "1 argument needed (the number of threads)."
        );
        assert_eq!(
            DriverError::InvalidNumber { arg: "abc".into() }.to_string(),
            "No conversion could be performed from abc"
        );
        assert_eq!(
            DriverError::OutOfRange {
                arg: "1001".into(),
                max: 1000
            }
            .to_string(),
            "Value out of range. Argument provided ( 1001 ) is not in the acceptable range [0, 1000]."
        );
    }

    #[test]
    fn only_panics_are_unrecognized() {
        assert!(DriverError::MissingArgument.is_recognized());
        assert!(
            DriverError::WorkerSpawn {
                index: 0,
                source: io::Error::other("no threads left"),
            }
            .is_recognized()
        );
        assert!(!DriverError::WorkerPanicked { index: 3 }.is_recognized());
    }
}
