use std::{fmt, str::FromStr};

use thiserror::Error;

/// Defines the severity levels for log messages, ordered from least to most severe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Designates informational messages that highlight the progress of the application.
    Info,
    /// Designates potentially harmful situations.
    Warn,
    /// Designates error events.
    Error,
}

impl LogLevel {
    /// Every level, in severity order. Round-robin selection walks this table.
    pub const ALL: [LogLevel; 3] = [LogLevel::Info, LogLevel::Warn, LogLevel::Error];

    /// Number of levels.
    pub const COUNT: usize = Self::ALL.len();

    /// Literal uppercase token written in front of every log line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    /// Picks the level for the `index`-th item of a round-robin sequence.
    ///
    /// `0 -> Info`, `1 -> Warn`, `2 -> Error`, `3 -> Info`, ...
    #[must_use]
    pub const fn round_robin(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level: {0}")]
pub struct ParseLevelError(pub String);

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseLevelError(s.to_owned()))
    }
}
