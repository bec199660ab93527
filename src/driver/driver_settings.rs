use std::{fmt, str::FromStr, sync::Arc, time::Duration};

use crate::{
    config::{Config, ConfigError},
    driver::thread_count::{MAX_NB_THREADS, THREAD_LIMIT},
    log::{SharedSink, StderrSink, StdoutSink},
};

/// Where the driver points the shared logger before starting workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputTarget {
    #[default]
    Stderr,
    Stdout,
    /// Leave the logger without a sink: every line is discarded.
    None,
}

impl OutputTarget {
    /// The sink to install, or `None` to discard.
    #[must_use]
    pub fn sink(self) -> Option<SharedSink> {
        match self {
            OutputTarget::Stderr => Some(Arc::new(StderrSink)),
            OutputTarget::Stdout => Some(Arc::new(StdoutSink)),
            OutputTarget::None => None,
        }
    }
}

impl FromStr for OutputTarget {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stderr" => Ok(OutputTarget::Stderr),
            "stdout" => Ok(OutputTarget::Stdout),
            "none" | "off" => Ok(OutputTarget::None),
            _ => Err(()),
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputTarget::Stderr => "stderr",
            OutputTarget::Stdout => "stdout",
            OutputTarget::None => "none",
        })
    }
}

/// Tunables for a driver run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverSettings {
    /// Largest accepted thread count.
    pub max_threads: usize,
    /// Fixed pause before each worker prints.
    pub worker_delay: Duration,
    /// Upper bound of an extra random pause added to `worker_delay`.
    pub worker_jitter: Duration,
    pub output: OutputTarget,
}

impl Default for DriverSettings {
    fn default() -> Self {
        Self {
            max_threads: MAX_NB_THREADS,
            worker_delay: Duration::from_millis(10),
            worker_jitter: Duration::ZERO,
            output: OutputTarget::Stderr,
        }
    }
}

impl DriverSettings {
    /// Reads `[Driver]` and `[Logging]` keys, defaulting whatever is absent.
    ///
    /// `max_threads` above [`THREAD_LIMIT`] is rejected.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let max_threads = config.get_parsed_or("Driver", "max_threads", defaults.max_threads)?;
        if max_threads > THREAD_LIMIT {
            return Err(ConfigError::InvalidValue {
                section: "Driver".to_string(),
                key: "max_threads".to_string(),
                value: max_threads.to_string(),
            });
        }
        let delay_ms = config.get_parsed_or(
            "Driver",
            "worker_delay_ms",
            duration_ms(defaults.worker_delay),
        )?;
        let jitter_ms = config.get_parsed_or(
            "Driver",
            "worker_jitter_ms",
            duration_ms(defaults.worker_jitter),
        )?;

        Ok(Self {
            max_threads,
            worker_delay: Duration::from_millis(delay_ms),
            worker_jitter: Duration::from_millis(jitter_ms),
            output: config.get_parsed_or("Logging", "output", defaults.output)?,
        })
    }
}

fn duration_ms(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn defaults_without_keys() {
        let settings = DriverSettings::from_config(&Config::empty()).unwrap();
        assert_eq!(settings, DriverSettings::default());
        assert_eq!(settings.max_threads, 1000);
        assert_eq!(settings.worker_delay, Duration::from_millis(10));
        assert_eq!(settings.output, OutputTarget::Stderr);
    }

    #[test]
    fn reads_every_key() {
        let cfg = Config::parse(
            "[Driver]\nmax_threads = 20\nworker_delay_ms = 0\nworker_jitter_ms = 3\n\
             [Logging]\noutput = NONE\n",
        );
        let settings = DriverSettings::from_config(&cfg).unwrap();
        assert_eq!(settings.max_threads, 20);
        assert_eq!(settings.worker_delay, Duration::ZERO);
        assert_eq!(settings.worker_jitter, Duration::from_millis(3));
        assert_eq!(settings.output, OutputTarget::None);
        assert!(settings.output.sink().is_none());
    }

    #[test]
    fn rejects_bad_values() {
        let cfg = Config::parse("[Logging]\noutput = syslog\n");
        assert!(matches!(
            DriverSettings::from_config(&cfg),
            Err(ConfigError::InvalidValue { .. })
        ));

        let cfg = Config::parse("[Driver]\nmax_threads = lots\n");
        assert!(DriverSettings::from_config(&cfg).is_err());
    }

    #[test]
    fn rejects_max_threads_above_limit() {
        let cfg = Config::parse("[Driver]\nmax_threads = 18446744073709551615\n");
        match DriverSettings::from_config(&cfg) {
            Err(ConfigError::InvalidValue { key, value, .. }) => {
                assert_eq!(key, "max_threads");
                assert_eq!(value, "18446744073709551615");
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }

        let cfg = Config::parse(&format!("[Driver]\nmax_threads = {THREAD_LIMIT}\n"));
        assert_eq!(
            DriverSettings::from_config(&cfg).unwrap().max_threads,
            THREAD_LIMIT
        );
    }

    #[test]
    fn output_target_round_trips_through_text() {
        for target in [OutputTarget::Stderr, OutputTarget::Stdout, OutputTarget::None] {
            assert_eq!(target.to_string().parse::<OutputTarget>(), Ok(target));
        }
    }
}
