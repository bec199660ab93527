//! Leveled logging macros for a [`Logger`](crate::log::logger::Logger).
//!
//! # Feature Flags
//! Specific log levels are controlled by cargo features:
//! `log-info`, `log-warn`, `log-error`.
//!
//! If a feature is disabled, the corresponding macro expands to `()`, removing
//! all formatting and allocation overhead at compile time.

// ============================================================================
// 1. GENERIC MACROS
// ============================================================================
// Always available; the level-specific macros below forward here.

/// Formats the arguments and prints them through `$logger` at `$lvl`.
///
/// ```ignore
/// logger_log!(Logger::get_instance(), LogLevel::Warn, "retry {} of {}", n, max);
/// ```
#[macro_export]
macro_rules! logger_log {
    ($logger:expr, $lvl:expr, $($arg:tt)*) => {{
        let __msg = format!($($arg)*);
        $logger.print($lvl, &__msg);
    }};
}

/// Same as [`logger_log!`], targeting the shared instance.
#[macro_export]
macro_rules! global_log {
    ($lvl:expr, $($arg:tt)*) => {
        $crate::logger_log!($crate::log::logger::Logger::get_instance(), $lvl, $($arg)*)
    };
}

// ============================================================================
// 2. LEVEL-SPECIFIC MACROS (Feature Gated)
// ============================================================================

// ---------------------- INFO ----------------------
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! logger_info { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::Info, $($arg)*) } }

#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! logger_info {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- WARN ----------------------
#[cfg(feature = "log-warn")]
#[macro_export]
macro_rules! logger_warn { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::Warn, $($arg)*) } }

#[cfg(not(feature = "log-warn"))]
#[macro_export]
macro_rules! logger_warn {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- ERROR ----------------------
// Generally always enabled, but consistent structure allows user to disable if really needed.
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! logger_error { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::Error, $($arg)*) } }

#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! logger_error {
    ($($arg:tt)*) => {
        ()
    };
}
