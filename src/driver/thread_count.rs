use std::num::IntErrorKind;

use crate::driver::driver_error::DriverError;

/// Upper bound on the number of workers when no configuration says otherwise.
pub const MAX_NB_THREADS: usize = 1000;

/// Hard ceiling on the number of workers, whatever the configuration says.
pub const THREAD_LIMIT: usize = 10_000;

/// Turns the raw command-line argument into a worker count in `[0, max]`.
///
/// Surrounding whitespace is ignored and `-0` counts as zero. A token that
/// is not an integer is `InvalidNumber`; a negative integer, or one above
/// `max` (including values too large for any integer type), is `OutOfRange`.
pub fn parse_thread_count(arg: Option<&str>, max: usize) -> Result<usize, DriverError> {
    let raw = arg.ok_or(DriverError::MissingArgument)?;
    let out_of_range = || DriverError::OutOfRange {
        arg: raw.to_string(),
        max,
    };

    let trimmed = raw.trim();
    let value = match trimmed.parse::<u64>() {
        Ok(v) => v,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => return Err(out_of_range()),
        Err(_) => match negative_digits(trimmed) {
            Some(digits) if digits.bytes().all(|b| b == b'0') => 0,
            Some(_) => return Err(out_of_range()),
            None => {
                return Err(DriverError::InvalidNumber {
                    arg: raw.to_string(),
                });
            }
        },
    };

    usize::try_from(value)
        .ok()
        .filter(|&n| n <= max)
        .ok_or_else(out_of_range)
}

// Digits of a `-<digits>` token.
fn negative_digits(s: &str) -> Option<&str> {
    s.strip_prefix('-')
        .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn accepts_range_bounds() {
        assert_eq!(parse_thread_count(Some("0"), MAX_NB_THREADS).unwrap(), 0);
        assert_eq!(parse_thread_count(Some("1000"), MAX_NB_THREADS).unwrap(), 1000);
        assert_eq!(parse_thread_count(Some(" 7 "), MAX_NB_THREADS).unwrap(), 7);
        assert_eq!(parse_thread_count(Some("+3"), MAX_NB_THREADS).unwrap(), 3);
    }

    #[test]
    fn negative_zero_is_zero() {
        assert_eq!(parse_thread_count(Some("-0"), MAX_NB_THREADS).unwrap(), 0);
        assert_eq!(parse_thread_count(Some(" -000 "), MAX_NB_THREADS).unwrap(), 0);
    }

    #[test]
    fn missing_argument() {
        assert!(matches!(
            parse_thread_count(None, MAX_NB_THREADS),
            Err(DriverError::MissingArgument)
        ));
    }

    #[test]
    fn non_numeric_is_invalid() {
        for arg in ["abc", "", "12abc", "1.5", "-", "--3"] {
            match parse_thread_count(Some(arg), MAX_NB_THREADS) {
                Err(DriverError::InvalidNumber { arg: got }) => assert_eq!(got, arg),
                other => panic!("expected InvalidNumber for {arg:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn above_max_is_out_of_range() {
        match parse_thread_count(Some("1001"), MAX_NB_THREADS) {
            Err(DriverError::OutOfRange { arg, max }) => {
                assert_eq!(arg, "1001");
                assert_eq!(max, 1000);
            }
            other => panic!("expected OutOfRange, got {other:?}"),
        }
        assert!(matches!(
            parse_thread_count(Some("5"), 4),
            Err(DriverError::OutOfRange { max: 4, .. })
        ));
    }

    #[test]
    fn negative_and_overflowing_are_out_of_range() {
        for arg in ["-1", "-1000", "99999999999999999999999"] {
            assert!(
                matches!(
                    parse_thread_count(Some(arg), MAX_NB_THREADS),
                    Err(DriverError::OutOfRange { .. })
                ),
                "{arg:?} should be out of range"
            );
        }
    }
}
