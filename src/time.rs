use std::fmt;
use std::str::FromStr;

use crate::error::SignalError;

/// Time unit for timestamp arrays
///
/// Used by [`estimate_fs`](crate::signal_processing::estimate_fs) to convert
/// inter-sample intervals to seconds before inverting them into a rate.
///
/// # Parsing formats
/// - `s`, `sec`, `seconds`
/// - `ms`, `milliseconds`
/// - `us`, `μs`, `microseconds`
/// - `ns`, `nanoseconds`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Seconds,
    Milliseconds,
    Microseconds,
    Nanoseconds,
}

impl TimeUnit {
    /// Factor that converts a duration in this unit to seconds
    pub fn to_seconds(self) -> f64 {
        match self {
            TimeUnit::Seconds => 1.0,
            TimeUnit::Milliseconds => 1e-3,
            TimeUnit::Microseconds => 1e-6,
            TimeUnit::Nanoseconds => 1e-9,
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TimeUnit::Seconds => "s",
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Microseconds => "us",
            TimeUnit::Nanoseconds => "ns",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for TimeUnit {
    type Err = SignalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s" | "sec" | "seconds" => Ok(TimeUnit::Seconds),
            "ms" | "milliseconds" => Ok(TimeUnit::Milliseconds),
            "us" | "μs" | "microseconds" => Ok(TimeUnit::Microseconds),
            "ns" | "nanoseconds" => Ok(TimeUnit::Nanoseconds),
            other => Err(SignalError::UnsupportedParameter(format!(
                "unknown time unit: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_units() {
        assert_eq!("s".parse::<TimeUnit>().unwrap(), TimeUnit::Seconds);
        assert_eq!("ms".parse::<TimeUnit>().unwrap(), TimeUnit::Milliseconds);
        assert_eq!(" US ".parse::<TimeUnit>().unwrap(), TimeUnit::Microseconds);
        assert_eq!("nanoseconds".parse::<TimeUnit>().unwrap(), TimeUnit::Nanoseconds);
    }

    #[test]
    fn test_unknown_unit_is_rejected() {
        let err = "fortnights".parse::<TimeUnit>().unwrap_err();
        assert!(matches!(err, SignalError::UnsupportedParameter(_)));
    }

    #[test]
    fn test_to_seconds() {
        assert_eq!(TimeUnit::Seconds.to_seconds(), 1.0);
        assert_eq!(TimeUnit::Milliseconds.to_seconds(), 1e-3);
    }
}
