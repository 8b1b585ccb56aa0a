//! Log level definitions
//!
//! Levels are ranked by numeric value where a lower rank means a more
//! severe level. `Silent` sits between `Fatal` and `Error`: it is not a
//! severity but the tier used for plain user-facing output.

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Name rendered for ranks outside the declared range
pub const UNKNOWN_LEVEL: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum LogLevel {
    Fatal = 0,
    Silent = 1,
    Error = 2,
    Info = 3,
    Warn = 4,
    Debug = 5,
}

impl LogLevel {
    /// All levels, most severe first
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Fatal,
        LogLevel::Silent,
        LogLevel::Error,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Debug,
    ];

    #[must_use]
    pub const fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Fatal => "fatal",
            LogLevel::Silent => "silent",
            LogLevel::Error => "error",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Debug => "debug",
        }
    }

    #[must_use]
    pub const fn rank(&self) -> u8 {
        *self as u8
    }

    /// Look up a level by rank
    #[must_use]
    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            0 => Some(LogLevel::Fatal),
            1 => Some(LogLevel::Silent),
            2 => Some(LogLevel::Error),
            3 => Some(LogLevel::Info),
            4 => Some(LogLevel::Warn),
            5 => Some(LogLevel::Debug),
            _ => None,
        }
    }

    /// Name for an arbitrary rank, `"unknown"` when out of range
    #[must_use]
    pub fn name_of(rank: u8) -> &'static str {
        Self::from_rank(rank).map_or(UNKNOWN_LEVEL, |level| level.to_str())
    }

    /// Short tag used when an event carries no explicit label.
    ///
    /// `Silent` has no default label.
    #[must_use]
    pub const fn default_label(&self) -> Option<&'static str> {
        match self {
            LogLevel::Fatal => Some("FTL"),
            LogLevel::Silent => None,
            LogLevel::Error => Some("ERR"),
            LogLevel::Info => Some("INF"),
            LogLevel::Warn => Some("WRN"),
            LogLevel::Debug => Some("DBG"),
        }
    }

    /// True when `self` is at least as severe as `threshold`
    #[must_use]
    pub fn passes(&self, threshold: LogLevel) -> bool {
        *self <= threshold
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fatal" => Ok(LogLevel::Fatal),
            "silent" => Ok(LogLevel::Silent),
            "error" => Ok(LogLevel::Error),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "debug" => Ok(LogLevel::Debug),
            _ => Err(LoggerError::unrecognized_level(s)),
        }
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = LoggerError;

    fn try_from(rank: u8) -> Result<Self, LoggerError> {
        Self::from_rank(rank).ok_or(LoggerError::InvalidLevel { rank })
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> Self {
        level.rank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_order() {
        assert!(LogLevel::Fatal < LogLevel::Silent);
        assert!(LogLevel::Silent < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Debug);
        for (rank, level) in LogLevel::ALL.iter().enumerate() {
            assert_eq!(level.rank() as usize, rank);
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(LogLevel::Fatal.to_string(), "fatal");
        assert_eq!(LogLevel::Silent.to_string(), "silent");
        assert_eq!(LogLevel::Warn.to_string(), "warn");
        assert_eq!(LogLevel::name_of(3), "info");
        assert_eq!(LogLevel::name_of(6), "unknown");
        assert_eq!(LogLevel::name_of(u8::MAX), "unknown");
    }

    #[test]
    fn test_parse() {
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);

        let err = "verbose".parse::<LogLevel>().unwrap_err();
        assert!(matches!(err, LoggerError::UnrecognizedLevel { ref input } if input == "verbose"));
    }

    #[test]
    fn test_try_from_rank() {
        assert_eq!(LogLevel::try_from(0).unwrap(), LogLevel::Fatal);
        assert!(matches!(
            LogLevel::try_from(42),
            Err(LoggerError::InvalidLevel { rank: 42 })
        ));
    }

    #[test]
    fn test_try_from_through_trait_bound() {
        fn convert<T: TryFrom<u8, Error = LoggerError>>(rank: u8) -> Result<T, LoggerError> {
            T::try_from(rank)
        }

        assert_eq!(convert::<LogLevel>(5).unwrap(), LogLevel::Debug);
        assert!(matches!(
            convert::<LogLevel>(6),
            Err(LoggerError::InvalidLevel { rank: 6 })
        ));
        assert_eq!(u8::from(LogLevel::Warn), 4);
    }

    #[test]
    fn test_default_labels() {
        assert_eq!(LogLevel::Fatal.default_label(), Some("FTL"));
        assert_eq!(LogLevel::Error.default_label(), Some("ERR"));
        assert_eq!(LogLevel::Info.default_label(), Some("INF"));
        assert_eq!(LogLevel::Warn.default_label(), Some("WRN"));
        assert_eq!(LogLevel::Debug.default_label(), Some("DBG"));
        assert_eq!(LogLevel::Silent.default_label(), None);
    }

    #[test]
    fn test_passes_threshold() {
        assert!(LogLevel::Error.passes(LogLevel::Info));
        assert!(LogLevel::Info.passes(LogLevel::Info));
        assert!(!LogLevel::Debug.passes(LogLevel::Info));
        assert!(LogLevel::Fatal.passes(LogLevel::Fatal));
        assert!(!LogLevel::Silent.passes(LogLevel::Fatal));
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&LogLevel::Warn).unwrap();
        assert_eq!(json, "\"warn\"");
        let level: LogLevel = serde_json::from_str("\"silent\"").unwrap();
        assert_eq!(level, LogLevel::Silent);
    }
}
