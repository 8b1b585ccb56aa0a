//! Timestamp formatting utilities
//!
//! Provides the configurable timestamp patterns used by formatters.
//! Supports RFC 3339, ISO 8601, Unix timestamps, and custom formats.

use super::error::{LoggerError, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use rust_console_logger::core::TimestampFormat;
/// use chrono::Utc;
///
/// let format = TimestampFormat::Rfc3339;
/// let timestamp = format.format(&Utc::now()).unwrap();
/// assert!(timestamp.contains('T'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// RFC 3339 format: `2025-01-08T10:30:45Z`
    ///
    /// This is the default format.
    #[default]
    Rfc3339,

    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// ISO 8601 with microseconds: `2025-01-08T10:30:45.123456Z`
    Iso8601Micros,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    ///
    /// ```
    /// use rust_console_logger::core::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%H:%M:%S".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Format a `DateTime<Utc>` according to this format
    ///
    /// Fails when a custom pattern contains an invalid specifier.
    pub fn format(&self, datetime: &DateTime<Utc>) -> Result<String> {
        let mut out = String::with_capacity(32);
        self.write_to(&mut out, datetime)?;
        Ok(out)
    }

    /// Append the formatted timestamp to `buf`.
    ///
    /// On failure `buf` may hold a partial rendering.
    pub fn write_to(&self, buf: &mut String, datetime: &DateTime<Utc>) -> Result<()> {
        let written = match self {
            TimestampFormat::Rfc3339 => {
                buf.push_str(&datetime.to_rfc3339_opts(SecondsFormat::Secs, true));
                Ok(())
            }
            TimestampFormat::Iso8601 => write!(buf, "{}", datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ")),
            TimestampFormat::Iso8601Micros => {
                write!(buf, "{}", datetime.format("%Y-%m-%dT%H:%M:%S%.6fZ"))
            }
            TimestampFormat::Unix => write!(buf, "{}", datetime.timestamp()),
            TimestampFormat::UnixMillis => write!(buf, "{}", datetime.timestamp_millis()),
            TimestampFormat::Custom(pattern) => write!(buf, "{}", datetime.format(pattern)),
        };

        written.map_err(|_| {
            LoggerError::formatter("timestamp", format!("invalid timestamp pattern {:?}", self))
        })
    }

    /// Check if this is a Unix-based numeric format
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, TimestampFormat::Unix | TimestampFormat::UnixMillis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Utc> {
        // 2025-01-08 10:30:45.123456 UTC
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456)
    }

    #[test]
    fn test_rfc3339_format() {
        let result = TimestampFormat::Rfc3339.format(&fixed_datetime()).unwrap();
        assert_eq!(result, "2025-01-08T10:30:45Z");
    }

    #[test]
    fn test_rfc3339_uses_zulu_for_utc() {
        let midnight = Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).single().expect("valid datetime");
        let mut buf = String::from("at ");
        TimestampFormat::Rfc3339.write_to(&mut buf, &midnight).unwrap();
        assert_eq!(buf, "at 2024-02-29T00:00:00Z");
        assert!(!buf.contains("+00:00"));
    }

    #[test]
    fn test_iso8601_format() {
        let result = TimestampFormat::Iso8601.format(&fixed_datetime()).unwrap();
        assert_eq!(result, "2025-01-08T10:30:45.123Z");
    }

    #[test]
    fn test_iso8601_micros_format() {
        let result = TimestampFormat::Iso8601Micros.format(&fixed_datetime()).unwrap();
        assert_eq!(result, "2025-01-08T10:30:45.123456Z");
    }

    #[test]
    fn test_unix_formats() {
        let secs: i64 = TimestampFormat::Unix
            .format(&fixed_datetime())
            .unwrap()
            .parse()
            .expect("valid unix timestamp");
        let millis: i64 = TimestampFormat::UnixMillis
            .format(&fixed_datetime())
            .unwrap()
            .parse()
            .expect("valid unix millis timestamp");
        assert_eq!(secs, 1736332245);
        assert_eq!(millis, 1736332245123);
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::Custom("%Y/%m/%d %H:%M".to_string());
        assert_eq!(format.format(&fixed_datetime()).unwrap(), "2025/01/08 10:30");
    }

    #[test]
    fn test_invalid_custom_format_is_an_error() {
        let format = TimestampFormat::Custom("%Q".to_string());
        let err = format.format(&fixed_datetime()).unwrap_err();
        assert!(matches!(err, LoggerError::FormatterError { .. }));
    }

    #[test]
    fn test_default_is_rfc3339() {
        assert_eq!(TimestampFormat::default(), TimestampFormat::Rfc3339);
    }

    #[test]
    fn test_is_numeric() {
        assert!(!TimestampFormat::Rfc3339.is_numeric());
        assert!(TimestampFormat::Unix.is_numeric());
        assert!(TimestampFormat::UnixMillis.is_numeric());
        assert!(!TimestampFormat::Custom("%s".to_string()).is_numeric());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let json = serde_json::to_string(&TimestampFormat::Iso8601).expect("serialize");
        assert_eq!(json, "\"Iso8601\"");

        let format: TimestampFormat =
            serde_json::from_str(r#"{"Custom":"%Y-%m-%d"}"#).expect("deserialize Custom");
        assert_eq!(format, TimestampFormat::Custom("%Y-%m-%d".to_string()));
    }
}
