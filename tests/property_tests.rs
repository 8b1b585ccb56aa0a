//! Property-based tests for rust_console_logger using proptest

use parking_lot::Mutex;
use proptest::prelude::*;
use rust_console_logger::prelude::*;
use rust_console_logger::core::trim_trailing_newline;
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Fatal),
        Just(LogLevel::Silent),
        Just(LogLevel::Error),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Debug),
    ]
}

#[derive(Default)]
struct Capture(Mutex<Vec<Vec<u8>>>);

impl Writer for Capture {
    fn write(&self, data: &[u8], _level: LogLevel) -> Result<()> {
        self.0.lock().push(data.to_vec());
        Ok(())
    }
}

fn logger(threshold: LogLevel, colorize: bool) -> (Logger, Arc<Capture>) {
    let capture = Arc::new(Capture::default());
    let logger = Logger::builder()
        .level(threshold)
        .formatter(ConsoleFormatter::new(
            ConsoleFormatterConfig::new()
                .with_timestamp(false)
                .with_colorize(colorize),
        ))
        .shared_writer(capture.clone())
        .exit_handler(Arc::new(|_| {}))
        .build();
    (logger, capture)
}

proptest! {
    /// Name and parse are inverse
    #[test]
    fn test_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
        prop_assert_eq!(LogLevel::try_from(level.rank()).unwrap(), level);
    }

    /// Ordering follows the numeric rank
    #[test]
    fn test_level_ordering(a in any_level(), b in any_level()) {
        prop_assert_eq!(a < b, a.rank() < b.rank());
        prop_assert_eq!(a == b, a.rank() == b.rank());
    }

    /// Out of range ranks render as unknown
    #[test]
    fn test_unknown_rank_name(rank in 6u8..) {
        prop_assert_eq!(LogLevel::name_of(rank), "unknown");
        prop_assert!(LogLevel::try_from(rank).is_err());
    }

    /// Events less severe than the threshold never reach the writer
    #[test]
    fn test_threshold_filtering(threshold in any_level(), level in any_level(), msg in "[a-z ]{0,20}") {
        let (logger, capture) = logger(threshold, false);
        logger.event(level).msg(msg);

        let written = !capture.0.lock().is_empty();
        prop_assert_eq!(written, level.rank() <= threshold.rank());
    }

    /// Unlabelled events get the level's default label
    #[test]
    fn test_default_label(level in any_level(), msg in "[a-z]{1,12}") {
        let (logger, capture) = logger(LogLevel::Debug, false);
        logger.event(level).msg(msg.clone());

        let output = String::from_utf8(capture.0.lock()[0].clone()).unwrap();
        let expected = match level.default_label() {
            Some(label) => format!("[{}] {}", label, msg),
            None => msg,
        };
        prop_assert_eq!(output, expected);
    }

    /// Explicit labels, empty or not, are never replaced
    #[test]
    fn test_explicit_label_kept(level in any_level(), label in "[A-Z]{0,5}") {
        let (logger, capture) = logger(LogLevel::Debug, false);
        logger.event(level).label(label.clone()).msg("m");

        let output = String::from_utf8(capture.0.lock()[0].clone()).unwrap();
        let expected = if label.is_empty() { "m".to_string() } else { format!("[{}] m", label) };
        prop_assert_eq!(output, expected);
    }

    /// Trimming removes at most one line break
    #[test]
    fn test_newline_trim_idempotent(body in "[a-z]{0,10}", breaks in 0usize..3) {
        let message = format!("{}{}", body, "\n".repeat(breaks));
        let once = trim_trailing_newline(&message);
        prop_assert_eq!(once.len(), message.len() - breaks.min(1));
        if breaks == 0 {
            prop_assert_eq!(trim_trailing_newline(once), once);
        }
    }

    /// Messages appear verbatim and without escapes when colors are off
    #[test]
    fn test_message_verbatim_without_escapes(level in any_level(), msg in "[ -~]{0,40}", value in any::<i64>()) {
        let (logger, capture) = logger(LogLevel::Debug, false);
        logger.event(level).field("n", value).msg(msg.clone());

        let output = String::from_utf8(capture.0.lock()[0].clone()).unwrap();
        prop_assert!(output.contains(&msg));
        prop_assert!(!output.contains('\x1b'));
        let suffix = format!(" n={}", value);
        prop_assert!(output.ends_with(&suffix));
    }
}
