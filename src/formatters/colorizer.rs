//! Colorizers decorate text according to a log level

use crate::core::LogLevel;

/// Strategy mapping `(text, level)` to decorated text.
///
/// Implementations must be pure so one instance can serve many threads.
pub trait Colorizer: Send + Sync {
    fn colorize(&self, text: &str, level: LogLevel) -> String;
}

/// Returns text unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpColorizer;

impl NoOpColorizer {
    pub fn new() -> Self {
        Self
    }
}

impl Colorizer for NoOpColorizer {
    fn colorize(&self, text: &str, _level: LogLevel) -> String {
        text.to_string()
    }
}

/// ANSI colorizer for terminal output
///
/// | level  | style               |
/// |--------|---------------------|
/// | fatal  | bright red, bold    |
/// | error  | bright red, bold    |
/// | info   | bright blue, bold   |
/// | warn   | bright yellow, bold |
/// | debug  | bright magenta, bold|
/// | silent | unchanged           |
///
/// Escape codes are subject to `colored`'s global switches (`NO_COLOR`,
/// `CLICOLOR_FORCE`, [`colored::control::set_override`]).
#[cfg(feature = "console")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalColorizer;

#[cfg(feature = "console")]
impl TerminalColorizer {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "console")]
impl Colorizer for TerminalColorizer {
    fn colorize(&self, text: &str, level: LogLevel) -> String {
        use colored::Colorize;

        match level {
            LogLevel::Fatal | LogLevel::Error => text.bright_red().bold().to_string(),
            LogLevel::Info => text.bright_blue().bold().to_string(),
            LogLevel::Warn => text.bright_yellow().bold().to_string(),
            LogLevel::Debug => text.bright_magenta().bold().to_string(),
            LogLevel::Silent => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_returns_input() {
        let colorizer = NoOpColorizer::new();
        for level in LogLevel::ALL {
            assert_eq!(colorizer.colorize("INF", level), "INF");
        }
    }

    #[cfg(feature = "console")]
    #[test]
    fn test_terminal_colors() {
        colored::control::set_override(true);
        let colorizer = TerminalColorizer::new();

        // bright red + bold
        let fatal = colorizer.colorize("FTL", LogLevel::Fatal);
        assert!(fatal.contains("FTL"));
        assert!(fatal.contains("91"));
        assert!(fatal.starts_with("\x1b["));
        assert_eq!(fatal, colorizer.colorize("FTL", LogLevel::Error));

        assert!(colorizer.colorize("INF", LogLevel::Info).contains("94"));
        assert!(colorizer.colorize("WRN", LogLevel::Warn).contains("93"));
        assert!(colorizer.colorize("DBG", LogLevel::Debug).contains("95"));
        colored::control::unset_override();
    }

    #[cfg(feature = "console")]
    #[test]
    fn test_terminal_silent_unchanged() {
        let colorizer = TerminalColorizer::new();
        assert_eq!(colorizer.colorize("PRINT", LogLevel::Silent), "PRINT");
    }
}
