//! Logging setup for FlexJet binaries.
//!
//! Events are appended as JSON lines to [`Paths::log_file`]; `RUST_LOG`
//! overrides the configured level.

use crate::Paths;
use observability::LogConfig;
use tracing::Level;

/// Install the global subscriber for `service_name`.
///
/// An unrecognised `level` logs at `info`. Without a home directory, events
/// go to stderr instead of the log file.
pub fn init_logging(service_name: &str, level: &str) {
    let level = parse_level(level).unwrap_or(Level::INFO);

    observability::init_with_config(LogConfig {
        service_name: service_name.into(),
        default_level: level.as_str().to_ascii_lowercase(),
        log_path: Paths::new().ok().map(|paths| paths.log_file()),
        also_stderr: false,
    });
}

/// Parse a level name, case-insensitively. `warning` is accepted for `warn`.
pub fn parse_level(level: &str) -> Option<Level> {
    let level = level.trim();
    if level.eq_ignore_ascii_case("warning") {
        return Some(Level::WARN);
    }
    level.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_levels_parse() {
        let cases = [
            ("trace", Level::TRACE),
            ("DEBUG", Level::DEBUG),
            ("Info", Level::INFO),
            ("warn", Level::WARN),
            ("Warning", Level::WARN),
            (" error ", Level::ERROR),
        ];
        for (raw, expected) in cases {
            assert_eq!(parse_level(raw), Some(expected), "{raw}");
        }
    }

    #[test]
    fn unknown_levels_are_rejected() {
        assert_eq!(parse_level(""), None);
        assert_eq!(parse_level("verbose"), None);
    }
}
