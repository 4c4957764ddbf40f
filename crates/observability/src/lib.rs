//! Tracing/logging setup shared by binaries.

/// Initialize process-wide tracing, picking the output format from
/// `STOCKROOM_LOG_FORMAT` (unset means JSON).
///
/// An unrecognized format falls back to JSON and is reported as a warning
/// once the subscriber is installed.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    let raw = std::env::var(tracing::LOG_FORMAT_ENV).ok();
    let (format, rejected) = resolve_format(raw.as_deref());

    tracing::init(format);

    if let Some(err) = rejected {
        ::tracing::warn!(error = %err, "falling back to JSON logs");
    }
}

/// Parse an optional format value, returning the error alongside the fallback.
fn resolve_format(raw: Option<&str>) -> (LogFormat, Option<ParseLogFormatError>) {
    match raw.map(str::parse::<LogFormat>) {
        None => (LogFormat::default(), None),
        Some(Ok(format)) => (format, None),
        Some(Err(err)) => (LogFormat::default(), Some(err)),
    }
}

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use tracing::{LogFormat, ParseLogFormatError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_format_defaults_to_json() {
        assert_eq!(resolve_format(None), (LogFormat::Json, None));
    }

    #[test]
    fn known_format_is_used() {
        assert_eq!(resolve_format(Some("pretty")), (LogFormat::Pretty, None));
    }

    #[test]
    fn unknown_format_falls_back_and_keeps_the_error() {
        let (format, rejected) = resolve_format(Some("xml"));
        assert_eq!(format, LogFormat::Json);
        assert_eq!(
            rejected.map(|err| err.to_string()),
            Some("unknown log format: xml (expected `json` or `pretty`)".to_string())
        );
    }
}
