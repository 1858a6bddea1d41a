/// Timestamp normalisation: epoch seconds to ISO-8601 UTC with a `Z` suffix.
use chrono::{DateTime, Datelike, Utc};
use tracing::debug;

/// Output format shared by entry timestamps and the envelope's scan time.
const ISO_UTC_SECONDS: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Convert whole epoch seconds to `YYYY-MM-DDTHH:MM:SSZ`.
///
/// Returns `None` for absent input and for values that do not map to a
/// calendar date in years 1 through 9999. An unrepresentable value is
/// recoverable and only logged at debug level.
pub fn format_timestamp(epoch: Option<i64>) -> Option<String> {
    let secs = epoch?;
    match DateTime::<Utc>::from_timestamp(secs, 0) {
        Some(dt) if (1..=9999).contains(&dt.year()) => Some(format_utc(&dt)),
        _ => {
            debug!("Invalid timestamp {secs}");
            None
        }
    }
}

/// Render an already-valid UTC instant, truncated to the second.
pub fn format_utc(dt: &DateTime<Utc>) -> String {
    dt.format(ISO_UTC_SECONDS).to_string()
}

/// The current wall-clock time, formatted like every other timestamp.
pub fn now_utc() -> String {
    format_utc(&Utc::now())
}
