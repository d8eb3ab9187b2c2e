use chrono::NaiveDateTime;
use tracing::warn;

/// The one timestamp format the datasets use for both `Start Time` and
/// `End Time` columns.
pub const TRIP_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a trip timestamp in the fixed `YYYY-MM-DD HH:MM:SS` format.
///
/// Returns `None` for empty strings or anything that does not match exactly;
/// the loader turns that into a fatal, row-addressed load error.
pub fn parse_trip_timestamp(s: &str) -> Option<NaiveDateTime> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }

    match NaiveDateTime::parse_from_str(trimmed, TRIP_TIMESTAMP_FORMAT) {
        Ok(ts) => Some(ts),
        Err(_) => {
            warn!("could not parse trip timestamp {:?}", s);
            None
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
