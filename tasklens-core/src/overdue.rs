//! Overdue classification, tolerant of two due-date encodings.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Parse a due date in either supported encoding, returning UTC.
///
/// - Contains a `T`: full ISO-8601 date-time. A trailing `Z` is read as
///   offset `+00:00`; an offset-less timestamp is assumed UTC.
/// - Otherwise: date-only `YYYY/MM/DD`, taken as midnight UTC.
///
/// Anything else returns `None`. A malformed date must never abort the
/// report; the task just drops out of the overdue set.
pub fn parse_due_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if raw.contains('T') {
        let normalized = match raw.strip_suffix('Z') {
            Some(stripped) => format!("{stripped}+00:00"),
            None => raw.to_string(),
        };
        if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
            return Some(dt.with_timezone(&Utc));
        }
        for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
            if let Ok(ndt) = NaiveDateTime::parse_from_str(raw, fmt) {
                return Some(Utc.from_utc_datetime(&ndt));
            }
        }
        return None;
    }

    let date = NaiveDate::parse_from_str(raw, "%Y/%m/%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight))
}

/// True when the due date parses and lies strictly before `now`.
///
/// Callers are expected to skip completed tasks; this only looks at the
/// date.
pub fn is_overdue(due_date: Option<&str>, now: DateTime<Utc>) -> bool {
    due_date
        .and_then(parse_due_date)
        .map(|due| due < now)
        .unwrap_or(false)
}
