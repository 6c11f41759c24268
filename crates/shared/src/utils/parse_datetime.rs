use chrono::{DateTime, NaiveDateTime, Utc};

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Accepts RFC 3339 timestamps and the offset-less forms produced by HTML
/// `datetime-local` inputs, which are taken as UTC.
pub fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_rfc3339_with_offset() {
        let dt = parse_datetime("2026-03-14T19:30:00+01:00").unwrap();
        assert_eq!(dt.hour(), 18);
    }

    #[test]
    fn parses_datetime_local_input() {
        let dt = parse_datetime("2026-03-14T19:30").unwrap();
        assert_eq!((dt.day(), dt.hour(), dt.minute()), (14, 19, 30));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_datetime("").is_none());
        assert!(parse_datetime("tomorrow evening").is_none());
    }
}
