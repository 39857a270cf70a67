use chrono::{DateTime, SecondsFormat, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// ISO-8601 with millisecond precision and a `Z` suffix, the form webhook
/// consumers expect.
pub fn to_iso8601(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn from_rfc3339(s: &str) -> anyhow::Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(s.trim())?.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn iso8601_uses_millis_and_z() {
        let dt = Utc.with_ymd_and_hms(2025, 3, 10, 14, 0, 0).unwrap();
        assert_eq!(to_iso8601(dt), "2025-03-10T14:00:00.000Z");
    }

    #[test]
    fn parses_offsets_into_utc() {
        let dt = from_rfc3339("2025-03-10T11:00:00-03:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2025, 3, 10, 14, 0, 0).unwrap());
        assert!(from_rfc3339("not a date").is_err());
    }
}
