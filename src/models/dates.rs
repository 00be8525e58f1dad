use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Parses the date formats seen on the wire.
///
/// Accepts RFC 3339 (`2025-04-08T13:48:01.000000Z`), a `Z`-suffixed timestamp
/// without seconds (`2025-04-08T13:48Z`) and a bare date (`2024-01-01`), which
/// is read as midnight UTC.
pub fn parse_flexible_datetime(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Some(without_z) = s.strip_suffix('Z') {
        if let Ok(naive) = NaiveDateTime::parse_from_str(without_z, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(naive.and_utc());
        }

        if let Ok(naive) = NaiveDateTime::parse_from_str(without_z, "%Y-%m-%dT%H:%M") {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

pub(crate) fn deserialize_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_flexible_datetime(&s)
        .ok_or_else(|| serde::de::Error::custom(format!("Failed to parse datetime '{s}'")))
}

pub(crate) fn deserialize_optional_datetime<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(s) => parse_flexible_datetime(&s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("Failed to parse datetime '{s}'"))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn test_parses_fractional_rfc3339() {
        let dt = parse_flexible_datetime("2025-04-08T13:48:01.000000Z").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2025, 4, 8, 13, 48, 1).unwrap());
    }

    #[test]
    fn test_parses_without_seconds() {
        let dt = parse_flexible_datetime("2026-01-12T19:30Z").unwrap();
        assert_eq!(dt.hour(), 19);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn test_parses_bare_date_as_midnight() {
        let dt = parse_flexible_datetime("2024-01-01").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_flexible_datetime("yesterday").is_none());
        assert!(parse_flexible_datetime("").is_none());
    }
}
