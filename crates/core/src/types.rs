/// All primary keys are SQLite `INTEGER PRIMARY KEY` rowids.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Serde helpers for writing [`Timestamp`] values in the fixed wire format
/// (RFC 3339, microsecond precision, `Z` suffix).
pub mod timestamp_format {
    use chrono::SecondsFormat;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Timestamp;

    pub fn serialize<S: Serializer>(value: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Micros, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Timestamp, D::Error> {
        let raw = String::deserialize(deserializer)?;
        chrono::DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&chrono::Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Serialize, Deserialize)]
    struct Wrapper {
        #[serde(with = "timestamp_format")]
        at: Timestamp,
    }

    #[test]
    fn serializes_with_fixed_precision() {
        let at = chrono::Utc.with_ymd_and_hms(2026, 10, 19, 8, 15, 0).unwrap();
        let json = serde_json::to_value(Wrapper { at }).unwrap();
        assert_eq!(json["at"], "2026-10-19T08:15:00.000000Z");
    }

    #[test]
    fn parses_offset_timestamps_as_utc() {
        let parsed: Wrapper =
            serde_json::from_str(r#"{"at":"2026-10-19T10:15:00.5+02:00"}"#).unwrap();
        assert_eq!(
            parsed.at.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            "2026-10-19T08:15:00.500Z"
        );
    }
}
