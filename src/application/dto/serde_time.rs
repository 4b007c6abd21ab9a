// src/application/dto/serde_time.rs
//! RFC 3339 timestamps with microsecond precision, always in UTC (`Z`).

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Micros, true))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(D::Error::custom)
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Stamp {
        #[serde(with = "super")]
        at: DateTime<Utc>,
    }

    #[test]
    fn writes_utc_with_micros() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let json = serde_json::to_string(&Stamp { at }).unwrap();
        assert_eq!(json, r#"{"at":"2024-01-02T03:04:05.000000Z"}"#);
    }

    #[test]
    fn reads_offsets_into_utc() {
        let stamp: Stamp = serde_json::from_str(r#"{"at":"2024-01-02T05:04:05+02:00"}"#).unwrap();
        assert_eq!(stamp.at, Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap());
    }
}
