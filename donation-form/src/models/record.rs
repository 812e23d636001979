// Donation record model
//
// The record is the JSON payload written to the session store on a successful
// submission. Field names follow the browser form ids (camelCase), so a
// confirmation page can read it back without a mapping layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hand-over mode selected with the form's radio group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Donation is collected at the donor's address.
    #[default]
    Pickup,
    /// Donor brings the donation to the office.
    Office,
}

impl Mode {
    /// Radio value as it appears in the document and in the stored JSON.
    pub fn as_id(&self) -> &'static str {
        match self {
            Mode::Pickup => "pickup",
            Mode::Office => "office",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Pickup => "Pickup at my address",
            Mode::Office => "Drop-off at the office",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Mode::Pickup => Mode::Office,
            Mode::Office => Mode::Pickup,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_id())
    }
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pickup" => Ok(Mode::Pickup),
            "office" => Ok(Mode::Office),
            other => Err(anyhow::anyhow!("Unknown hand-over mode: '{}'", other)),
        }
    }
}

/// One registration attempt, collected from the current field values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationRecord {
    pub mode: Mode,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub clothing_type: String,
    #[serde(default)]
    pub crisis: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub postcode: String,
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
}

impl DonationRecord {
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string(self)
            .map_err(|e| anyhow::anyhow!("Failed to serialize donation record: {}", e))
    }

    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw)
            .map_err(|e| anyhow::anyhow!("Stored donation record is not valid JSON: {}", e))
    }
}

/// ISO-8601 timestamps with millisecond precision and a `Z` suffix
/// (e.g. `2025-03-01T09:30:00.000Z`).
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> DonationRecord {
        DonationRecord {
            mode: Mode::Pickup,
            name: "Erika".to_string(),
            email: "erika@example.org".to_string(),
            clothing_type: "coats".to_string(),
            crisis: "regionA".to_string(),
            address: "Main St 1".to_string(),
            postcode: "10999".to_string(),
            timestamp: Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn mode_parses_radio_values() {
        assert_eq!("pickup".parse::<Mode>().unwrap(), Mode::Pickup);
        assert_eq!(" Office ".parse::<Mode>().unwrap(), Mode::Office);
        assert!("courier".parse::<Mode>().is_err());
    }

    #[test]
    fn mode_toggle_flips_between_both_values() {
        assert_eq!(Mode::Pickup.toggle(), Mode::Office);
        assert_eq!(Mode::Office.toggle(), Mode::Pickup);
    }

    #[test]
    fn record_json_uses_form_field_names() {
        let json = sample().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        for key in [
            "mode",
            "name",
            "email",
            "clothingType",
            "crisis",
            "address",
            "postcode",
            "timestamp",
        ] {
            assert!(value.get(key).is_some(), "Missing key '{}' in {}", key, json);
        }
        assert_eq!(value["mode"], "pickup");
        assert_eq!(value["timestamp"], "2025-03-01T09:30:00.000Z");
    }

    #[test]
    fn record_reads_back_from_stored_json() {
        let record = sample();
        let decoded = DonationRecord::from_json(&record.to_json().unwrap()).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn record_rejects_garbage_payload() {
        let err = DonationRecord::from_json("{not json").unwrap_err();
        assert!(
            err.to_string().contains("not valid JSON"),
            "Unexpected error: {}",
            err
        );
    }
}
