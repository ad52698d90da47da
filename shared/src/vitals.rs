use std::fmt;

use serde::{Deserialize, Serialize};

pub const VALUE_PLACEHOLDER: &str = "--";
pub const STATUS_WAITING: &str = "Waiting...";
pub const STATUS_DISCONNECTED: &str = "Disconnected";

/// A vitals field that the sensor bridge may report as a number or a
/// preformatted string.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum VitalValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for VitalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VitalValue::Number(n) => write!(f, "{n}"),
            VitalValue::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Latest heart-rate/SpO2 reading; every field is independently optional.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct VitalReading {
    #[serde(default, rename = "heartRate")]
    pub heart_rate: Option<VitalValue>,
    #[serde(default)]
    pub spo2: Option<VitalValue>,
    #[serde(default)]
    pub status: Option<String>,
}

impl VitalReading {
    pub fn heart_rate_display(&self) -> String {
        self.heart_rate
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| VALUE_PLACEHOLDER.to_string())
    }

    pub fn spo2_display(&self) -> String {
        self.spo2
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| VALUE_PLACEHOLDER.to_string())
    }

    pub fn status_display(&self) -> String {
        self.status
            .clone()
            .unwrap_or_else(|| STATUS_WAITING.to_string())
    }
}

/// How one settled poll attempt affects the display.
#[derive(Clone, Debug, PartialEq)]
pub enum VitalsOutcome {
    /// 2xx with a body; fields fall back per-field.
    Reading(VitalReading),
    /// 204: the bridge is up but no animal is attached. Placeholders,
    /// connected.
    NoData,
    /// Non-2xx, network error, or the 2.5 s deadline fired.
    Offline,
}

impl VitalsOutcome {
    /// Classify a settled HTTP response. The body is only consulted for
    /// 2xx statuses; an unparseable body degrades to placeholders rather
    /// than an error.
    pub fn classify(status: u16, body: Option<VitalReading>) -> Self {
        match status {
            204 => VitalsOutcome::NoData,
            200..=299 => VitalsOutcome::Reading(body.unwrap_or_default()),
            _ => VitalsOutcome::Offline,
        }
    }

    pub fn is_connected(&self) -> bool {
        !matches!(self, VitalsOutcome::Offline)
    }
}

/// Displayed vitals state, folded over settled poll attempts.
#[derive(Clone, Debug, PartialEq)]
pub struct VitalsDisplay {
    pub heart_rate: String,
    pub spo2: String,
    pub status: String,
    pub connected: bool,
}

impl Default for VitalsDisplay {
    fn default() -> Self {
        Self {
            heart_rate: VALUE_PLACEHOLDER.to_string(),
            spo2: VALUE_PLACEHOLDER.to_string(),
            status: STATUS_WAITING.to_string(),
            connected: false,
        }
    }
}

impl VitalsDisplay {
    /// Fold one settled attempt into the display. An offline attempt keeps
    /// the last shown values; only the status line and the connection flag
    /// reflect the loss.
    pub fn apply(&mut self, outcome: VitalsOutcome) {
        match outcome {
            VitalsOutcome::Reading(reading) => {
                self.heart_rate = reading.heart_rate_display();
                self.spo2 = reading.spo2_display();
                self.status = reading.status_display();
                self.connected = true;
            }
            VitalsOutcome::NoData => {
                self.heart_rate = VALUE_PLACEHOLDER.to_string();
                self.spo2 = VALUE_PLACEHOLDER.to_string();
                self.status = STATUS_WAITING.to_string();
                self.connected = true;
            }
            VitalsOutcome::Offline => {
                self.status = STATUS_DISCONNECTED.to_string();
                self.connected = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_content_resets_to_placeholders_but_stays_connected() {
        let outcome = VitalsOutcome::classify(204, None);
        assert_eq!(outcome, VitalsOutcome::NoData);
        assert!(outcome.is_connected());
    }

    #[test]
    fn error_status_is_offline() {
        for status in [400, 404, 500, 502] {
            let outcome = VitalsOutcome::classify(status, None);
            assert_eq!(outcome, VitalsOutcome::Offline);
            assert!(!outcome.is_connected());
        }
    }

    #[test]
    fn fields_fall_back_independently() {
        let reading: VitalReading = serde_json::from_str(r#"{"spo2": 97}"#).unwrap();
        assert_eq!(reading.heart_rate_display(), "--");
        assert_eq!(reading.spo2_display(), "97");
        assert_eq!(reading.status_display(), "Waiting...");
    }

    #[test]
    fn numeric_and_string_fields_both_parse() {
        let reading: VitalReading =
            serde_json::from_str(r#"{"heartRate": "72", "spo2": 98.5, "status": "OK"}"#).unwrap();
        assert_eq!(reading.heart_rate_display(), "72");
        assert_eq!(reading.spo2_display(), "98.5");
        assert_eq!(reading.status_display(), "OK");
    }

    #[test]
    fn ok_with_unparseable_body_degrades_to_placeholders() {
        let outcome = VitalsOutcome::classify(200, None);
        assert_eq!(outcome, VitalsOutcome::Reading(VitalReading::default()));
        assert!(outcome.is_connected());
    }

    #[test]
    fn offline_preserves_last_shown_values() {
        let reading: VitalReading =
            serde_json::from_str(r#"{"heartRate": 72, "spo2": 98, "status": "OK"}"#).unwrap();

        let mut display = VitalsDisplay::default();
        display.apply(VitalsOutcome::Reading(reading));
        assert_eq!(display.heart_rate, "72");
        assert!(display.connected);

        display.apply(VitalsOutcome::Offline);
        assert_eq!(display.heart_rate, "72");
        assert_eq!(display.spo2, "98");
        assert_eq!(display.status, STATUS_DISCONNECTED);
        assert!(!display.connected);
    }

    #[test]
    fn no_data_after_reading_resets_to_placeholders() {
        let mut display = VitalsDisplay::default();
        display.apply(VitalsOutcome::Reading(VitalReading::default()));
        display.apply(VitalsOutcome::NoData);
        assert_eq!(display.heart_rate, VALUE_PLACEHOLDER);
        assert_eq!(display.status, STATUS_WAITING);
        assert!(display.connected);
    }
}
