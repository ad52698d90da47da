use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Most-recent samples retained per the monitoring page.
pub const HISTORY_CAPACITY: usize = 20;

pub const TEMPERATURE_LOW_C: f64 = 18.0;
pub const TEMPERATURE_HIGH_C: f64 = 28.0;
pub const HUMIDITY_LOW_PCT: f64 = 30.0;
pub const HUMIDITY_HIGH_PCT: f64 = 70.0;

/// Raw payload of the sensor GET endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SensorReport {
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
}

/// One environmental reading, stamped with the client-side time it arrived.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TelemetrySample {
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
    pub timestamp: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadingStatus {
    Low,
    Normal,
    High,
}

impl ReadingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReadingStatus::Low => "low",
            ReadingStatus::Normal => "normal",
            ReadingStatus::High => "high",
        }
    }
}

impl TelemetrySample {
    pub fn from_report(report: SensorReport, timestamp: String) -> Self {
        Self {
            temperature: report.temperature,
            humidity: report.humidity,
            pressure: report.pressure,
            timestamp,
        }
    }

    pub fn temperature_status(&self) -> ReadingStatus {
        if self.temperature < TEMPERATURE_LOW_C {
            ReadingStatus::Low
        } else if self.temperature > TEMPERATURE_HIGH_C {
            ReadingStatus::High
        } else {
            ReadingStatus::Normal
        }
    }

    pub fn humidity_status(&self) -> ReadingStatus {
        if self.humidity < HUMIDITY_LOW_PCT {
            ReadingStatus::Low
        } else if self.humidity > HUMIDITY_HIGH_PCT {
            ReadingStatus::High
        } else {
            ReadingStatus::Normal
        }
    }

    /// Values mapped onto a common 0-100 scale for the combined chart:
    /// temperature and humidity are used as-is, pressure is shifted out of
    /// its typical 900-1050 hPa band.
    pub fn normalized(&self) -> (f64, f64, f64) {
        (
            self.temperature.clamp(0.0, 100.0),
            self.humidity.clamp(0.0, 100.0),
            (self.pressure - 900.0).clamp(0.0, 100.0),
        )
    }
}

/// Bounded FIFO of the most recent [`HISTORY_CAPACITY`] telemetry samples.
///
/// Persisted to local storage as a plain JSON array on every successful
/// poll and rehydrated at startup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SensorHistory {
    samples: VecDeque<TelemetrySample>,
}

impl SensorHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from a stored vector, keeping only the most recent entries
    /// if the stored payload is somehow oversized.
    pub fn from_samples(samples: Vec<TelemetrySample>) -> Self {
        let skip = samples.len().saturating_sub(HISTORY_CAPACITY);
        Self {
            samples: samples.into_iter().skip(skip).collect(),
        }
    }

    pub fn push(&mut self, sample: TelemetrySample) {
        if self.samples.len() == HISTORY_CAPACITY {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn latest(&self) -> Option<&TelemetrySample> {
        self.samples.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TelemetrySample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Serializable view for the storage layer.
    pub fn samples(&self) -> &VecDeque<TelemetrySample> {
        &self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(n: usize) -> TelemetrySample {
        TelemetrySample {
            temperature: n as f64,
            humidity: 50.0,
            pressure: 1000.0,
            timestamp: format!("t{n}"),
        }
    }

    #[test]
    fn history_is_bounded_and_ordered() {
        let mut history = SensorHistory::new();
        for n in 0..35 {
            history.push(sample(n));
        }

        assert_eq!(history.len(), HISTORY_CAPACITY);
        let timestamps: Vec<_> = history.iter().map(|s| s.timestamp.as_str()).collect();
        let expected: Vec<String> = (15..35).map(|n| format!("t{n}")).collect();
        assert_eq!(timestamps, expected.iter().map(String::as_str).collect::<Vec<_>>());
        assert_eq!(history.latest().unwrap().timestamp, "t34");
    }

    #[test]
    fn rehydration_truncates_oversized_payloads() {
        let stored: Vec<_> = (0..25).map(sample).collect();
        let history = SensorHistory::from_samples(stored);

        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.iter().next().unwrap().timestamp, "t5");
        assert_eq!(history.latest().unwrap().timestamp, "t24");
    }

    #[test]
    fn history_round_trips_as_plain_array() {
        let mut history = SensorHistory::new();
        history.push(sample(1));
        history.push(sample(2));

        let json = serde_json::to_string(history.samples()).unwrap();
        assert!(json.starts_with('['));
        let restored: Vec<TelemetrySample> = serde_json::from_str(&json).unwrap();
        assert_eq!(SensorHistory::from_samples(restored), history);
    }

    #[test]
    fn temperature_and_humidity_statuses() {
        let mut s = sample(0);
        s.temperature = 17.9;
        assert_eq!(s.temperature_status(), ReadingStatus::Low);
        s.temperature = 18.0;
        assert_eq!(s.temperature_status(), ReadingStatus::Normal);
        s.temperature = 28.1;
        assert_eq!(s.temperature_status(), ReadingStatus::High);

        s.humidity = 29.0;
        assert_eq!(s.humidity_status(), ReadingStatus::Low);
        s.humidity = 70.0;
        assert_eq!(s.humidity_status(), ReadingStatus::Normal);
        s.humidity = 71.0;
        assert_eq!(s.humidity_status(), ReadingStatus::High);
    }

    #[test]
    fn normalization_shifts_pressure_and_clamps() {
        let s = TelemetrySample {
            temperature: 120.0,
            humidity: -5.0,
            pressure: 1013.0,
            timestamp: "now".into(),
        };
        assert_eq!(s.normalized(), (100.0, 0.0, 100.0));
    }
}
