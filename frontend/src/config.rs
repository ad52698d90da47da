//! Remote endpoint configuration.
//!
//! Defaults point at the deployment's servers and can be overridden at
//! compile time (e.g. `SENSOR_URL=... trunk build`). Pages receive the
//! config through props so tests can point them at mock endpoints.

/// Sensor poll cadence.
pub const SENSOR_POLL_MS: u32 = 5_000;
/// Hard deadline on one vitals attempt.
pub const VITALS_TIMEOUT_MS: u32 = 2_500;
/// Pause between a settled vitals attempt and the next one.
pub const VITALS_REPOLL_MS: u32 = 2_000;

/// Local-storage key holding the serialized telemetry history.
pub const SENSOR_HISTORY_KEY: &str = "sensorData";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// GET: environmental telemetry, polled every 5 s.
    pub sensor_url: String,
    /// POST: directional commands for the feeder vehicle.
    pub control_url: String,
    /// GET: heart rate / SpO2 readings.
    pub vitals_url: String,
    /// WebSocket: unframed JPEG frames, one per message.
    pub stream_url: String,
    /// POST: detection inference (form-encoded base64 JPEG).
    pub detection_url: String,
    pub detection_api_key: String,
    /// POST: symptom-based disease classification.
    pub predict_url: String,
}

fn env_or(value: Option<&'static str>, default: &str) -> String {
    value.unwrap_or(default).to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sensor_url: env_or(option_env!("SENSOR_URL"), "http://10.137.194.50:8000/sensor"),
            control_url: env_or(option_env!("CONTROL_URL"), "http://10.137.194.51:8000/control"),
            vitals_url: env_or(option_env!("VITALS_URL"), "http://localhost:8000/api/vitals"),
            stream_url: env_or(option_env!("STREAM_URL"), "ws://10.137.194.51:8000/share"),
            detection_url: env_or(
                option_env!("DETECTION_URL"),
                "https://serverless.roboflow.com/person-detection-9a6mk/16",
            ),
            detection_api_key: env_or(option_env!("DETECTION_API_KEY"), "iWTbz1A2Zwcd6yJNw8F3"),
            predict_url: env_or(option_env!("PREDICT_URL"), "http://127.0.0.1:8000/api/predict"),
        }
    }
}
