pub mod control;
pub mod detection;
pub mod prediction;
pub mod telemetry;
pub mod vitals;

pub use control::{ControlCommand, Direction};
pub use detection::{Detection, DetectionResponse, FrameSampler};
pub use prediction::{Consensus, ModelPredictions, PredictionRequest, PredictionResponse};
pub use telemetry::{SensorHistory, SensorReport, TelemetrySample};
pub use vitals::{VitalReading, VitalsDisplay, VitalsOutcome};
