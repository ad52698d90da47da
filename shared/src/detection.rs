use serde::{Deserialize, Serialize};

/// Frames between inference submissions on the live feed.
pub const DETECTION_STRIDE: u32 = 30;

/// One bounding box returned by the inference service. Coordinates are the
/// box centre; drawing anchors at `(x - width/2, y - height/2)`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Detection {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub confidence: f64,
    #[serde(rename = "class")]
    pub class_label: String,
    #[serde(default)]
    pub class_id: i64,
    #[serde(default)]
    pub detection_id: String,
}

impl Detection {
    pub fn left(&self) -> f64 {
        self.x - self.width / 2.0
    }

    pub fn top(&self) -> f64 {
        self.y - self.height / 2.0
    }

    pub fn confidence_label(&self) -> String {
        format!("{:.1}%", self.confidence * 100.0)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DetectionResponse {
    #[serde(default)]
    pub predictions: Vec<Detection>,
}

/// Decides which received frames get submitted for inference: exactly
/// every `stride`-th frame, independent of arrival rate.
#[derive(Clone, Debug)]
pub struct FrameSampler {
    stride: u32,
    seen: u32,
}

impl FrameSampler {
    pub fn new(stride: u32) -> Self {
        Self { stride, seen: 0 }
    }

    /// Record one received frame; returns true when this frame should be
    /// submitted.
    pub fn record(&mut self) -> bool {
        self.seen = self.seen.wrapping_add(1);
        self.stride != 0 && self.seen % self.stride == 0
    }

    pub fn seen(&self) -> u32 {
        self.seen
    }
}

impl Default for FrameSampler {
    fn default() -> Self {
        Self::new(DETECTION_STRIDE)
    }
}
