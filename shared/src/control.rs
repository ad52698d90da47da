use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Single-letter directional tokens understood by the vehicle control
/// endpoint.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, EnumIter,
)]
pub enum Direction {
    #[serde(rename = "f")]
    #[strum(serialize = "f")]
    Forward,
    #[serde(rename = "b")]
    #[strum(serialize = "b")]
    Backward,
    #[serde(rename = "a")]
    #[strum(serialize = "a")]
    Left,
    #[serde(rename = "c")]
    #[strum(serialize = "c")]
    Right,
    #[serde(rename = "s")]
    #[strum(serialize = "s")]
    Stop,
}

impl Direction {
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Forward => "Forward",
            Direction::Backward => "Backward",
            Direction::Left => "Left",
            Direction::Right => "Right",
            Direction::Stop => "Stop",
        }
    }
}

/// POST body of the control endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ControlCommand {
    pub direction: Direction,
}

impl ControlCommand {
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }
}
