pub mod chart;
pub mod control_pad;
pub mod nav;
