pub mod charts;
pub mod period;
