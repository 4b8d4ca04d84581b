//! Running speeds in km/h.

pub const MIN_SPEED: f64 = 3.0;
pub const SLOW_SPEED: f64 = 5.0;
pub const MEAN_SPEED: f64 = 8.0;
pub const MAX_SPEED: f64 = 10.0;
pub const FERRY_SPEED: f64 = 15.0;
