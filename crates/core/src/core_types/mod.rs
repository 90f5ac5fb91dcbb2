//! Core types and units

pub mod observation;
pub mod units;

pub use observation::{Season, WeatherObservation};
pub use units::*;
