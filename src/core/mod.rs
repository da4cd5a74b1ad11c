//! Core model tree: the 1-DoF oscillator, its frequency response and
//! the unit conventions the model relies on.

#[macro_use]
pub mod debug; // gated debug logging (VIBROISO_DEBUG=1) provides debug_log! macro
pub mod error;
pub mod model;
pub mod oscillator;
pub mod sweep;
pub mod units;

pub use error::ModelError;
pub use model::{evaluate, FrfPoint, FrfResult, IsolationRegion, OperatingPoint};
pub use oscillator::OscillatorParameters;
pub use sweep::{Frequencies, FrequencySweep};
pub use units::OperatingSpeed;
