//! vibroiso: forced response and vibration isolation of a 1-DoF oscillator.
//!
//! The numerical model lives in [`core`]; everything else is a caller of it.
//!
//! ```
//! use vibroiso::core::{evaluate, FrequencySweep, OperatingSpeed, OscillatorParameters};
//!
//! let params = OscillatorParameters::new(10_000.0, 10.0, 0.05).unwrap();
//! let frf = evaluate(&params, &FrequencySweep::default_for(&params));
//! assert_eq!(frf.points.len(), 2000);
//!
//! let point = OperatingSpeed::Rpm(600.0).effectiveness(&params).unwrap();
//! assert!(point.isolation_effectiveness < 1.0);
//! ```
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod render;
