//! Operating-speed units.
//!
//! The model works in angular frequency (rad/s) because `sqrt(k/m)` is an
//! angular frequency. Rotating machinery is usually specified in rpm, and
//! `rpm / 60` is a *cyclic* frequency in Hz. Comparing that directly with
//! ω₀ understates the frequency ratio by 2π. Every speed must therefore
//! pass through [`OperatingSpeed::to_rad_per_sec`] before it reaches
//! [`isolation_effectiveness`](crate::core::model::isolation_effectiveness).

use std::f64::consts::PI;
use std::fmt;

use serde::Serialize;

use crate::core::error::{require_non_negative, ModelError};
use crate::core::model::{isolation_effectiveness, OperatingPoint};
use crate::core::oscillator::OscillatorParameters;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "unit", content = "value", rename_all = "snake_case")]
pub enum OperatingSpeed {
    /// revolutions per minute
    Rpm(f64),
    /// cycles per second
    Hertz(f64),
    /// angular frequency
    RadPerSec(f64),
}

impl OperatingSpeed {
    pub fn value(&self) -> f64 {
        match *self {
            OperatingSpeed::Rpm(v) | OperatingSpeed::Hertz(v) | OperatingSpeed::RadPerSec(v) => v,
        }
    }

    pub fn to_hertz(&self) -> f64 {
        match *self {
            OperatingSpeed::Rpm(rpm) => rpm / 60.0,
            OperatingSpeed::Hertz(hz) => hz,
            OperatingSpeed::RadPerSec(w) => w / (2.0 * PI),
        }
    }

    pub fn to_rad_per_sec(&self) -> f64 {
        match *self {
            OperatingSpeed::Rpm(rpm) => rpm * 2.0 * PI / 60.0,
            OperatingSpeed::Hertz(hz) => hz * 2.0 * PI,
            OperatingSpeed::RadPerSec(w) => w,
        }
    }

    /// Effectiveness of `params` at this speed, with the unit conversion applied.
    pub fn effectiveness(&self, params: &OscillatorParameters) -> Result<OperatingPoint, ModelError> {
        require_non_negative("operating speed", self.value())?;
        isolation_effectiveness(self.to_rad_per_sec(), params.natural_frequency(), params.damping_ratio())
    }
}

impl fmt::Display for OperatingSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperatingSpeed::Rpm(v) => write!(f, "{v} rpm"),
            OperatingSpeed::Hertz(v) => write!(f, "{v} Hz"),
            OperatingSpeed::RadPerSec(v) => write!(f, "{v} rad/s"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_agree() {
        let rpm = OperatingSpeed::Rpm(600.0);
        assert_eq!(rpm.to_hertz(), 10.0);
        assert!((rpm.to_rad_per_sec() - 20.0 * PI).abs() < 1e-12);
        let hz = OperatingSpeed::Hertz(10.0);
        assert!((hz.to_rad_per_sec() - rpm.to_rad_per_sec()).abs() < 1e-12);
        let w = OperatingSpeed::RadPerSec(20.0 * PI);
        assert!((w.to_hertz() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn negative_speed_is_rejected() {
        let p = OscillatorParameters::new(1.0, 1.0, 0.1).unwrap();
        assert!(OperatingSpeed::Rpm(-1.0).effectiveness(&p).is_err());
    }

    #[test]
    fn display_names_the_unit() {
        assert_eq!(OperatingSpeed::Rpm(600.0).to_string(), "600 rpm");
        assert_eq!(OperatingSpeed::RadPerSec(1.5).to_string(), "1.5 rad/s");
    }
}
