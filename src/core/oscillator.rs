//! Single degree-of-freedom oscillator: mass `m` on a spring `k` with
//! viscous damping.
//!
//! The equation of motion `m ü + c u̇ + k u = f` is written in normalized
//! form with `k/m = ω₀²` and `c/m = 2δω₀`, so the whole model is driven by
//! the natural frequency `ω₀` and the damping ratio `δ`.

use std::f64::consts::PI;

use serde::Serialize;

use crate::core::error::{require_non_negative, require_positive, ModelError};

/// Natural frequency `ω₀ = sqrt(k/m)` in rad/s.
pub fn natural_frequency(stiffness: f64, mass: f64) -> Result<f64, ModelError> {
    let k = require_positive("stiffness", stiffness)?;
    let m = require_positive("mass", mass)?;
    Ok((k / m).sqrt())
}

/// Natural frequency in Hz (`ω₀ / 2π`).
pub fn natural_frequency_hz(stiffness: f64, mass: f64) -> Result<f64, ModelError> {
    Ok(natural_frequency(stiffness, mass)? / (2.0 * PI))
}

/// Validated oscillator parameters. Fields are private so a value of this
/// type always satisfies `k > 0`, `m > 0`, `δ ≥ 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OscillatorParameters {
    stiffness: f64,
    mass: f64,
    damping_ratio: f64,
}

impl OscillatorParameters {
    pub fn new(stiffness: f64, mass: f64, damping_ratio: f64) -> Result<Self, ModelError> {
        Ok(Self {
            stiffness: require_positive("stiffness", stiffness)?,
            mass: require_positive("mass", mass)?,
            damping_ratio: require_non_negative("damping ratio", damping_ratio)?,
        })
    }

    /// Build from a viscous damping coefficient `c` [N·s/m] instead of a ratio.
    pub fn from_damping_coefficient(stiffness: f64, mass: f64, coefficient: f64) -> Result<Self, ModelError> {
        let k = require_positive("stiffness", stiffness)?;
        let m = require_positive("mass", mass)?;
        let c = require_non_negative("damping coefficient", coefficient)?;
        Self::new(k, m, c / critical_damping(k, m))
    }

    pub fn stiffness(&self) -> f64 { self.stiffness }
    pub fn mass(&self) -> f64 { self.mass }
    pub fn damping_ratio(&self) -> f64 { self.damping_ratio }

    /// ω₀ in rad/s. Infallible once constructed.
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    pub fn natural_frequency_hz(&self) -> f64 {
        self.natural_frequency() / (2.0 * PI)
    }

    /// `c_c = 2·sqrt(k·m)`
    pub fn critical_damping(&self) -> f64 {
        critical_damping(self.stiffness, self.mass)
    }

    /// Viscous coefficient `c = δ·c_c`.
    pub fn damping_coefficient(&self) -> f64 {
        self.damping_ratio * self.critical_damping()
    }
}

fn critical_damping(stiffness: f64, mass: f64) -> f64 {
    2.0 * (stiffness * mass).sqrt()
}
