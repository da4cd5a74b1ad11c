//! Frequency response of the 1-DoF oscillator.
//!
//! With `r = ω/ω₀` the normalized dynamic stiffness is `(1 − r²) + 2iδr`
//! and the receptance is its inverse:
//!
//! ```text
//!   Y(r) = [ (1 − r²) + 2iδr ]⁻¹
//!   T(r) = sqrt(1 + (2δr)²) / sqrt((1 − r²)² + (2δr)²)
//! ```
//!
//! `Y` and `T` are different quantities; they only agree at `r = 0`.
//!
//! ## Resonance
//!
//! At `r = 1` with `δ = 0` both denominators vanish. This is a legal
//! operating point, not an error: [`receptance`] returns the sentinel
//! [`RESONANCE_RECEPTANCE`] (`0 − i∞`, the `δ → 0⁺` limit of `−i/2δ`) and
//! [`transmissibility`] returns `+∞`. Neither ever yields NaN or panics for
//! inputs in their domain (`r ≥ 0`, `δ ≥ 0`, finite).
//!
//! Both kernels work on a rescaled form of the stiffness: above resonance
//! everything is divided by `r²`, and by `δ` when `2δr` would overflow. So
//! `δ = 1e-300` at `r = 1` and `r = 1e300` stay finite and agree with each
//! other.

use num_complex::Complex64;
use serde::Serialize;

use crate::core::error::{require_non_negative, require_positive, ModelError};
use crate::core::oscillator::OscillatorParameters;
use crate::core::sweep::FrequencySweep;
use crate::debug_log;

/// Receptance at undamped resonance: magnitude `+∞`, phase `−90°`.
pub const RESONANCE_RECEPTANCE: Complex64 = Complex64::new(0.0, f64::NEG_INFINITY);

/// `r = ω / ω₀`. Both arguments must be in the same unit.
pub fn frequency_ratio(frequency: f64, natural_frequency: f64) -> f64 {
    frequency / natural_frequency
}

/// Elementwise [`frequency_ratio`] over a sweep.
pub fn frequency_ratios(frequencies: &[f64], natural_frequency: f64) -> Vec<f64> {
    frequencies.iter().map(|w| frequency_ratio(*w, natural_frequency)).collect()
}

/// Checked [`frequency_ratio`]: `ω ≥ 0`, `ω₀ > 0`.
pub fn checked_frequency_ratio(frequency: f64, natural_frequency: f64) -> Result<f64, ModelError> {
    let w = require_non_negative("frequency", frequency)?;
    let w0 = require_positive("natural frequency", natural_frequency)?;
    Ok(frequency_ratio(w, w0))
}

/// `(n, a, b)` with `Y = n / (a + ib)` and `T = hypot(n, b) / hypot(a, b)`.
fn scaled_stiffness(r: f64, damping_ratio: f64) -> (f64, f64, f64) {
    // above resonance divide through by r² so 1 − r² cannot overflow
    let (n, a, x) = if r > 1.0 {
        let s = r.recip();
        (s * s, s * s - 1.0, s)
    } else {
        (1.0, 1.0 - r * r, r)
    };
    let b = 2.0 * damping_ratio * x;
    if b.is_finite() {
        (n, a, b)
    } else {
        (n / damping_ratio, a / damping_ratio, 2.0 * x)
    }
}

// zero components stay zero even when `m` overflowed to +∞
fn scale_unit(m: f64, unit: f64) -> f64 {
    if unit == 0.0 {
        unit
    } else {
        m * unit
    }
}

/// Complex receptance `Y(r)`.
pub fn receptance(r: f64, damping_ratio: f64) -> Complex64 {
    let (n, a, b) = scaled_stiffness(r, damping_ratio);
    let h = a.hypot(b);
    if h == 0.0 {
        return RESONANCE_RECEPTANCE;
    }
    // Y = (n/h)·(a/h − i·b/h): no squared norm, so nothing under- or overflows
    let m = n / h;
    Complex64::new(scale_unit(m, a / h), -scale_unit(m, b / h))
}

/// Checked [`receptance`]: `r ≥ 0`, `δ ≥ 0`.
pub fn checked_receptance(r: f64, damping_ratio: f64) -> Result<Complex64, ModelError> {
    let r = require_non_negative("frequency ratio", r)?;
    let d = require_non_negative("damping ratio", damping_ratio)?;
    Ok(receptance(r, d))
}

/// Complex modulus.
pub fn magnitude(y: Complex64) -> f64 {
    y.norm()
}

/// Argument in degrees, normalized to `(−180°, 180°]`.
pub fn phase_degrees(y: Complex64) -> f64 {
    let deg = y.arg().to_degrees();
    if deg <= -180.0 {
        deg + 360.0
    } else {
        // folds -0.0 into 0.0
        deg + 0.0
    }
}

/// Force (or motion) transmissibility `T(r, δ)`.
pub fn transmissibility(r: f64, damping_ratio: f64) -> f64 {
    let (n, a, b) = scaled_stiffness(r, damping_ratio);
    let den = a.hypot(b);
    if den == 0.0 {
        return f64::INFINITY;
    }
    n.hypot(b) / den
}

/// Checked [`transmissibility`]: `r ≥ 0`, `δ ≥ 0`.
pub fn checked_transmissibility(r: f64, damping_ratio: f64) -> Result<f64, ModelError> {
    let r = require_non_negative("frequency ratio", r)?;
    let d = require_non_negative("damping ratio", damping_ratio)?;
    Ok(transmissibility(r, d))
}

/// Frequency above which `T < 1` for every damping ratio: `√2·ω₀`.
pub fn isolation_onset_frequency(natural_frequency: f64) -> f64 {
    std::f64::consts::SQRT_2 * natural_frequency
}

/// Isolation effectiveness at a single operating point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OperatingPoint {
    pub operating_frequency: f64,
    pub frequency_ratio: f64,
    pub isolation_effectiveness: f64,
}

/// Half-width of the band around `r = 1` reported as resonance.
pub const RESONANCE_BAND: f64 = 0.05;

/// Where an operating point sits relative to resonance and the `r = √2`
/// crossover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IsolationRegion {
    /// `r ≤ √2` outside the resonance band: the mount transmits at least as
    /// much as it receives
    Amplification,
    /// `|r − 1| ≤ RESONANCE_BAND`, or `T` unbounded
    Resonance,
    /// `r > √2`: `T < 1`
    Isolation,
}

impl std::fmt::Display for IsolationRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IsolationRegion::Amplification => write!(f, "amplification"),
            IsolationRegion::Resonance => write!(f, "resonance"),
            IsolationRegion::Isolation => write!(f, "isolation"),
        }
    }
}

impl OperatingPoint {
    pub fn region(&self) -> IsolationRegion {
        if !self.isolation_effectiveness.is_finite()
            || (self.frequency_ratio - 1.0).abs() <= RESONANCE_BAND
        {
            IsolationRegion::Resonance
        } else if self.frequency_ratio > std::f64::consts::SQRT_2 {
            IsolationRegion::Isolation
        } else {
            IsolationRegion::Amplification
        }
    }
}

/// `E = T(ω_op/ω₀, δ)`.
///
/// `operating_frequency` must be in the unit of `natural_frequency`
/// (rad/s when ω₀ comes from [`natural_frequency`](crate::core::oscillator::natural_frequency)).
/// A speed in rpm has to go through
/// [`OperatingSpeed::to_rad_per_sec`](crate::core::units::OperatingSpeed::to_rad_per_sec)
/// first. Mixing units is not detectable here and yields a plausible but
/// wrong number.
pub fn isolation_effectiveness(
    operating_frequency: f64,
    natural_frequency: f64,
    damping_ratio: f64,
) -> Result<OperatingPoint, ModelError> {
    let r = checked_frequency_ratio(operating_frequency, natural_frequency)?;
    let e = checked_transmissibility(r, damping_ratio)?;
    Ok(OperatingPoint {
        operating_frequency,
        frequency_ratio: r,
        isolation_effectiveness: e,
    })
}

/// One evaluated sweep sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrfPoint {
    pub frequency: f64,
    pub frequency_ratio: f64,
    pub receptance: Complex64,
    pub magnitude: f64,
    pub phase_degrees: f64,
    pub transmissibility: f64,
}

impl FrfPoint {
    pub fn at(frequency: f64, natural_frequency: f64, damping_ratio: f64) -> Self {
        let r = frequency_ratio(frequency, natural_frequency);
        let y = receptance(r, damping_ratio);
        Self {
            frequency,
            frequency_ratio: r,
            receptance: y,
            magnitude: magnitude(y),
            phase_degrees: phase_degrees(y),
            transmissibility: transmissibility(r, damping_ratio),
        }
    }
}

/// Sweep evaluation, aligned index-for-index with the input sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct FrfResult {
    pub natural_frequency: f64,
    pub damping_ratio: f64,
    pub points: Vec<FrfPoint>,
}

impl FrfResult {
    /// Sample closest to `frequency`; ties go to the lower index.
    pub fn nearest(&self, frequency: f64) -> Option<&FrfPoint> {
        self.points.iter().min_by(|a, b| {
            let da = (a.frequency - frequency).abs();
            let db = (b.frequency - frequency).abs();
            da.total_cmp(&db)
        })
    }

    /// Sample with the largest receptance magnitude.
    pub fn peak(&self) -> Option<&FrfPoint> {
        self.points
            .iter()
            .reduce(|best, p| if p.magnitude > best.magnitude { p } else { best })
    }

    pub fn frequencies(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.frequency).collect()
    }
    pub fn magnitudes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.magnitude).collect()
    }
    pub fn phases(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.phase_degrees).collect()
    }
    pub fn transmissibilities(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.transmissibility).collect()
    }
}

/// Evaluate the full FRF over a validated sweep.
pub fn evaluate(params: &OscillatorParameters, sweep: &FrequencySweep) -> FrfResult {
    let w0 = params.natural_frequency();
    let delta = params.damping_ratio();
    debug_log!("evaluate: w0={w0} delta={delta} points={}", sweep.len());
    FrfResult {
        natural_frequency: w0,
        damping_ratio: delta,
        points: sweep
            .frequencies()
            .iter()
            .map(|w| FrfPoint::at(*w, w0, delta))
            .collect(),
    }
}
