//! Frequency sweeps.
//!
//! All frequencies are angular frequencies in rad/s, the same unit as
//! [`OscillatorParameters::natural_frequency`].

use crate::core::error::{require_non_negative, ModelError};
use crate::core::oscillator::OscillatorParameters;
use crate::debug_log;

/// Points in the sweep the calculator shows by default.
pub const DEFAULT_POINTS: usize = 2000;
/// Default upper bound of the sweep as a multiple of ω₀.
pub const DEFAULT_MAX_RATIO: f64 = 3.0;
/// Largest sweep a `LinSpace` may expand to.
pub const MAX_POINTS: usize = 1_000_000;

/// Frequency sampling options
#[derive(Debug, Clone, PartialEq)]
pub enum Frequencies {
    /// a single frequency
    Single(f64),
    /// regular sampling of the interval `[lower,upper]` with `n` samples
    LinSpace { lower: f64, upper: f64, n: usize },
    /// a given set of frequencies
    Set(Vec<f64>),
}

impl From<f64> for Frequencies {
    fn from(value: f64) -> Self {
        Frequencies::Single(value)
    }
}
impl From<Vec<f64>> for Frequencies {
    fn from(value: Vec<f64>) -> Self {
        Frequencies::Set(value)
    }
}
impl Frequencies {
    pub fn linspace(lower: f64, upper: f64, n: usize) -> Self {
        Self::LinSpace { lower, upper, n }
    }
}

/// An ordered, non-decreasing sequence of non-negative frequencies.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencySweep {
    frequencies: Vec<f64>,
}

impl FrequencySweep {
    /// Validate and expand a sampling request.
    pub fn new<T: Into<Frequencies>>(spec: T) -> Result<Self, ModelError> {
        let frequencies = match spec.into() {
            Frequencies::Single(w) => vec![require_non_negative("frequency", w)?],
            Frequencies::LinSpace { lower, upper, n } => linspace(lower, upper, n)?,
            Frequencies::Set(ws) => {
                for w in &ws {
                    require_non_negative("frequency", *w)?;
                }
                if let Some(i) = ws.windows(2).position(|p| p[1] < p[0]) {
                    return Err(ModelError::invalid_parameter(&format!(
                        "sweep must be non-decreasing, but {} follows {} at index {}",
                        ws[i + 1],
                        ws[i],
                        i + 1
                    )));
                }
                ws
            }
        };
        debug_log!("sweep: {} points", frequencies.len());
        Ok(Self { frequencies })
    }

    /// The calculator's default sweep: 2000 points from 0 to 3ω₀.
    pub fn default_for(params: &OscillatorParameters) -> Self {
        let upper = DEFAULT_MAX_RATIO * params.natural_frequency();
        let step = upper / (DEFAULT_POINTS - 1) as f64;
        Self {
            frequencies: (0..DEFAULT_POINTS).map(|i| step * i as f64).collect(),
        }
    }

    pub fn frequencies(&self) -> &[f64] { &self.frequencies }
    pub fn len(&self) -> usize { self.frequencies.len() }
    pub fn is_empty(&self) -> bool { self.frequencies.is_empty() }
}

fn linspace(lower: f64, upper: f64, n: usize) -> Result<Vec<f64>, ModelError> {
    let lower = require_non_negative("sweep lower bound", lower)?;
    let upper = require_non_negative("sweep upper bound", upper)?;
    if upper < lower {
        return Err(ModelError::invalid_parameter(&format!(
            "sweep upper bound {upper} is below lower bound {lower}"
        )));
    }
    match n {
        0 => Err(ModelError::invalid_parameter("sweep needs at least one point")),
        n if n > MAX_POINTS => Err(ModelError::invalid_parameter(&format!(
            "sweep of {n} points exceeds the limit of {MAX_POINTS}"
        ))),
        1 => Ok(vec![lower]),
        _ => {
            let step = (upper - lower) / (n - 1) as f64;
            // last sample pinned to `upper` so rounding never overshoots it
            Ok((0..n)
                .map(|i| if i == n - 1 { upper } else { lower + step * i as f64 })
                .collect())
        }
    }
}
