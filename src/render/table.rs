//! Sweep writers: aligned text table, CSV and JSON.

use serde::{Serialize, Serializer};

use crate::core::model::FrfResult;
use crate::core::oscillator::OscillatorParameters;

const COLUMNS: [&str; 5] = ["frequency", "ratio", "magnitude", "phase_deg", "transmissibility"];

/// CSV with a header row, six decimals, `inf` for unbounded values.
pub fn to_csv(frf: &FrfResult) -> String {
    let mut out = String::from("frequency,frequency_ratio,magnitude,phase_deg,transmissibility\n");
    for p in &frf.points {
        out.push_str(&format!(
            "{:.6},{:.6},{:.6},{:.6},{:.6}\n",
            p.frequency, p.frequency_ratio, p.magnitude, p.phase_degrees, p.transmissibility
        ));
    }
    out
}

/// Right-aligned columns for the terminal.
pub fn to_table(frf: &FrfResult) -> String {
    let mut out = String::new();
    for name in COLUMNS {
        out.push_str(&format!("{:>17}", name));
    }
    out.push('\n');
    for p in &frf.points {
        out.push_str(&format!(
            "{:>17.6}{:>17.6}{:>17.6e}{:>17.3}{:>17.6e}\n",
            p.frequency, p.frequency_ratio, p.magnitude, p.phase_degrees, p.transmissibility
        ));
    }
    out
}

// JSON has no infinity; unbounded values are written as the string "inf".
pub(crate) fn finite_or_inf<S: Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
    if v.is_finite() {
        s.serialize_f64(*v)
    } else if *v > 0.0 {
        s.serialize_str("inf")
    } else if *v < 0.0 {
        s.serialize_str("-inf")
    } else {
        s.serialize_str("nan")
    }
}

#[derive(Serialize)]
struct JsonPoint {
    frequency: f64,
    #[serde(serialize_with = "finite_or_inf")]
    frequency_ratio: f64,
    #[serde(serialize_with = "finite_or_inf")]
    receptance_re: f64,
    #[serde(serialize_with = "finite_or_inf")]
    receptance_im: f64,
    #[serde(serialize_with = "finite_or_inf")]
    magnitude: f64,
    #[serde(serialize_with = "finite_or_inf")]
    phase_deg: f64,
    #[serde(serialize_with = "finite_or_inf")]
    transmissibility: f64,
}

#[derive(Serialize)]
struct JsonSweep<'a> {
    parameters: &'a OscillatorParameters,
    natural_frequency: f64,
    natural_frequency_hz: f64,
    points: Vec<JsonPoint>,
}

pub fn to_json(params: &OscillatorParameters, frf: &FrfResult) -> serde_json::Result<String> {
    let doc = JsonSweep {
        parameters: params,
        natural_frequency: frf.natural_frequency,
        natural_frequency_hz: params.natural_frequency_hz(),
        points: frf
            .points
            .iter()
            .map(|p| JsonPoint {
                frequency: p.frequency,
                frequency_ratio: p.frequency_ratio,
                receptance_re: p.receptance.re,
                receptance_im: p.receptance.im,
                magnitude: p.magnitude,
                phase_deg: p.phase_degrees,
                transmissibility: p.transmissibility,
            })
            .collect(),
    };
    serde_json::to_string_pretty(&doc)
}
