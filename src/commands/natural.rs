//! src/commands/natural.rs
//! Summary of the oscillator: ω₀, critical damping, isolation onset.

use colored::Colorize;

use crate::core::model::{isolation_onset_frequency, transmissibility};
use crate::core::oscillator::OscillatorParameters;

pub fn main(params: &OscillatorParameters) -> anyhow::Result<()> {
    let w0 = params.natural_frequency();
    let onset = isolation_onset_frequency(w0);
    println!(
        "{} k = {} N/m, m = {} kg, δ = {}",
        "oscillator:".bold(),
        params.stiffness(),
        params.mass(),
        params.damping_ratio()
    );
    println!("natural frequency    ω₀ = {:.4} rad/s ({:.4} Hz)", w0, params.natural_frequency_hz());
    println!("critical damping     c_c = {:.4} N·s/m (c = {:.4} N·s/m)", params.critical_damping(), params.damping_coefficient());
    println!("resonant transmissibility T(1) = {}", fmt_value(transmissibility(1.0, params.damping_ratio())));
    println!("isolation above      √2·ω₀ = {:.4} rad/s", onset);
    Ok(())
}

pub(crate) fn fmt_value(v: f64) -> String {
    if v.is_finite() {
        format!("{v:.4}")
    } else {
        "unbounded (undamped resonance)".to_string()
    }
}
