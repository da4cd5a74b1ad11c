//! src/commands/chart.rs
//! Draw one FRF curve in the terminal.

use anyhow::Result;

use crate::cli::Curve;
use crate::core::model::evaluate;
use crate::core::oscillator::OscillatorParameters;
use crate::core::sweep::FrequencySweep;
use crate::render::chart::{render, ChartTheme, Scale, PHASE_DOMAIN};

pub fn main(params: &OscillatorParameters, sweep: &FrequencySweep, curve: Curve, theme: &ChartTheme) -> Result<()> {
    let frf = evaluate(params, sweep);
    let xs = frf.frequencies();
    let (title, ys, scale) = match curve {
        Curve::Magnitude => ("Amplitude |Y| (log)", frf.magnitudes(), Scale::Log10),
        Curve::Phase => ("Phase [deg]", frf.phases(), Scale::Linear(Some(PHASE_DOMAIN))),
        Curve::Transmissibility => ("Isolation effectiveness T (log)", frf.transmissibilities(), Scale::Log10),
    };
    print!("{}", render(title, &xs, &ys, scale, theme));
    if let Some(peak) = frf.peak() {
        println!(
            "peak |Y| at {:.4} rad/s (r = {:.4})",
            peak.frequency, peak.frequency_ratio
        );
    }
    Ok(())
}
