//! src/commands/isolate.rs
//! Isolation effectiveness at one operating speed.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use super::natural::fmt_value;
use crate::core::model::{IsolationRegion, OperatingPoint};
use crate::core::oscillator::OscillatorParameters;
use crate::core::units::OperatingSpeed;
use crate::render::table::finite_or_inf;

#[derive(Serialize)]
struct IsolationReport {
    speed: OperatingSpeed,
    natural_frequency: f64,
    operating_frequency: f64,
    operating_frequency_hz: f64,
    frequency_ratio: f64,
    #[serde(serialize_with = "finite_or_inf")]
    isolation_effectiveness: f64,
    region: IsolationRegion,
}

impl IsolationReport {
    fn new(params: &OscillatorParameters, speed: OperatingSpeed, point: &OperatingPoint) -> Self {
        Self {
            speed,
            natural_frequency: params.natural_frequency(),
            operating_frequency: point.operating_frequency,
            operating_frequency_hz: speed.to_hertz(),
            frequency_ratio: point.frequency_ratio,
            isolation_effectiveness: point.isolation_effectiveness,
            region: point.region(),
        }
    }
}

pub fn main(params: &OscillatorParameters, speed: OperatingSpeed, json: bool) -> Result<()> {
    let point = speed.effectiveness(params)?;
    let report = IsolationReport::new(params, speed, &point);
    if json {
        println!("{}", serde_json::to_string_pretty(&report).context("serializing report")?);
        return Ok(());
    }
    println!(
        "natural frequency        ω₀ = {:.4} rad/s ({:.4} Hz)",
        report.natural_frequency,
        params.natural_frequency_hz()
    );
    println!(
        "operating speed          {} = {:.4} rad/s ({:.4} Hz)",
        speed, report.operating_frequency, report.operating_frequency_hz
    );
    println!("frequency ratio          r = {:.4}", report.frequency_ratio);
    let region = match report.region {
        IsolationRegion::Isolation => report.region.to_string().green(),
        IsolationRegion::Resonance => report.region.to_string().red().bold(),
        IsolationRegion::Amplification => report.region.to_string().yellow(),
    };
    println!(
        "isolation effectiveness  E = {}  ({})",
        fmt_value(report.isolation_effectiveness).bold(),
        region
    );
    Ok(())
}
