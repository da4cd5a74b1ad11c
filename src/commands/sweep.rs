//! src/commands/sweep.rs
//! Evaluate a sweep and write it as table, CSV or JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::OutputFormat;
use crate::core::model::evaluate;
use crate::core::oscillator::OscillatorParameters;
use crate::core::sweep::FrequencySweep;
use crate::debug_log;
use crate::io::atomic::atomic_write;
use crate::render::table::{to_csv, to_json, to_table};

pub fn render(params: &OscillatorParameters, sweep: &FrequencySweep, format: OutputFormat) -> Result<String> {
    let frf = evaluate(params, sweep);
    Ok(match format {
        OutputFormat::Table => to_table(&frf),
        OutputFormat::Csv => to_csv(&frf),
        OutputFormat::Json => to_json(params, &frf).context("serializing sweep")?,
    })
}

pub fn main(
    params: &OscillatorParameters,
    sweep: &FrequencySweep,
    format: OutputFormat,
    out: Option<PathBuf>,
) -> Result<()> {
    let text = render(params, sweep, format)?;
    match out {
        Some(path) => {
            atomic_write(&path, text.as_bytes())
                .with_context(|| format!("writing {}", path.display()))?;
            debug_log!("sweep: wrote {} bytes to {}", text.len(), path.display());
            println!("wrote {} points to {}", sweep.len(), path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}
