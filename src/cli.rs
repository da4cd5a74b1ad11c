use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::{OscillatorDefaults, SweepDefaults};
use crate::core::error::ModelError;
use crate::core::oscillator::OscillatorParameters;
use crate::core::sweep::{Frequencies, FrequencySweep};
use crate::core::units::OperatingSpeed;

#[derive(Copy, Clone, Debug, PartialEq, ValueEnum)]
#[derive(Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, ValueEnum)]
pub enum Curve {
    #[value(alias = "amplitude")]
    Magnitude,
    Phase,
    #[value(alias = "effectiveness")]
    Transmissibility,
}

#[derive(Debug, Parser)]
#[command(
    name = "vibroiso",
    about = "1-DoF vibration isolation calculator: natural frequency, FRF and isolation effectiveness",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct VibroCli {
    /// Global: path to config (TOML); default: ~/.vibroiso/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Global: plain output without ANSI colors
    #[arg(long = "no-color", action = ArgAction::SetTrue, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

/// Oscillator inputs. Anything omitted comes from the config file.
#[derive(Debug, Clone, Default, Args)]
pub struct OscillatorArgs {
    /// Spring stiffness k [N/m]
    #[arg(short = 'k', long = "stiffness", value_name = "N/m")]
    pub stiffness: Option<f64>,

    /// Oscillating mass m [kg]
    #[arg(short = 'm', long = "mass", value_name = "KG")]
    pub mass: Option<f64>,

    /// Damping ratio δ [-]
    #[arg(short = 'd', long = "damping", value_name = "RATIO", conflicts_with = "damping_coefficient")]
    pub damping: Option<f64>,

    /// Viscous damping coefficient c [N·s/m], converted with δ = c / (2·sqrt(k·m))
    #[arg(short = 'c', long = "damping-coefficient", value_name = "N*s/m")]
    pub damping_coefficient: Option<f64>,
}

impl OscillatorArgs {
    pub fn resolve(&self, defaults: &OscillatorDefaults) -> Result<OscillatorParameters, ModelError> {
        let k = self.stiffness.unwrap_or(defaults.stiffness);
        let m = self.mass.unwrap_or(defaults.mass);
        match self.damping_coefficient {
            Some(c) => OscillatorParameters::from_damping_coefficient(k, m, c),
            None => OscillatorParameters::new(k, m, self.damping.unwrap_or(defaults.damping_ratio)),
        }
    }
}

/// Sweep shape. Frequencies are in rad/s.
#[derive(Debug, Clone, Default, Args)]
pub struct SweepArgs {
    /// Number of samples (default 2000)
    #[arg(long = "points", value_name = "N")]
    pub points: Option<usize>,

    /// Upper bound as a multiple of ω₀ (default 3)
    #[arg(long = "max-ratio", value_name = "R", conflicts_with = "max")]
    pub max_ratio: Option<f64>,

    /// Upper bound [rad/s]
    #[arg(long = "max", value_name = "RAD_S")]
    pub max: Option<f64>,

    /// Lower bound [rad/s]
    #[arg(long = "min", value_name = "RAD_S", default_value_t = 0.0)]
    pub min: f64,
}

impl SweepArgs {
    pub fn resolve(&self, params: &OscillatorParameters, defaults: &SweepDefaults) -> Result<FrequencySweep, ModelError> {
        let points = self.points.unwrap_or(defaults.points);
        let upper = match self.max {
            Some(max) => max,
            None => self.max_ratio.unwrap_or(defaults.max_ratio) * params.natural_frequency(),
        };
        FrequencySweep::new(Frequencies::linspace(self.min, upper, points))
    }
}

/// Operating speed; exactly one unit must be given.
#[derive(Debug, Clone, Args)]
#[group(required = true, multiple = false)]
pub struct SpeedArgs {
    /// Rotational speed [rpm]
    #[arg(long = "rpm", value_name = "RPM")]
    pub rpm: Option<f64>,

    /// Excitation frequency [Hz]
    #[arg(long = "hz", value_name = "HZ")]
    pub hz: Option<f64>,

    /// Excitation angular frequency [rad/s]
    #[arg(long = "rad-s", value_name = "RAD_S")]
    pub rad_s: Option<f64>,
}

impl SpeedArgs {
    pub fn speed(&self) -> OperatingSpeed {
        match (self.rpm, self.hz, self.rad_s) {
            (Some(rpm), _, _) => OperatingSpeed::Rpm(rpm),
            (None, Some(hz), _) => OperatingSpeed::Hertz(hz),
            (None, None, Some(w)) => OperatingSpeed::RadPerSec(w),
            (None, None, None) => unreachable!("clap group requires one speed"),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Natural frequency, critical damping and isolation onset
    ///
    /// Examples:
    ///   vibroiso natural -k 10000 -m 10
    Natural {
        #[command(flatten)]
        oscillator: OscillatorArgs,
    },

    /// Evaluate the frequency response over a sweep
    ///
    /// Examples:
    ///   vibroiso sweep -k 4 -m 1 -d 0.1 --points 5 --format csv
    ///   vibroiso sweep --max-ratio 10 --format json -o frf.json
    Sweep {
        #[command(flatten)]
        oscillator: OscillatorArgs,
        #[command(flatten)]
        sweep: SweepArgs,

        /// Output format
        #[arg(long = "format", value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Output file path (short: -o). Defaults to stdout.
        #[arg(short = 'o', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Isolation effectiveness at an operating speed
    ///
    /// Examples:
    ///   vibroiso isolate -k 10000 -m 10 -d 0.05 --rpm 600
    Isolate {
        #[command(flatten)]
        oscillator: OscillatorArgs,
        #[command(flatten)]
        speed: SpeedArgs,

        /// Print the operating point as JSON
        #[arg(long = "json", action = ArgAction::SetTrue)]
        json: bool,
    },

    /// Terminal chart of one FRF curve
    Chart {
        #[command(flatten)]
        oscillator: OscillatorArgs,
        #[command(flatten)]
        sweep: SweepArgs,

        /// Curve to draw
        #[arg(value_enum, value_name = "CURVE", default_value_t = Curve::Transmissibility)]
        curve: Curve,

        /// Plot width in columns (overrides config)
        #[arg(long = "width", value_name = "COLS")]
        width: Option<usize>,

        /// Plot height in rows (overrides config)
        #[arg(long = "height", value_name = "ROWS")]
        height: Option<usize>,
    },
}
