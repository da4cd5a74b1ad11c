//! User configuration: built-in defaults + optional TOML file.
//!
//! - `Config::default()` → the calculator's defaults (k = 1, m = 1, δ = 0.01)
//! - `Config::from_toml_file(path)` → load a user file
//! - `Config::load(path)` → explicit path must load; default path is optional

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Deserialize;

use crate::core::sweep::{DEFAULT_MAX_RATIO, DEFAULT_POINTS};
use crate::debug_log;
use crate::render::chart::ChartTheme;

pub fn default_config_path() -> Option<PathBuf> {
    // ~\Users\you\.vibroiso\config.toml on Windows; ~/.vibroiso/config.toml elsewhere
    dirs_next::home_dir().map(|h| h.join(".vibroiso").join("config.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OscillatorDefaults {
    pub stiffness: f64,
    pub mass: f64,
    pub damping_ratio: f64,
}

impl Default for OscillatorDefaults {
    fn default() -> Self {
        Self { stiffness: 1.0, mass: 1.0, damping_ratio: 0.01 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SweepDefaults {
    pub points: usize,
    pub max_ratio: f64,
}

impl Default for SweepDefaults {
    fn default() -> Self {
        Self { points: DEFAULT_POINTS, max_ratio: DEFAULT_MAX_RATIO }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub oscillator: OscillatorDefaults,
    pub sweep: SweepDefaults,
    pub chart: ChartTheme,
}

impl Config {
    pub fn from_toml_str(txt: &str) -> Result<Self> {
        Ok(toml::from_str(txt)?)
    }

    /// Load from TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&txt).with_context(|| format!("parsing {}", path.display()))
    }

    /// An explicit `--config` file must load. The default location is
    /// optional: missing falls back to built-ins, broken warns and falls back.
    pub fn load(cli_path: &Option<PathBuf>) -> Result<Self> {
        let explicit = cli_path.is_some();
        match resolve_config_path(cli_path) {
            Some(p) if explicit => {
                debug_log!("config: loading {}", p.display());
                Self::from_toml_file(&p)
            }
            Some(p) if p.exists() => match Self::from_toml_file(&p) {
                Ok(cfg) => {
                    debug_log!("config: loaded {}", p.display());
                    Ok(cfg)
                }
                Err(e) => {
                    eprintln!("{} failed loading {}: {e:#}; using built-in defaults", "warn:".yellow().bold(), p.display());
                    Ok(Self::default())
                }
            },
            _ => {
                debug_log!("config: built-in defaults");
                Ok(Self::default())
            }
        }
    }
}
