//! vibroiso main: parse, load config, dispatch.

use clap::Parser; // trait import enables VibroCli::parse()
use colored::Colorize;

use vibroiso::cli::{Command, VibroCli};
use vibroiso::commands;
use vibroiso::config::Config;

fn run(args: VibroCli) -> anyhow::Result<()> {
    let cfg = Config::load(&args.config)?;
    let mut theme = cfg.chart.clone();
    if args.no_color {
        theme.color = false;
    }

    match args.cmd {
        Command::Natural { oscillator } => {
            let params = oscillator.resolve(&cfg.oscillator)?;
            commands::natural::main(&params)
        }

        Command::Sweep { oscillator, sweep, format, out } => {
            let params = oscillator.resolve(&cfg.oscillator)?;
            let sweep = sweep.resolve(&params, &cfg.sweep)?;
            commands::sweep::main(&params, &sweep, format, out)
        }

        Command::Isolate { oscillator, speed, json } => {
            let params = oscillator.resolve(&cfg.oscillator)?;
            commands::isolate::main(&params, speed.speed(), json)
        }

        Command::Chart { oscillator, sweep, curve, width, height } => {
            let params = oscillator.resolve(&cfg.oscillator)?;
            let sweep = sweep.resolve(&params, &cfg.sweep)?;
            if let Some(w) = width {
                theme.width = w;
            }
            if let Some(h) = height {
                theme.height = h;
            }
            theme.validate()?;
            commands::chart::main(&params, &sweep, curve, &theme)
        }
    }
}

fn main() {
    let args = VibroCli::parse();
    if args.no_color {
        colored::control::set_override(false);
    }
    if let Err(e) = run(args) {
        eprintln!("{} {e:#}", "error:".bright_red().bold());
        std::process::exit(2);
    }
}
