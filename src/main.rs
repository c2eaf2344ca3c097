//! hexpick - command-line front end for the color picker core.

mod report;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use hexpick_core::{describe, rgb_to_hex, PickerError};

/// Work with hex colors from the terminal.
#[derive(Parser, Debug)]
#[command(name = "hexpick")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the normalized hex, RGB channels, luminance and contrast color
    Inspect {
        /// Hex color, with or without '#', any case
        color: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Encode RGB channels (0-255) as hex
    Rgb { r: u8, g: u8, b: u8 },

    /// Print uniformly random colors
    Random {
        /// How many colors to print
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// Seed for a reproducible sequence
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            let code = e
                .downcast_ref::<PickerError>()
                .map(PickerError::code_value)
                .unwrap_or(1);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Inspect { color, json } => {
            let report = describe(&color)?;
            debug!("Inspecting {}", report.hex);
            if json {
                let json = serde_json::to_string_pretty(&report)
                    .context("Failed to serialize report")?;
                println!("{}", json);
            } else {
                println!("{}", report::render_text(&report));
            }
        }
        Command::Rgb { r, g, b } => {
            println!("{}", rgb_to_hex(r, g, b));
        }
        Command::Random { count, seed } => {
            let colors = match seed {
                Some(seed) => report::random_colors(&mut StdRng::seed_from_u64(seed), count),
                None => report::random_colors(&mut rand::rng(), count),
            };
            for color in colors {
                println!("{}", color);
            }
        }
    }
    Ok(())
}
