//! Headless driver for the three coursework sketches.
//!
//! Each sketch builds its geometry, then runs a scripted number of frames
//! through the fixed-timestep loop, logging what a renderer would draw.
//! Run with `cargo run -p ridgeline-demo -- --sketch flight --frames 600`,
//! optionally overriding terrain parameters (`--divisions`, `--seed`, ...).

mod sketches;

use std::process::ExitCode;

use clap::Parser;
use ridgeline_config::{CliArgs, Config};
use tracing::{error, info};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_path = args.config.clone().or_else(Config::default_path);
    let config = match config_path {
        Some(ref path) => match Config::load(path) {
            Ok(mut config) => {
                config.apply_cli_overrides(&args);
                config
            }
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        },
        None => {
            let mut config = Config::default();
            config.apply_cli_overrides(&args);
            config
        }
    };

    ridgeline_log::init_logging(Some(&config));
    info!(sketch = %args.sketch, frames = args.frames, "starting sketch");

    let result = match args.sketch.as_str() {
        "logo" => sketches::run_logo(args.frames),
        "flight" => sketches::run_flight(&config, args.frames),
        "skybox" => sketches::run_skybox(args.frames),
        other => {
            error!("unknown sketch '{other}', expected logo, flight, or skybox");
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
