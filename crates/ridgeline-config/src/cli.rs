//! Command-line overrides for the demo configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Ridgeline demo command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "ridgeline", about = "Ridgeline rendering sketches")]
pub struct CliArgs {
    /// Which sketch to run (logo, flight, skybox).
    #[arg(long, default_value = "flight")]
    pub sketch: String,

    /// Number of frames to simulate before stopping.
    #[arg(long, default_value_t = 300)]
    pub frames: u64,

    /// Terrain grid divisions per axis.
    #[arg(long)]
    pub divisions: Option<u32>,

    /// Fault displacement iterations.
    #[arg(long)]
    pub iterations: Option<u32>,

    /// Height change per fault iteration.
    #[arg(long)]
    pub delta: Option<f32>,

    /// World seed for the fault sequence.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start with distance fog enabled.
    #[arg(long)]
    pub fog: Option<bool>,

    /// Log filter (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to the config file (overrides the default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(divisions) = args.divisions {
            self.terrain.divisions = divisions;
        }
        if let Some(iterations) = args.iterations {
            self.terrain.iterations = iterations;
        }
        if let Some(delta) = args.delta {
            self.terrain.delta = delta;
        }
        if let Some(seed) = args.seed {
            self.terrain.seed = seed;
        }
        if let Some(fog) = args.fog {
            self.scene.fog = fog;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_apply_on_top_of_defaults() {
        let mut config = Config::default();
        let args = CliArgs {
            divisions: Some(64),
            seed: Some(7),
            fog: Some(true),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.terrain.divisions, 64);
        assert_eq!(config.terrain.seed, 7);
        assert!(config.scene.fog);
        // Untouched fields keep their defaults.
        assert_eq!(config.terrain.iterations, 230);
    }

    #[test]
    fn parses_long_flags() {
        let args = CliArgs::parse_from([
            "ridgeline",
            "--sketch",
            "skybox",
            "--frames",
            "120",
            "--delta",
            "0.01",
        ]);
        assert_eq!(args.sketch, "skybox");
        assert_eq!(args.frames, 120);
        assert_eq!(args.delta, Some(0.01));
    }
}
