//! Configuration for the demo sketches: RON file on disk, CLI overrides on
//! top, forward-compatible via `#[serde(default)]`.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, SceneConfig, TerrainConfig, WindowConfig};
pub use error::ConfigError;
