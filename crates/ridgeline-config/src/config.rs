//! Configuration structs with RON persistence.
//!
//! Defaults reproduce the sketches' hard-coded parameters (the 100-division
//! grid, 230 fault iterations at delta 0.0037, the 45° perspective), so a
//! missing or empty config file runs the demos exactly as written.

use std::path::{Path, PathBuf};

use ridgeline_scene::DrawMode;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level demo configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Window settings.
    pub window: WindowConfig,
    /// Terrain generation settings.
    pub terrain: TerrainConfig,
    /// Scene and shading settings.
    pub scene: SceneConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Window configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Width in logical pixels.
    pub width: u32,
    /// Height in logical pixels.
    pub height: u32,
    /// Window title.
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "ridgeline".to_string(),
        }
    }
}

/// Terrain generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerrainConfig {
    /// Grid cells per axis.
    pub divisions: u32,
    /// Fault displacement iterations.
    pub iterations: u32,
    /// Height change per fault iteration.
    pub delta: f32,
    /// World seed for the fault sequence.
    pub seed: u64,
    /// Half-extent of the terrain square, centered on the origin.
    pub half_extent: f32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            divisions: 100,
            iterations: 230,
            delta: 0.0037,
            seed: 0,
            half_extent: 0.5,
        }
    }
}

/// Scene and shading configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Start with distance fog enabled.
    pub fog: bool,
    /// Terrain rasterization mode.
    pub draw_mode: DrawMode,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            fog: false,
            draw_mode: DrawMode::Solid,
            fov_degrees: 45.0,
        }
    }
}

/// Debug/development configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log filter override; empty means the built-in default.
    pub log_level: String,
}

impl Config {
    /// Load from a RON file. A missing file yields the defaults, so first
    /// runs need no setup.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
        ron::from_str(&contents).map_err(ConfigError::Parse)
    }

    /// Save as pretty-printed RON, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Write)?;
        }
        let contents = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(ConfigError::Serialize)?;
        std::fs::write(path, contents).map_err(ConfigError::Write)
    }

    /// Default config file location under the platform config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ridgeline").join("config.ron"))
    }
}
