use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading or validating a [`GameConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("grid_size must be greater than zero")]
    ZeroGridSize,

    #[error("window {width}x{height} is smaller than one {grid_size}px grid cell")]
    WindowTooSmall {
        width: u32,
        height: u32,
        grid_size: u32,
    },

    #[error("initial_speed must be a positive number of seconds, got {0}")]
    InvalidSpeed(f32),

    #[error("speed_decay must be in (0, 1) exclusive, got {0}")]
    InvalidDecay(f32),

    #[error("frame_rate must be greater than zero")]
    ZeroFrameRate,
}

/// Configuration for the game
///
/// Every field has a default, so a config file only needs to list the values
/// it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the play field in pixels
    pub window_width: u32,
    /// Height of the play field in pixels
    pub window_height: u32,
    /// Edge length of one grid cell in pixels
    pub grid_size: u32,

    /// Seconds between simulation ticks at the start of a round
    pub initial_speed: f32,
    /// Factor applied to the tick interval each time food is eaten
    pub speed_decay: f32,

    /// Frames rendered per second
    pub frame_rate: u32,
    /// Play sound cues
    pub sound: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 600,
            grid_size: 20,
            initial_speed: 0.1,
            speed_decay: 0.95,
            frame_rate: 60,
            sound: true,
        }
    }
}

impl GameConfig {
    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        log::info!("Loaded game config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::ZeroGridSize);
        }
        if self.cols() == 0 || self.rows() == 0 {
            return Err(ConfigError::WindowTooSmall {
                width: self.window_width,
                height: self.window_height,
                grid_size: self.grid_size,
            });
        }
        if !(self.initial_speed.is_finite() && self.initial_speed > 0.0) {
            return Err(ConfigError::InvalidSpeed(self.initial_speed));
        }
        if !(self.speed_decay > 0.0 && self.speed_decay < 1.0) {
            return Err(ConfigError::InvalidDecay(self.speed_decay));
        }
        if self.frame_rate == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        Ok(())
    }

    /// Number of grid columns
    pub fn cols(&self) -> i32 {
        (self.window_width / self.grid_size) as i32
    }

    /// Number of grid rows
    pub fn rows(&self) -> i32 {
        (self.window_height / self.grid_size) as i32
    }
}
