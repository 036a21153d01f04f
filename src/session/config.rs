//! Session configuration.
//!
//! Preview bounds default to unbounded, which makes every layout pick
//! the largest resolution the camera offers.

use crate::geometry::DeviceOrientation;
use crate::hardware::{flash_mode, Facing, MockCameraSpec};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for a [`CameraSessionManager`](super::CameraSessionManager).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Device orientation at construction time.
    #[serde(default)]
    pub initial_orientation: DeviceOrientation,
    /// Barcode symbologies the host wants decoded.
    #[serde(default)]
    pub barcode_types: Vec<String>,
    /// Upper bounds for preview size selection.
    #[serde(default)]
    pub preview_bounds: PreviewBounds,
}

impl SessionConfig {
    /// Creates a configuration starting at the given orientation.
    pub fn with_orientation(initial_orientation: DeviceOrientation) -> Self {
        Self {
            initial_orientation,
            ..Default::default()
        }
    }

    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.preview_bounds.max_width == 0 || self.preview_bounds.max_height == 0 {
            return Err(ConfigError::InvalidBounds);
        }
        if self.barcode_types.iter().any(|t| t.trim().is_empty()) {
            return Err(ConfigError::EmptyBarcodeType);
        }
        Ok(())
    }
}

/// Maximum preview dimensions considered during size selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewBounds {
    #[serde(default = "unbounded")]
    pub max_width: u32,
    #[serde(default = "unbounded")]
    pub max_height: u32,
}

fn unbounded() -> u32 {
    u32::MAX
}

impl Default for PreviewBounds {
    fn default() -> Self {
        Self {
            max_width: unbounded(),
            max_height: unbounded(),
        }
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("preview bounds must be non-zero")]
    InvalidBounds,
    #[error("barcode type names must not be empty")]
    EmptyBarcodeType,
    #[error("simulator must define at least one camera")]
    NoSimulatedCameras,
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub simulator: SimulatorConfig,
}

/// Cameras exposed by the simulated platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatorConfig {
    pub cameras: Vec<MockCameraSpec>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            cameras: vec![
                MockCameraSpec::new(Facing::Back, 90)
                    .with_preview_sizes([(1920, 1080), (1280, 720), (640, 480)])
                    .with_flash_modes([
                        flash_mode::OFF,
                        flash_mode::AUTO,
                        flash_mode::ON,
                        flash_mode::TORCH,
                    ]),
                MockCameraSpec::new(Facing::Front, 270)
                    .with_preview_sizes([(1280, 720), (640, 480)]),
            ],
        }
    }
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: FileConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.session.validate()?;
        if config.simulator.cameras.is_empty() {
            return Err(ConfigError::NoSimulatedCameras);
        }
        Ok(config)
    }
}
