//! Camera properties and tunable parameters as reported by the platform.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Platform flash-mode values.
///
/// These are the strings the platform uses in its parameter set; a mode
/// can only be applied when it appears in
/// [`CameraParameters::supported_flash_modes`].
pub mod flash_mode {
    /// Flash disabled.
    pub const OFF: &str = "off";
    /// Flash fires when the platform decides it is needed.
    pub const AUTO: &str = "auto";
    /// Flash always fires.
    pub const ON: &str = "on";
    /// Flash kept on continuously (torch).
    pub const TORCH: &str = "torch";
}

/// Direction a physical camera faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    /// Faces the user (same side as the display).
    Front,
    /// Faces away from the user.
    Back,
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Facing::Front => f.write_str("front"),
            Facing::Back => f.write_str("back"),
        }
    }
}

/// Static properties of a physical camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraInfo {
    /// Which way the camera faces.
    pub facing: Facing,
    /// Clockwise angle (degrees) the sensor image must be rotated to be
    /// upright in the device's natural orientation.
    pub orientation: u32,
}

/// A preview resolution in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PreviewSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PreviewSize {
    /// Creates a new preview size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns the area in pixels.
    #[inline]
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Returns true if both dimensions are within the given bounds.
    #[inline]
    pub fn fits_within(&self, max_width: u32, max_height: u32) -> bool {
        self.width <= max_width && self.height <= max_height
    }

    /// Returns the size as seen by consumers of a frame rotated by
    /// `rotation` degrees: quarter and three-quarter turns swap the axes.
    pub fn oriented(&self, rotation: u32) -> Self {
        match rotation % 360 {
            0 | 180 => *self,
            _ => Self::new(self.height, self.width),
        }
    }
}

impl fmt::Display for PreviewSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Snapshot of a device's parameter set.
///
/// Read with [`CameraDevice::parameters`](super::CameraDevice::parameters),
/// modified locally and written back with
/// [`CameraDevice::set_parameters`](super::CameraDevice::set_parameters).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CameraParameters {
    /// Currently selected preview size.
    pub preview_size: Option<PreviewSize>,
    /// Rotation (degrees) applied to captured pictures.
    pub rotation: u32,
    /// Current flash mode, if the camera has a flash unit.
    pub flash_mode: Option<String>,
    /// Preview sizes in the order the platform reports them.
    pub supported_preview_sizes: Vec<PreviewSize>,
    /// Supported flash modes; `None` when the camera has no flash unit.
    pub supported_flash_modes: Option<Vec<String>>,
}

impl CameraParameters {
    /// Returns true if `mode` is one of the supported flash modes.
    pub fn supports_flash_mode(&self, mode: &str) -> bool {
        self.supported_flash_modes
            .as_ref()
            .is_some_and(|modes| modes.iter().any(|m| m == mode))
    }
}
