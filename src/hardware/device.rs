//! Camera hardware abstraction.
//!
//! This module provides a trait-based seam over the platform camera API,
//! allowing the session logic to run against real hardware or against
//! the in-memory [`MockHardware`](super::MockHardware) in tests.

use super::{CameraInfo, CameraParameters};
use thiserror::Error;

/// Errors reported by the platform camera layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HardwareError {
    #[error("camera device not found: index {0}")]
    DeviceNotFound(usize),
    #[error("camera info unavailable: index {0}")]
    InfoUnavailable(usize),
    #[error("failed to open camera {index}: {reason}")]
    OpenFailed { index: usize, reason: String },
    #[error("camera rejected parameters: {0}")]
    ParametersRejected(String),
    #[error("camera handle already released")]
    Released,
}

/// Access to the platform's set of physical cameras.
pub trait CameraHardware {
    /// Handle type returned by [`open`](Self::open).
    type Device: CameraDevice;

    /// Number of physical cameras, indexed `0..n`.
    fn number_of_cameras(&self) -> usize;

    /// Reads the static properties of the camera at `index`.
    fn camera_info(&self, index: usize) -> Result<CameraInfo, HardwareError>;

    /// Opens the camera at `index`.
    fn open(&mut self, index: usize) -> Result<Self::Device, HardwareError>;
}

/// An open camera handle.
pub trait CameraDevice {
    /// Returns a snapshot of the current parameter set.
    fn parameters(&self) -> Result<CameraParameters, HardwareError>;

    /// Writes a parameter set back to the device.
    fn set_parameters(&mut self, params: &CameraParameters) -> Result<(), HardwareError>;

    /// Sets the clockwise rotation (degrees) of the preview display.
    fn set_display_orientation(&mut self, degrees: u32) -> Result<(), HardwareError>;

    /// Releases the underlying hardware resource.
    fn release(&mut self);
}
