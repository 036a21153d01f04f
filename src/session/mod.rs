//! Camera session management.
//!
//! This module maps the front/back slots exposed to the host onto the
//! platform's physical cameras and keeps their rotation, preview size
//! and flash settings in line with the device orientation.

mod config;
mod manager;
mod slot;

pub use config::{ConfigError, FileConfig, PreviewBounds, SessionConfig, SimulatorConfig};
pub use manager::{CameraSessionManager, PreviewLayout, SessionError, SessionStats};
pub use slot::{CameraDescriptor, CameraSlot, FlashMode, TorchMode, UnknownConstant};
