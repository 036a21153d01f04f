//! Platform camera access.
//!
//! This module is the seam between the session logic and the platform
//! camera API. It exposes the hardware as a pair of traits plus the
//! plain data types the platform reports, and ships an in-memory
//! implementation for testing.

mod device;
mod mock;
mod params;

pub use device::{CameraDevice, CameraHardware, HardwareError};
pub use mock::{HardwareCall, MockCameraSpec, MockDevice, MockHardware};
pub use params::{flash_mode, CameraInfo, CameraParameters, Facing, PreviewSize};
