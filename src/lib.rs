//! Barcode Scanner Camera Sessions
//!
//! Manages the front and back cameras used for live barcode scanning:
//! picks the physical devices, opens and closes handles on demand,
//! negotiates the preview resolution, and keeps picture and display
//! rotation in line with the device orientation.
//!
//! # Architecture
//!
//! ```text
//! host orientation / mode calls
//!            ↓
//!   session (CameraSessionManager) ── geometry (rotation, size selection)
//!            ↓
//!   hardware (CameraHardware / CameraDevice traits)
//! ```
//!
//! # Design Principles
//!
//! - **Hardware behind a trait**: the orientation and sizing logic runs
//!   against any platform, including the in-memory [`MockHardware`]
//! - **Explicit errors**: failures are returned to the caller as well as
//!   logged; operating on a slot without an open camera is a no-op
//! - **Single owner**: the manager is a plain value, not a global
//!
//! # Example
//!
//! ```no_run
//! use scan_camera::{
//!     geometry::DeviceOrientation,
//!     hardware::{Facing, MockCameraSpec, MockHardware},
//!     session::{CameraSessionManager, CameraSlot, SessionConfig, TorchMode},
//! };
//!
//! let hardware = MockHardware::new(vec![
//!     MockCameraSpec::new(Facing::Back, 90).with_preview_sizes([(1920, 1080), (640, 480)]),
//! ]);
//! let mut manager = CameraSessionManager::new(hardware, &SessionConfig::default());
//!
//! manager.acquire_camera(CameraSlot::Back).unwrap();
//! manager.set_actual_device_orientation(DeviceOrientation::LANDSCAPE).unwrap();
//! manager.set_torch_mode(CameraSlot::Back, TorchMode::On).unwrap();
//!
//! println!(
//!     "preview {}x{}",
//!     manager.preview_width(CameraSlot::Back),
//!     manager.preview_height(CameraSlot::Back)
//! );
//! manager.release_camera(CameraSlot::Back);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod geometry;
pub mod hardware;
pub mod metrics;
pub mod session;

// Re-export commonly used types at crate root
pub use geometry::{compute_rotation, select_best_preview_size, DeviceOrientation, RotationPair};
pub use hardware::{CameraDevice, CameraHardware, Facing, MockHardware, PreviewSize};
pub use metrics::MetricsRegistry;
pub use session::{CameraSessionManager, CameraSlot, FlashMode, SessionConfig, SessionError, TorchMode};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
