//! Prometheus metrics for camera session monitoring.
//!
//! # Metrics Exposed
//!
//! ## Lifecycle
//! - `scan_camera_opens_total` - Successful camera opens
//! - `scan_camera_open_failures_total` - Failed camera opens
//! - `scan_camera_releases_total` - Handles released
//! - `scan_camera_acquired` - Slots currently holding an open camera
//!
//! ## Configuration
//! - `scan_camera_configure_failures_total` - Parameter pushes refused by the camera
//! - `scan_camera_orientation_changes_total` - Device orientation changes
//! - `scan_camera_adjusted_orientation_degrees` - Rotation from the latest layout
//!
//! # Example
//!
//! ```no_run
//! use scan_camera::hardware::MockHardware;
//! use scan_camera::metrics::MetricsRegistry;
//! use scan_camera::session::{CameraSessionManager, SessionConfig};
//!
//! let registry = MetricsRegistry::new().expect("Failed to create registry");
//! let manager = CameraSessionManager::new(MockHardware::new(Vec::new()), &SessionConfig::default());
//!
//! registry.update(&manager.stats());
//! println!("{}", registry.encode().unwrap());
//! ```

mod collector;

pub use collector::{MetricsError, MetricsRegistry};
