//! Orientation arithmetic and preview size selection.
//!
//! Pure functions with no hardware access, shared by every code path
//! in [`session`](crate::session) that rotates or sizes a preview.

mod rotation;
mod size;

pub use rotation::{compute_rotation, DeviceOrientation, OrientationError, RotationPair};
pub use size::{select_best_preview_size, smallest_preview_size};
