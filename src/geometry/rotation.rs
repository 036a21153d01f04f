//! Sensor and display rotation.
//!
//! Camera sensors are mounted at a fixed angle relative to the device's
//! natural orientation. When the device turns, captured pictures and the
//! on-screen preview each need their own correction, and front cameras
//! additionally mirror the preview.

use crate::hardware::Facing;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Device orientation in clockwise quarter turns from natural (0-3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct DeviceOrientation(u32);

impl DeviceOrientation {
    /// Natural orientation.
    pub const PORTRAIT: Self = Self(0);
    /// Rotated a quarter turn.
    pub const LANDSCAPE: Self = Self(1);
    /// Upside down.
    pub const PORTRAIT_UPSIDE_DOWN: Self = Self(2);
    /// Rotated three quarter turns.
    pub const LANDSCAPE_RIGHT: Self = Self(3);

    /// All four orientations in order.
    pub const ALL: [Self; 4] = [
        Self::PORTRAIT,
        Self::LANDSCAPE,
        Self::PORTRAIT_UPSIDE_DOWN,
        Self::LANDSCAPE_RIGHT,
    ];

    /// Validates a quarter-turn count.
    pub fn from_quarter_turns(turns: u32) -> Result<Self, OrientationError> {
        if turns > 3 {
            return Err(OrientationError::OutOfRange(turns));
        }
        Ok(Self(turns))
    }

    /// Quarter turns from natural orientation.
    #[inline]
    pub fn quarter_turns(self) -> u32 {
        self.0
    }

    /// Rotation from natural orientation in degrees.
    #[inline]
    pub fn degrees(self) -> u32 {
        self.0 * 90
    }
}

impl TryFrom<u32> for DeviceOrientation {
    type Error = OrientationError;

    fn try_from(turns: u32) -> Result<Self, Self::Error> {
        Self::from_quarter_turns(turns)
    }
}

impl From<DeviceOrientation> for u32 {
    fn from(orientation: DeviceOrientation) -> Self {
        orientation.0
    }
}

impl fmt::Display for DeviceOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// Orientation validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrientationError {
    #[error("device orientation must be 0-3 quarter turns, got {0}")]
    OutOfRange(u32),
}

/// Rotations derived for one camera at one device orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPair {
    /// Rotation (degrees) to apply to captured pictures.
    pub rotation: u32,
    /// Rotation (degrees) to apply to the on-screen preview.
    pub display_rotation: u32,
}

/// Computes picture and display rotation for a camera.
///
/// Both results are in `[0, 360)`. For back cameras the two are equal;
/// front cameras counter-rotate the display to undo the mirror.
pub fn compute_rotation(
    facing: Facing,
    native_orientation: u32,
    device: DeviceOrientation,
) -> RotationPair {
    let native = native_orientation % 360;
    let turned = device.degrees();

    match facing {
        Facing::Front => RotationPair {
            rotation: (native + turned) % 360,
            display_rotation: (720 - native - turned) % 360,
        },
        Facing::Back => {
            let rotation = (native + 360 - turned) % 360;
            RotationPair {
                rotation,
                display_rotation: rotation,
            }
        }
    }
}
