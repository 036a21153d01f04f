//! Logical camera slots and the caller-facing integer contract.

use crate::hardware::{flash_mode, Facing, PreviewSize};
use std::fmt;

/// Logical camera selected by the caller.
///
/// Integer values are the ones exchanged with the host bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum CameraSlot {
    /// First front-facing camera found.
    Front = 1,
    /// First back-facing camera found.
    Back = 2,
}

impl CameraSlot {
    /// Both slots, front first.
    pub const ALL: [Self; 2] = [Self::Front, Self::Back];

    /// The physical facing this slot is filled from.
    pub fn facing(self) -> Facing {
        match self {
            Self::Front => Facing::Front,
            Self::Back => Facing::Back,
        }
    }

    /// The slot a camera with the given facing belongs to.
    pub fn for_facing(facing: Facing) -> Self {
        match facing {
            Facing::Front => Self::Front,
            Facing::Back => Self::Back,
        }
    }
}

impl TryFrom<i32> for CameraSlot {
    type Error = UnknownConstant;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Front),
            2 => Ok(Self::Back),
            other => Err(UnknownConstant::Slot(other)),
        }
    }
}

impl fmt::Display for CameraSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.facing(), f)
    }
}

/// Torch (continuous light) setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum TorchMode {
    Off = 0,
    On = 1,
}

impl TorchMode {
    /// Platform flash-mode value implementing this torch setting.
    pub fn platform_value(self) -> &'static str {
        match self {
            Self::Off => flash_mode::OFF,
            Self::On => flash_mode::TORCH,
        }
    }
}

impl TryFrom<i32> for TorchMode {
    type Error = UnknownConstant;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Off),
            1 => Ok(Self::On),
            other => Err(UnknownConstant::TorchMode(other)),
        }
    }
}

/// Flash setting for still captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum FlashMode {
    Off = 0,
    On = 1,
    Auto = 2,
}

impl FlashMode {
    /// Platform flash-mode value for this setting.
    pub fn platform_value(self) -> &'static str {
        match self {
            Self::Off => flash_mode::OFF,
            Self::On => flash_mode::ON,
            Self::Auto => flash_mode::AUTO,
        }
    }
}

impl TryFrom<i32> for FlashMode {
    type Error = UnknownConstant;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Off),
            1 => Ok(Self::On),
            2 => Ok(Self::Auto),
            other => Err(UnknownConstant::FlashMode(other)),
        }
    }
}

/// An integer from the host that does not map to a known constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UnknownConstant {
    #[error("unknown camera type {0}")]
    Slot(i32),
    #[error("unknown torch mode {0}")]
    TorchMode(i32),
    #[error("unknown flash mode {0}")]
    FlashMode(i32),
}

/// What the manager knows about the camera behind a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraDescriptor {
    /// Platform index of the physical camera.
    pub index: usize,
    /// Physical facing.
    pub facing: Facing,
    /// Native sensor orientation in degrees.
    pub native_orientation: u32,
    /// Last computed picture rotation in degrees.
    pub rotation: u32,
    /// Preview size as seen by frame consumers (axes already swapped for
    /// quarter-turn rotations). `None` until a layout has been computed.
    pub preview: Option<PreviewSize>,
}

impl CameraDescriptor {
    pub(crate) fn new(index: usize, facing: Facing, native_orientation: u32) -> Self {
        Self {
            index,
            facing,
            native_orientation,
            rotation: 0,
            preview: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_contract() {
        assert_eq!(CameraSlot::try_from(1), Ok(CameraSlot::Front));
        assert_eq!(CameraSlot::try_from(2), Ok(CameraSlot::Back));
        assert_eq!(CameraSlot::try_from(0), Err(UnknownConstant::Slot(0)));
        assert_eq!(CameraSlot::Back as i32, 2);

        assert_eq!(TorchMode::try_from(1), Ok(TorchMode::On));
        assert!(TorchMode::try_from(2).is_err());

        assert_eq!(FlashMode::try_from(2), Ok(FlashMode::Auto));
        assert_eq!(FlashMode::try_from(7), Err(UnknownConstant::FlashMode(7)));
    }

    #[test]
    fn test_platform_values() {
        assert_eq!(TorchMode::On.platform_value(), "torch");
        assert_eq!(TorchMode::Off.platform_value(), "off");
        assert_eq!(FlashMode::Auto.platform_value(), "auto");
        assert_eq!(FlashMode::On.platform_value(), "on");
    }

    #[test]
    fn test_slot_facing_mapping() {
        for slot in CameraSlot::ALL {
            assert_eq!(CameraSlot::for_facing(slot.facing()), slot);
        }
        assert_eq!(CameraSlot::Front.to_string(), "front");
    }
}
