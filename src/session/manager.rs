//! Camera session manager.
//!
//! Maps the two logical slots onto physical cameras, owns at most one open
//! handle per slot, and keeps each camera's rotation and preview size in
//! step with the device orientation.

use super::{
    CameraDescriptor, CameraSlot, ConfigError, FlashMode, PreviewBounds, SessionConfig, TorchMode,
};
use crate::geometry::{compute_rotation, select_best_preview_size, DeviceOrientation};
use crate::hardware::{CameraDevice, CameraHardware, HardwareError, PreviewSize};
use thiserror::Error;

/// Errors returned by session operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no {0} camera was found during enumeration")]
    NoCamera(CameraSlot),
    #[error("failed to open {slot} camera: {source}")]
    Open {
        slot: CameraSlot,
        #[source]
        source: HardwareError,
    },
    #[error("failed to configure {slot} camera: {source}")]
    Configure {
        slot: CameraSlot,
        #[source]
        source: HardwareError,
    },
}

/// Layout applied to a camera by [`CameraSessionManager::adjust_preview_layout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewLayout {
    /// Picture rotation in degrees.
    pub rotation: u32,
    /// Display rotation in degrees.
    pub display_rotation: u32,
    /// Selected hardware preview size, before any axis swap.
    pub selected: Option<PreviewSize>,
}

/// Counters describing what the manager has done so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Successful camera opens.
    pub opens: u64,
    /// Failed camera opens.
    pub open_failures: u64,
    /// Handles released.
    pub releases: u64,
    /// Parameter pushes the hardware refused.
    pub configure_failures: u64,
    /// Calls to `set_actual_device_orientation`.
    pub orientation_changes: u64,
    /// Current adjusted orientation in degrees.
    pub adjusted_orientation: u32,
    /// Slots that currently hold an open handle.
    pub acquired: u32,
}

#[derive(Debug)]
struct SlotState<D> {
    descriptor: CameraDescriptor,
    handle: Option<D>,
}

/// Manages the front and back camera for a barcode scanner.
///
/// The manager is driven from a single execution context; every mutating
/// operation takes `&mut self`.
pub struct CameraSessionManager<H: CameraHardware> {
    hardware: H,
    front: Option<SlotState<H::Device>>,
    back: Option<SlotState<H::Device>>,
    actual_orientation: DeviceOrientation,
    adjusted_orientation: u32,
    preview_bounds: PreviewBounds,
    barcode_types: Vec<String>,
    stats: SessionStats,
}

impl<H: CameraHardware> CameraSessionManager<H> {
    /// Enumerates the platform's cameras and builds a manager.
    ///
    /// The first front-facing and first back-facing camera fill the two
    /// slots; any further cameras are ignored. Each selected camera is
    /// opened, laid out and released once so its preview size is known
    /// before the first acquire. Failures during enumeration are logged
    /// and skipped.
    ///
    /// The configuration is validated here as well; invalid preview bounds
    /// are logged and replaced with unbounded ones.
    pub fn new(hardware: H, config: &SessionConfig) -> Self {
        let preview_bounds = match config.validate() {
            Ok(()) => config.preview_bounds,
            Err(ConfigError::InvalidBounds) => {
                tracing::warn!(
                    bounds = ?config.preview_bounds,
                    "Invalid preview bounds, selecting from all preview sizes"
                );
                PreviewBounds::default()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Session configuration is invalid");
                config.preview_bounds
            }
        };
        let mut manager = Self {
            hardware,
            front: None,
            back: None,
            actual_orientation: config.initial_orientation,
            adjusted_orientation: 0,
            preview_bounds,
            barcode_types: config.barcode_types.clone(),
            stats: SessionStats::default(),
        };
        manager.enumerate();
        manager
    }

    fn enumerate(&mut self) {
        let count = self.hardware.number_of_cameras();
        tracing::info!(count, "Enumerating cameras");

        for index in 0..count {
            let info = match self.hardware.camera_info(index) {
                Ok(info) => info,
                Err(e) => {
                    tracing::warn!(index, error = %e, "Failed to read camera info");
                    continue;
                }
            };

            let slot = CameraSlot::for_facing(info.facing);
            if self.slot(slot).is_some() {
                tracing::debug!(index, slot = %slot, "Ignoring additional camera");
                continue;
            }

            *self.slot_entry(slot) = Some(SlotState {
                descriptor: CameraDescriptor::new(index, info.facing, info.orientation),
                handle: None,
            });
            tracing::info!(
                index,
                slot = %slot,
                orientation = info.orientation,
                "Mapped camera"
            );

            // Warm-up cycle to learn the preview size.
            match self.acquire_camera(slot).map(|_| ()) {
                Ok(()) => {
                    self.release_camera(slot);
                }
                Err(e) => tracing::warn!(slot = %slot, error = %e, "Camera warm-up failed"),
            }
        }
    }

    fn slot(&self, slot: CameraSlot) -> Option<&SlotState<H::Device>> {
        match slot {
            CameraSlot::Front => self.front.as_ref(),
            CameraSlot::Back => self.back.as_ref(),
        }
    }

    fn slot_entry(&mut self, slot: CameraSlot) -> &mut Option<SlotState<H::Device>> {
        match slot {
            CameraSlot::Front => &mut self.front,
            CameraSlot::Back => &mut self.back,
        }
    }

    /// Returns the open handle for `slot`, opening the camera if needed.
    ///
    /// A handle that is already open is returned as is. A freshly opened
    /// camera is laid out for the current orientation; a layout failure
    /// at that point is logged and does not fail the acquire.
    pub fn acquire_camera(&mut self, slot: CameraSlot) -> Result<&mut H::Device, SessionError> {
        let state = self.slot(slot).ok_or(SessionError::NoCamera(slot))?;

        if state.handle.is_none() {
            let index = state.descriptor.index;
            let device = match self.hardware.open(index) {
                Ok(device) => device,
                Err(source) => {
                    self.stats.open_failures += 1;
                    tracing::warn!(slot = %slot, index, error = %source, "Failed to open camera");
                    return Err(SessionError::Open { slot, source });
                }
            };
            self.stats.opens += 1;
            tracing::info!(slot = %slot, index, "Camera opened");

            if let Some(state) = self.slot_entry(slot).as_mut() {
                state.handle = Some(device);
            }
            if let Err(e) = self.adjust_preview_layout(slot) {
                tracing::warn!(slot = %slot, error = %e, "Preview layout not applied");
            }
        }

        self.slot_entry(slot)
            .as_mut()
            .and_then(|state| state.handle.as_mut())
            .ok_or(SessionError::NoCamera(slot))
    }

    /// Releases the handle for `slot`. Returns false if none was open.
    pub fn release_camera(&mut self, slot: CameraSlot) -> bool {
        let Some(mut device) = self
            .slot_entry(slot)
            .as_mut()
            .and_then(|state| state.handle.take())
        else {
            return false;
        };

        device.release();
        self.stats.releases += 1;
        tracing::info!(slot = %slot, "Camera released");
        true
    }

    /// Returns true if `slot` currently holds an open handle.
    pub fn is_acquired(&self, slot: CameraSlot) -> bool {
        self.slot(slot).is_some_and(|state| state.handle.is_some())
    }

    /// Returns true if a camera was mapped to `slot` during enumeration.
    pub fn has_camera(&self, slot: CameraSlot) -> bool {
        self.slot(slot).is_some()
    }

    /// Returns the descriptor for `slot`, if a camera was mapped to it.
    pub fn descriptor(&self, slot: CameraSlot) -> Option<&CameraDescriptor> {
        self.slot(slot).map(|state| &state.descriptor)
    }

    /// Consumer-facing preview size for `slot`, if known.
    pub fn preview_size(&self, slot: CameraSlot) -> Option<PreviewSize> {
        self.descriptor(slot).and_then(|d| d.preview)
    }

    /// Consumer-facing preview width, or 0 if unknown.
    pub fn preview_width(&self, slot: CameraSlot) -> u32 {
        self.preview_size(slot).map_or(0, |size| size.width)
    }

    /// Consumer-facing preview height, or 0 if unknown.
    pub fn preview_height(&self, slot: CameraSlot) -> u32 {
        self.preview_size(slot).map_or(0, |size| size.height)
    }

    /// Recomputes rotation and preview size for `slot` and pushes them to
    /// the open handle.
    ///
    /// Returns `Ok(None)` if the slot has no open handle. The descriptor
    /// and adjusted orientation are updated even when the hardware refuses
    /// the new parameters; the refusal is returned as
    /// [`SessionError::Configure`].
    pub fn adjust_preview_layout(
        &mut self,
        slot: CameraSlot,
    ) -> Result<Option<PreviewLayout>, SessionError> {
        let device_orientation = self.actual_orientation;
        let bounds = self.preview_bounds;
        let Some(state) = self.slot_entry(slot).as_mut() else {
            return Ok(None);
        };
        let Some(device) = state.handle.as_mut() else {
            return Ok(None);
        };

        let descriptor = &mut state.descriptor;
        let pair = compute_rotation(
            descriptor.facing,
            descriptor.native_orientation,
            device_orientation,
        );
        descriptor.rotation = pair.rotation;

        let mut failure: Option<HardwareError> = device
            .set_display_orientation(pair.display_rotation)
            .err();

        let selected = match device.parameters() {
            Ok(mut params) => {
                params.rotation = pair.rotation;
                let selected = select_best_preview_size(
                    &params.supported_preview_sizes,
                    bounds.max_width,
                    bounds.max_height,
                );
                match selected {
                    Some(size) => params.preview_size = Some(size),
                    None => tracing::warn!(
                        slot = %slot,
                        "No supported preview size within bounds, keeping current size"
                    ),
                }
                if let Err(e) = device.set_parameters(&params) {
                    failure.get_or_insert(e);
                }
                selected
            }
            Err(e) => {
                failure.get_or_insert(e);
                None
            }
        };

        if let Some(size) = selected {
            descriptor.preview = Some(size.oriented(pair.rotation));
        }

        tracing::debug!(
            slot = %slot,
            device_orientation = %device_orientation,
            rotation = pair.rotation,
            display_rotation = pair.display_rotation,
            preview = ?descriptor.preview,
            "Preview layout adjusted"
        );

        self.adjusted_orientation = pair.rotation;

        if let Some(source) = failure {
            self.stats.configure_failures += 1;
            tracing::warn!(slot = %slot, error = %source, "Failed to push camera parameters");
            return Err(SessionError::Configure { slot, source });
        }

        Ok(Some(PreviewLayout {
            rotation: pair.rotation,
            display_rotation: pair.display_rotation,
            selected,
        }))
    }

    /// Records a new device orientation and re-lays out both slots.
    ///
    /// Both slots are attempted; slots without an open handle are left
    /// untouched. The first failure is returned.
    pub fn set_actual_device_orientation(
        &mut self,
        orientation: DeviceOrientation,
    ) -> Result<(), SessionError> {
        self.actual_orientation = orientation;
        self.stats.orientation_changes += 1;
        tracing::debug!(orientation = %orientation, "Device orientation changed");

        let mut first_error = None;
        for slot in CameraSlot::ALL {
            if let Err(e) = self.adjust_preview_layout(slot) {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    /// Last orientation reported by the host.
    pub fn actual_device_orientation(&self) -> DeviceOrientation {
        self.actual_orientation
    }

    /// Rotation (degrees) computed by the most recent layout adjustment.
    pub fn adjusted_device_orientation(&self) -> u32 {
        self.adjusted_orientation
    }

    /// Overrides the adjusted orientation. The value is stored as given.
    pub fn set_adjusted_device_orientation(&mut self, degrees: u32) {
        self.adjusted_orientation = degrees;
    }

    /// Turns the torch on or off. Returns whether the mode was applied.
    pub fn set_torch_mode(&mut self, slot: CameraSlot, mode: TorchMode) -> Result<bool, SessionError> {
        self.apply_flash_value(slot, mode.platform_value())
    }

    /// Sets the still-capture flash mode. Returns whether it was applied.
    pub fn set_flash_mode(&mut self, slot: CameraSlot, mode: FlashMode) -> Result<bool, SessionError> {
        self.apply_flash_value(slot, mode.platform_value())
    }

    fn apply_flash_value(&mut self, slot: CameraSlot, value: &str) -> Result<bool, SessionError> {
        let Some(device) = self
            .slot_entry(slot)
            .as_mut()
            .and_then(|state| state.handle.as_mut())
        else {
            return Ok(false);
        };

        let result = device.parameters().and_then(|mut params| {
            if !params.supports_flash_mode(value) {
                return Ok(false);
            }
            params.flash_mode = Some(value.to_string());
            device.set_parameters(&params).map(|()| true)
        });

        match result {
            Ok(true) => {
                tracing::debug!(slot = %slot, mode = value, "Flash mode applied");
                Ok(true)
            }
            Ok(false) => {
                tracing::debug!(slot = %slot, mode = value, "Flash mode not supported");
                Ok(false)
            }
            Err(source) => {
                self.stats.configure_failures += 1;
                tracing::warn!(slot = %slot, mode = value, error = %source, "Failed to set flash mode");
                Err(SessionError::Configure { slot, source })
            }
        }
    }

    /// Pushes only the picture rotation for `orientation` to `slot`.
    ///
    /// Unlike [`adjust_preview_layout`](Self::adjust_preview_layout) this
    /// neither touches the display orientation, the preview size, nor the
    /// stored device orientation. Returns `Ok(None)` if the slot has no
    /// open handle.
    pub fn adjust_camera_rotation_to_device_orientation(
        &mut self,
        slot: CameraSlot,
        orientation: DeviceOrientation,
    ) -> Result<Option<u32>, SessionError> {
        let Some(state) = self.slot_entry(slot).as_mut() else {
            return Ok(None);
        };
        let Some(device) = state.handle.as_mut() else {
            return Ok(None);
        };

        let pair = compute_rotation(
            state.descriptor.facing,
            state.descriptor.native_orientation,
            orientation,
        );
        state.descriptor.rotation = pair.rotation;

        let result = device.parameters().and_then(|mut params| {
            params.rotation = pair.rotation;
            device.set_parameters(&params)
        });

        if let Err(source) = result {
            self.stats.configure_failures += 1;
            tracing::warn!(slot = %slot, error = %source, "Failed to push camera rotation");
            return Err(SessionError::Configure { slot, source });
        }
        Ok(Some(pair.rotation))
    }

    /// Barcode symbologies the host asked for.
    pub fn barcode_types(&self) -> &[String] {
        &self.barcode_types
    }

    /// Replaces the requested barcode symbologies.
    pub fn set_barcode_types(&mut self, types: Vec<String>) {
        self.barcode_types = types;
    }

    /// The underlying platform.
    pub fn hardware(&self) -> &H {
        &self.hardware
    }

    /// Returns a snapshot of the session counters.
    pub fn stats(&self) -> SessionStats {
        let acquired = CameraSlot::ALL
            .into_iter()
            .filter(|&slot| self.is_acquired(slot))
            .count() as u32;
        SessionStats {
            adjusted_orientation: self.adjusted_orientation,
            acquired,
            ..self.stats.clone()
        }
    }
}

impl<H: CameraHardware> Drop for CameraSessionManager<H> {
    fn drop(&mut self) {
        for slot in CameraSlot::ALL {
            self.release_camera(slot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::{flash_mode, Facing, HardwareCall, MockCameraSpec, MockHardware};

    fn back_camera() -> MockCameraSpec {
        MockCameraSpec::new(Facing::Back, 90)
            .with_preview_sizes([(640, 480), (1920, 1080), (1280, 720)])
            .with_flash_modes([flash_mode::OFF, flash_mode::AUTO, flash_mode::TORCH])
    }

    fn front_camera() -> MockCameraSpec {
        MockCameraSpec::new(Facing::Front, 270).with_preview_sizes([(1280, 720), (640, 480)])
    }

    fn manager() -> CameraSessionManager<MockHardware> {
        CameraSessionManager::new(
            MockHardware::new(vec![back_camera(), front_camera()]),
            &SessionConfig::default(),
        )
    }

    #[test]
    fn test_enumeration_maps_first_of_each_facing() {
        let hardware = MockHardware::new(vec![
            front_camera(),
            back_camera(),
            MockCameraSpec::new(Facing::Back, 0),
        ]);
        let manager = CameraSessionManager::new(hardware, &SessionConfig::default());

        assert_eq!(manager.descriptor(CameraSlot::Front).unwrap().index, 0);
        assert_eq!(manager.descriptor(CameraSlot::Back).unwrap().index, 1);
        assert!(!manager.is_acquired(CameraSlot::Front));
        assert!(!manager.is_acquired(CameraSlot::Back));

        // Warm-up opened and released each mapped camera once.
        let stats = manager.stats();
        assert_eq!(stats.opens, 2);
        assert_eq!(stats.releases, 2);
        assert!(!manager
            .hardware()
            .calls()
            .contains(&HardwareCall::Open { index: 2 }));
    }

    #[test]
    fn test_warm_up_populates_preview_size() {
        let manager = manager();
        // Back sensor at 90 degrees in portrait: axes swapped.
        assert_eq!(
            manager.preview_size(CameraSlot::Back),
            Some(PreviewSize::new(1080, 1920))
        );
        assert_eq!(manager.preview_width(CameraSlot::Front), 720);
        assert_eq!(manager.preview_height(CameraSlot::Front), 1280);
    }

    #[test]
    fn test_missing_facing() {
        let mut manager = CameraSessionManager::new(
            MockHardware::new(vec![back_camera()]),
            &SessionConfig::default(),
        );
        assert!(!manager.has_camera(CameraSlot::Front));
        assert_eq!(manager.preview_width(CameraSlot::Front), 0);
        assert!(matches!(
            manager.acquire_camera(CameraSlot::Front),
            Err(SessionError::NoCamera(CameraSlot::Front))
        ));
    }

    #[test]
    fn test_acquire_is_idempotent() {
        let mut manager = manager();
        let first = manager.acquire_camera(CameraSlot::Back).unwrap().serial();
        let second = manager.acquire_camera(CameraSlot::Back).unwrap().serial();
        assert_eq!(first, second);
        assert_eq!(manager.stats().opens, 3);
    }

    #[test]
    fn test_release_then_acquire_reopens() {
        let mut manager = manager();
        let first = manager.acquire_camera(CameraSlot::Back).unwrap().serial();
        assert!(manager.release_camera(CameraSlot::Back));
        assert!(!manager.release_camera(CameraSlot::Back));

        let second = manager.acquire_camera(CameraSlot::Back).unwrap().serial();
        assert_ne!(first, second);
    }

    #[test]
    fn test_open_failure_is_reported_and_retryable() {
        let hardware = MockHardware::new(vec![back_camera(), front_camera()]);
        hardware.fail_open(0, true);
        let mut manager = CameraSessionManager::new(hardware, &SessionConfig::default());

        // Enumeration carries on past the failing camera.
        assert!(manager.has_camera(CameraSlot::Back));
        assert_eq!(manager.preview_size(CameraSlot::Back), None);
        assert_eq!(
            manager.preview_size(CameraSlot::Front),
            Some(PreviewSize::new(720, 1280))
        );

        assert!(matches!(
            manager.acquire_camera(CameraSlot::Back),
            Err(SessionError::Open { slot: CameraSlot::Back, .. })
        ));
        assert!(!manager.is_acquired(CameraSlot::Back));
        assert_eq!(manager.stats().open_failures, 2);

        // Once the camera frees up, acquiring again succeeds.
        manager.hardware().fail_open(0, false);
        let serial = manager.acquire_camera(CameraSlot::Back).unwrap().serial();
        // Serial 1 went to the front camera's warm-up.
        assert_eq!(serial, 2);
        assert!(manager.is_acquired(CameraSlot::Back));
        assert_eq!(
            manager.preview_size(CameraSlot::Back),
            Some(PreviewSize::new(1080, 1920))
        );
        assert_eq!(manager.stats().opens, 2);
    }

    #[test]
    fn test_info_failure_skips_camera() {
        let hardware = MockHardware::new(vec![
            back_camera(),
            MockCameraSpec::new(Facing::Back, 0).with_preview_sizes([(800, 600)]),
        ]);
        hardware.fail_info(0, true);
        let manager = CameraSessionManager::new(hardware, &SessionConfig::default());

        // The second back camera fills the slot instead.
        let descriptor = manager.descriptor(CameraSlot::Back).unwrap();
        assert_eq!(descriptor.index, 1);
        assert_eq!(descriptor.preview, Some(PreviewSize::new(800, 600)));

        let calls = manager.hardware().calls();
        assert!(calls.contains(&HardwareCall::CameraInfo { index: 0 }));
        assert!(!calls.contains(&HardwareCall::Open { index: 0 }));
        assert!(calls.contains(&HardwareCall::Open { index: 1 }));
    }

    #[test]
    fn test_invalid_bounds_fall_back_to_unbounded() {
        let config = SessionConfig {
            preview_bounds: PreviewBounds {
                max_width: 0,
                max_height: 720,
            },
            ..Default::default()
        };
        let manager = CameraSessionManager::new(MockHardware::new(vec![back_camera()]), &config);
        assert_eq!(
            manager.preview_size(CameraSlot::Back),
            Some(PreviewSize::new(1080, 1920))
        );
    }

    #[test]
    fn test_layout_pushes_rotation_and_largest_size() {
        let mut manager = manager();
        manager.acquire_camera(CameraSlot::Back).unwrap();

        let params = manager.hardware().current_parameters(0).unwrap();
        assert_eq!(params.rotation, 90);
        assert_eq!(params.preview_size, Some(PreviewSize::new(1920, 1080)));
        assert_eq!(manager.hardware().display_orientation(0), Some(90));
        assert_eq!(manager.adjusted_device_orientation(), 90);
    }

    #[test]
    fn test_layout_without_handle_is_noop() {
        let mut manager = manager();
        manager.hardware().clear_calls();
        assert_eq!(manager.adjust_preview_layout(CameraSlot::Back), Ok(None));
        assert!(manager.hardware().calls().is_empty());
    }

    #[test]
    fn test_orientation_change_swaps_preview_axes() {
        let mut manager = manager();
        manager.acquire_camera(CameraSlot::Back).unwrap();

        manager
            .set_actual_device_orientation(DeviceOrientation::LANDSCAPE)
            .unwrap();
        let descriptor = manager.descriptor(CameraSlot::Back).unwrap();
        assert_eq!(descriptor.rotation, 0);
        assert_eq!(descriptor.preview, Some(PreviewSize::new(1920, 1080)));
        assert_eq!(manager.adjusted_device_orientation(), 0);
        assert_eq!(manager.actual_device_orientation(), DeviceOrientation::LANDSCAPE);

        // Front has no handle, so its descriptor keeps the warm-up layout.
        assert_eq!(manager.descriptor(CameraSlot::Front).unwrap().rotation, 270);
    }

    #[test]
    fn test_orientation_change_without_handles_touches_nothing() {
        let mut manager = manager();
        manager.hardware().clear_calls();

        for orientation in DeviceOrientation::ALL {
            assert!(manager.set_actual_device_orientation(orientation).is_ok());
        }
        assert!(manager.hardware().calls().is_empty());
        assert_eq!(manager.stats().orientation_changes, 4);
    }

    #[test]
    fn test_push_failure_still_updates_descriptor() {
        let mut manager = manager();
        manager.acquire_camera(CameraSlot::Back).unwrap();
        manager.hardware().reject_parameters(true);

        let result = manager.set_actual_device_orientation(DeviceOrientation::LANDSCAPE_RIGHT);
        assert!(matches!(
            result,
            Err(SessionError::Configure { slot: CameraSlot::Back, .. })
        ));

        // Hardware keeps the previous configuration.
        assert_eq!(manager.hardware().current_parameters(0).unwrap().rotation, 90);
        let descriptor = manager.descriptor(CameraSlot::Back).unwrap();
        assert_eq!(descriptor.rotation, 180);
        assert_eq!(descriptor.preview, Some(PreviewSize::new(1920, 1080)));
        assert_eq!(manager.stats().configure_failures, 1);
    }

    #[test]
    fn test_preview_bounds_limit_selection() {
        let config = SessionConfig {
            preview_bounds: PreviewBounds {
                max_width: 1280,
                max_height: 720,
            },
            ..Default::default()
        };
        let mut manager =
            CameraSessionManager::new(MockHardware::new(vec![back_camera()]), &config);
        manager.acquire_camera(CameraSlot::Back).unwrap();
        let layout = manager
            .adjust_preview_layout(CameraSlot::Back)
            .unwrap()
            .unwrap();
        assert_eq!(layout.selected, Some(PreviewSize::new(1280, 720)));
        assert_eq!(layout.rotation, 90);
    }

    #[test]
    fn test_torch_and_flash_modes() {
        let mut manager = manager();
        assert_eq!(manager.set_torch_mode(CameraSlot::Back, TorchMode::On), Ok(false));

        manager.acquire_camera(CameraSlot::Back).unwrap();
        assert_eq!(manager.set_torch_mode(CameraSlot::Back, TorchMode::On), Ok(true));
        assert_eq!(
            manager.hardware().current_parameters(0).unwrap().flash_mode.as_deref(),
            Some(flash_mode::TORCH)
        );

        // "on" is not in the supported list: mode stays as it was.
        assert_eq!(manager.set_flash_mode(CameraSlot::Back, FlashMode::On), Ok(false));
        assert_eq!(
            manager.hardware().current_parameters(0).unwrap().flash_mode.as_deref(),
            Some(flash_mode::TORCH)
        );

        assert_eq!(manager.set_flash_mode(CameraSlot::Back, FlashMode::Auto), Ok(true));
        assert_eq!(
            manager.hardware().current_parameters(0).unwrap().flash_mode.as_deref(),
            Some(flash_mode::AUTO)
        );
    }

    #[test]
    fn test_flash_on_camera_without_flash_unit() {
        let mut manager = manager();
        manager.acquire_camera(CameraSlot::Front).unwrap();
        assert_eq!(manager.set_flash_mode(CameraSlot::Front, FlashMode::Off), Ok(false));
        assert_eq!(manager.set_torch_mode(CameraSlot::Front, TorchMode::On), Ok(false));
    }

    #[test]
    fn test_rotation_only_adjustment() {
        let mut manager = manager();
        assert_eq!(
            manager.adjust_camera_rotation_to_device_orientation(
                CameraSlot::Front,
                DeviceOrientation::LANDSCAPE
            ),
            Ok(None)
        );

        manager.acquire_camera(CameraSlot::Front).unwrap();
        let serial = manager.acquire_camera(CameraSlot::Front).unwrap().serial();
        manager.hardware().clear_calls();

        let rotation = manager
            .adjust_camera_rotation_to_device_orientation(
                CameraSlot::Front,
                DeviceOrientation::LANDSCAPE,
            )
            .unwrap();
        assert_eq!(rotation, Some(0));
        assert_eq!(manager.hardware().current_parameters(1).unwrap().rotation, 0);
        assert_eq!(
            manager.hardware().calls(),
            vec![
                HardwareCall::GetParameters { serial },
                HardwareCall::SetParameters { serial },
            ]
        );
        // Stored orientation is untouched.
        assert_eq!(manager.actual_device_orientation(), DeviceOrientation::PORTRAIT);
    }

    #[test]
    fn test_barcode_types_and_adjusted_orientation() {
        let config = SessionConfig {
            barcode_types: vec!["qr".to_string()],
            ..Default::default()
        };
        let mut manager = CameraSessionManager::new(MockHardware::new(Vec::new()), &config);
        assert_eq!(manager.barcode_types(), ["qr".to_string()]);

        manager.set_barcode_types(vec!["ean13".to_string(), "code128".to_string()]);
        assert_eq!(manager.barcode_types().len(), 2);

        manager.set_adjusted_device_orientation(450);
        assert_eq!(manager.adjusted_device_orientation(), 450);
    }

    #[test]
    fn test_stats_track_acquired_slots() {
        let mut manager = manager();
        assert_eq!(manager.stats().acquired, 0);

        let serial = manager.acquire_camera(CameraSlot::Back).unwrap().serial();
        manager.acquire_camera(CameraSlot::Front).unwrap();
        assert_eq!(manager.stats().acquired, 2);
        assert!(!manager
            .hardware()
            .calls()
            .contains(&HardwareCall::Release { serial }));

        manager.release_camera(CameraSlot::Front);
        assert_eq!(manager.stats().acquired, 1);
    }
}
