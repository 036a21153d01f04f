//! In-memory camera platform for tests and the demo CLI.
//!
//! Every call that reaches the "hardware" is appended to a shared
//! [`HardwareCall`] log so callers can assert exactly what was touched.

use super::{
    CameraDevice, CameraHardware, CameraInfo, CameraParameters, Facing, HardwareError, PreviewSize,
};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

/// Description of one simulated physical camera.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockCameraSpec {
    /// Which way the camera faces.
    pub facing: Facing,
    /// Native sensor orientation in degrees.
    #[serde(default)]
    pub orientation: u32,
    /// Supported preview sizes, in reporting order.
    #[serde(default)]
    pub preview_sizes: Vec<PreviewSize>,
    /// Supported flash modes; absent when the camera has no flash unit.
    #[serde(default)]
    pub flash_modes: Option<Vec<String>>,
}

impl MockCameraSpec {
    /// Creates a camera with the given facing and native orientation.
    pub fn new(facing: Facing, orientation: u32) -> Self {
        Self {
            facing,
            orientation,
            preview_sizes: Vec::new(),
            flash_modes: None,
        }
    }

    /// Sets the supported preview sizes.
    pub fn with_preview_sizes(mut self, sizes: impl IntoIterator<Item = (u32, u32)>) -> Self {
        self.preview_sizes = sizes
            .into_iter()
            .map(|(w, h)| PreviewSize::new(w, h))
            .collect();
        self
    }

    /// Sets the supported flash modes.
    pub fn with_flash_modes<'a>(mut self, modes: impl IntoIterator<Item = &'a str>) -> Self {
        self.flash_modes = Some(modes.into_iter().map(str::to_string).collect());
        self
    }

    fn initial_parameters(&self) -> CameraParameters {
        let flash_mode = self
            .flash_modes
            .as_ref()
            .and_then(|modes| modes.first().cloned());
        CameraParameters {
            preview_size: self.preview_sizes.first().copied(),
            rotation: 0,
            flash_mode,
            supported_preview_sizes: self.preview_sizes.clone(),
            supported_flash_modes: self.flash_modes.clone(),
        }
    }
}

/// A call that reached the simulated hardware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HardwareCall {
    CameraInfo { index: usize },
    Open { index: usize },
    Release { serial: u64 },
    GetParameters { serial: u64 },
    SetParameters { serial: u64 },
    SetDisplayOrientation { serial: u64, degrees: u32 },
}

#[derive(Debug)]
struct MockState {
    calls: Vec<HardwareCall>,
    parameters: Vec<CameraParameters>,
    display_orientation: Vec<u32>,
    reject_parameters: bool,
    failing_opens: HashSet<usize>,
    failing_info: HashSet<usize>,
    next_serial: u64,
}

/// Simulated camera platform.
#[derive(Debug)]
pub struct MockHardware {
    cameras: Vec<MockCameraSpec>,
    state: Rc<RefCell<MockState>>,
}

impl MockHardware {
    /// Creates a platform exposing the given cameras in index order.
    pub fn new(cameras: Vec<MockCameraSpec>) -> Self {
        let parameters = cameras.iter().map(MockCameraSpec::initial_parameters).collect();
        let display_orientation = vec![0; cameras.len()];
        Self {
            cameras,
            state: Rc::new(RefCell::new(MockState {
                calls: Vec::new(),
                parameters,
                display_orientation,
                reject_parameters: false,
                failing_opens: HashSet::new(),
                failing_info: HashSet::new(),
                next_serial: 1,
            })),
        }
    }

    /// Makes every open of camera `index` fail until cleared.
    pub fn fail_open(&self, index: usize, failing: bool) {
        let mut state = self.state.borrow_mut();
        if failing {
            state.failing_opens.insert(index);
        } else {
            state.failing_opens.remove(&index);
        }
    }

    /// Makes every `camera_info` query for camera `index` fail until cleared.
    pub fn fail_info(&self, index: usize, failing: bool) {
        let mut state = self.state.borrow_mut();
        if failing {
            state.failing_info.insert(index);
        } else {
            state.failing_info.remove(&index);
        }
    }

    /// Makes every `set_parameters` call fail until cleared.
    pub fn reject_parameters(&self, reject: bool) {
        self.state.borrow_mut().reject_parameters = reject;
    }

    /// Returns all calls recorded so far.
    pub fn calls(&self) -> Vec<HardwareCall> {
        self.state.borrow().calls.clone()
    }

    /// Forgets all recorded calls.
    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    /// Returns the parameters currently held by camera `index`.
    pub fn current_parameters(&self, index: usize) -> Option<CameraParameters> {
        self.state.borrow().parameters.get(index).cloned()
    }

    /// Returns the display orientation last applied to camera `index`.
    pub fn display_orientation(&self, index: usize) -> Option<u32> {
        self.state.borrow().display_orientation.get(index).copied()
    }
}

impl CameraHardware for MockHardware {
    type Device = MockDevice;

    fn number_of_cameras(&self) -> usize {
        self.cameras.len()
    }

    fn camera_info(&self, index: usize) -> Result<CameraInfo, HardwareError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(HardwareCall::CameraInfo { index });
        if state.failing_info.contains(&index) {
            return Err(HardwareError::InfoUnavailable(index));
        }
        let spec = self
            .cameras
            .get(index)
            .ok_or(HardwareError::DeviceNotFound(index))?;
        Ok(CameraInfo {
            facing: spec.facing,
            orientation: spec.orientation,
        })
    }

    fn open(&mut self, index: usize) -> Result<MockDevice, HardwareError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(HardwareCall::Open { index });

        if index >= self.cameras.len() {
            return Err(HardwareError::DeviceNotFound(index));
        }
        if state.failing_opens.contains(&index) {
            return Err(HardwareError::OpenFailed {
                index,
                reason: "camera in use by another client".to_string(),
            });
        }

        let serial = state.next_serial;
        state.next_serial += 1;
        tracing::debug!(index, serial, "MockHardware opened camera");

        Ok(MockDevice {
            index,
            serial,
            released: false,
            state: Rc::clone(&self.state),
        })
    }
}

/// Handle to a simulated camera.
#[derive(Debug)]
pub struct MockDevice {
    index: usize,
    serial: u64,
    released: bool,
    state: Rc<RefCell<MockState>>,
}

impl MockDevice {
    /// Index of the physical camera behind this handle.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Identity of this handle; every open yields a new serial.
    pub fn serial(&self) -> u64 {
        self.serial
    }

    /// Returns true once [`release`](CameraDevice::release) has been called.
    pub fn is_released(&self) -> bool {
        self.released
    }
}

impl CameraDevice for MockDevice {
    fn parameters(&self) -> Result<CameraParameters, HardwareError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(HardwareCall::GetParameters {
            serial: self.serial,
        });
        if self.released {
            return Err(HardwareError::Released);
        }
        Ok(state.parameters[self.index].clone())
    }

    fn set_parameters(&mut self, params: &CameraParameters) -> Result<(), HardwareError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(HardwareCall::SetParameters {
            serial: self.serial,
        });
        if self.released {
            return Err(HardwareError::Released);
        }
        if state.reject_parameters {
            return Err(HardwareError::ParametersRejected(
                "setParameters failed".to_string(),
            ));
        }

        let current = &state.parameters[self.index];
        if let Some(size) = params.preview_size {
            if !current.supported_preview_sizes.contains(&size) {
                return Err(HardwareError::ParametersRejected(format!(
                    "unsupported preview size {size}"
                )));
            }
        }
        if let Some(mode) = params.flash_mode.as_deref() {
            if !current.supports_flash_mode(mode) {
                return Err(HardwareError::ParametersRejected(format!(
                    "unsupported flash mode {mode}"
                )));
            }
        }

        // Capability lists are owned by the device, not the caller.
        let next = CameraParameters {
            supported_preview_sizes: current.supported_preview_sizes.clone(),
            supported_flash_modes: current.supported_flash_modes.clone(),
            ..params.clone()
        };
        state.parameters[self.index] = next;
        Ok(())
    }

    fn set_display_orientation(&mut self, degrees: u32) -> Result<(), HardwareError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(HardwareCall::SetDisplayOrientation {
            serial: self.serial,
            degrees,
        });
        if self.released {
            return Err(HardwareError::Released);
        }
        state.display_orientation[self.index] = degrees;
        Ok(())
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        self.state.borrow_mut().calls.push(HardwareCall::Release {
            serial: self.serial,
        });
        tracing::debug!(index = self.index, serial = self.serial, "MockDevice released");
    }
}
