//! Capture session: construct, start, read, release.

use crate::device::list_devices;
use crate::dummy::DummySource;
use crate::handle::CaptureHandle;
use crate::probe;
use crate::types::{CaptureConfig, CaptureError, Frame};

/// Callback invoked synchronously with each frame delivered by `read`.
pub type FrameCallback = Box<dyn FnMut(&Frame)>;

/// A capture session over one device index.
///
/// Owns at most one handle at a time: either a real camera stream found
/// by ordered backend probing, or a [`DummySource`] when probing
/// exhausted every candidate. All operations are intended to be called
/// sequentially from one thread; there is no internal locking and no
/// background capture thread.
pub struct Capturer {
    device_index: u32,
    running: bool,
    handle: Option<CaptureHandle>,
    frame_callback: Option<FrameCallback>,
    last_frame: Option<Frame>,
}

impl std::fmt::Debug for Capturer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Capturer")
            .field("device_index", &self.device_index)
            .field("running", &self.running)
            .field(
                "handle_open",
                &self.handle.as_ref().is_some_and(|h| h.is_opened()),
            )
            .finish_non_exhaustive()
    }
}

impl Capturer {
    /// Create a capturer for the given device index.
    ///
    /// When device enumeration is available and reports at least one
    /// device, the index is validated against the device count. When
    /// enumeration fails or reports no devices there is nothing to
    /// validate against; `start` handles the absence of hardware by
    /// degrading to a black-frame source.
    ///
    /// # Errors
    /// * `CaptureError::InvalidDevice` - if enumeration reports N >= 1
    ///   devices and `device_index >= N`
    pub fn new(device_index: u32) -> Result<Self, CaptureError> {
        match list_devices() {
            Ok(devices) if !devices.is_empty() => {
                if device_index as usize >= devices.len() {
                    return Err(CaptureError::InvalidDevice {
                        requested: device_index,
                        available: devices.len(),
                    });
                }
            }
            Ok(_) => {
                log::debug!("no devices enumerated, deferring to start");
            }
            Err(e) => {
                log::debug!("device enumeration unavailable, skipping validation: {}", e);
            }
        }

        Ok(Self {
            device_index,
            running: false,
            handle: None,
            frame_callback: None,
            last_frame: None,
        })
    }

    /// Open a device and begin the capture session.
    ///
    /// Walks the ordered `(index, backend)` candidate list; if every
    /// probe fails, a [`DummySource`] sized to `config` is used instead.
    /// Degradation, not failure, is the outcome of exhausting the probe
    /// list, so this returns `true` in both cases. The requested format
    /// is then applied best-effort to whichever handle was obtained.
    ///
    /// Calling `start` while a handle is already held releases it first.
    /// Calling `start` again after `release` re-probes.
    pub fn start(&mut self, config: CaptureConfig) -> bool {
        log::info!(
            "attempting to open camera with index {}",
            self.device_index
        );

        if let Some(mut old) = self.handle.take() {
            old.release();
        }

        let mut handle = match probe::open_first(&probe::candidates(self.device_index), &config) {
            Some(device) => CaptureHandle::Device(device),
            None => {
                log::warn!("no camera available, using synthetic black frames");
                CaptureHandle::Dummy(DummySource::new(config.width, config.height))
            }
        };

        handle.configure(&config);

        self.handle = Some(handle);
        self.running = true;
        true
    }

    /// Read one frame.
    ///
    /// Returns `None` if the session is not running or a single grab
    /// fails (non-fatal, retry on the next call). On success the frame
    /// is stored as the last frame and the registered callback, if any,
    /// is invoked with it before this returns.
    pub fn read(&mut self) -> Option<Frame> {
        if !self.running {
            return None;
        }
        let handle = self.handle.as_mut()?;
        let frame = handle.read()?;

        self.last_frame = Some(frame.clone());
        if let Some(callback) = self.frame_callback.as_mut() {
            callback(&frame);
        }
        Some(frame)
    }

    /// Stop the session and release the underlying handle.
    ///
    /// Idempotent; calling on a capturer that is not running does nothing.
    pub fn release(&mut self) {
        if !self.running {
            return;
        }
        if let Some(mut handle) = self.handle.take() {
            handle.release();
        }
        self.running = false;
    }

    /// Register a callback fired once per successful `read`.
    ///
    /// Replaces any previously registered callback; takes effect on the
    /// next `read`.
    pub fn set_frame_callback(&mut self, callback: impl FnMut(&Frame) + 'static) {
        self.frame_callback = Some(Box::new(callback));
    }

    /// Whether `start` has been called and `release` has not.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The most recently delivered frame, if any.
    pub fn last_frame(&self) -> Option<&Frame> {
        self.last_frame.as_ref()
    }
}

impl Drop for Capturer {
    fn drop(&mut self) {
        self.release();
    }
}
