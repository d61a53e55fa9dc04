//! The capture handle owned by a [`Capturer`](crate::Capturer): either a
//! real camera stream or the synthetic black-frame source.

use std::time::Instant;

use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::Resolution as NokhwaResolution;
use nokhwa::Camera;

use crate::dummy::DummySource;
use crate::types::{CaptureConfig, Frame, FrameFormat};

/// A real device with an open stream.
pub(crate) struct DeviceHandle {
    camera: Camera,
}

impl DeviceHandle {
    /// Wrap a camera whose stream has already been opened.
    pub(crate) fn new(camera: Camera) -> Self {
        Self { camera }
    }

    pub(crate) fn is_opened(&self) -> bool {
        self.camera.is_stream_open()
    }

    /// Grab one frame and convert it to RGB.
    ///
    /// Returns `None` on a failed grab or an undecodable buffer; the
    /// caller may retry on the next call.
    fn read(&mut self) -> Option<Frame> {
        let buffer = match self.camera.frame() {
            Ok(buffer) => buffer,
            Err(e) => {
                log::debug!("frame grab failed: {}", e);
                return None;
            }
        };
        convert_to_rgb(&buffer)
    }

    /// Apply the requested format, ignoring per-property failures.
    fn configure(&mut self, config: &CaptureConfig) {
        if let Err(e) = self
            .camera
            .set_resolution(NokhwaResolution::new(config.width, config.height))
        {
            log::debug!(
                "camera ignored resolution {}x{}: {}",
                config.width,
                config.height,
                e
            );
        }
        if let Err(e) = self.camera.set_frame_rate(config.fps) {
            log::debug!("camera ignored frame rate {}: {}", config.fps, e);
        }
    }

    fn release(&mut self) {
        let _ = self.camera.stop_stream();
    }
}

impl std::fmt::Debug for DeviceHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceHandle")
            .field("is_opened", &self.is_opened())
            .finish_non_exhaustive()
    }
}

/// Convert a nokhwa buffer to our RGB Frame format.
///
/// Handles various camera formats (MJPEG, YUYV, NV12, etc.) via nokhwa's
/// built-in decode to RGB. Returns `None` if the conversion fails
/// (unsupported format or corrupt data).
fn convert_to_rgb(buffer: &nokhwa::Buffer) -> Option<Frame> {
    let decoded = buffer.decode_image::<RgbFormat>().ok()?;
    let resolution = buffer.resolution();

    Some(Frame {
        data: decoded.into_raw(),
        width: resolution.width(),
        height: resolution.height(),
        format: FrameFormat::Rgb,
        timestamp: Instant::now(),
    })
}

/// The one handle a `Capturer` owns while running.
#[derive(Debug)]
pub(crate) enum CaptureHandle {
    /// A real device stream
    Device(DeviceHandle),
    /// Synthetic black frames, used when probing exhausted all candidates
    Dummy(DummySource),
}

impl CaptureHandle {
    pub(crate) fn is_opened(&self) -> bool {
        match self {
            CaptureHandle::Device(device) => device.is_opened(),
            CaptureHandle::Dummy(dummy) => dummy.is_opened(),
        }
    }

    pub(crate) fn read(&mut self) -> Option<Frame> {
        match self {
            CaptureHandle::Device(device) => device.read(),
            CaptureHandle::Dummy(dummy) => Some(dummy.read()),
        }
    }

    pub(crate) fn configure(&mut self, config: &CaptureConfig) {
        match self {
            CaptureHandle::Device(device) => device.configure(config),
            CaptureHandle::Dummy(dummy) => {
                dummy.configure(config);
            }
        }
    }

    pub(crate) fn release(&mut self) {
        match self {
            CaptureHandle::Device(device) => device.release(),
            CaptureHandle::Dummy(dummy) => dummy.release(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dummy_handle_contract() {
        let mut handle = CaptureHandle::Dummy(DummySource::new(6, 2));
        assert!(handle.is_opened());

        let frame = handle.read().unwrap();
        assert_eq!((frame.width, frame.height), (6, 2));
        assert!(frame.data.iter().all(|&b| b == 0));

        handle.configure(&CaptureConfig::default());
        handle.release();
        assert!(!handle.is_opened());
    }
}
