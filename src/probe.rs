//! Ordered backend probing.
//!
//! A camera is opened by walking a priority-ordered list of
//! `(device index, backend)` candidates: the requested index with the
//! platform's native backend first, then with automatic backend
//! selection, then index 0 as a fallback with the same two backends.
//! Each candidate's failure is isolated; exhausting the list is not an
//! error here, the caller degrades to a [`DummySource`](crate::DummySource).

use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{
    ApiBackend, CameraFormat, CameraIndex, FrameFormat as NokhwaFrameFormat, RequestedFormat,
    RequestedFormatType, Resolution as NokhwaResolution,
};
use nokhwa::{Camera, NokhwaError};

use crate::handle::DeviceHandle;
use crate::types::CaptureConfig;

/// One `(index, backend)` pair to try.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub index: u32,
    pub backend: ApiBackend,
}

/// The platform's preferred native backend.
fn native_backend() -> ApiBackend {
    #[cfg(target_os = "windows")]
    {
        ApiBackend::MediaFoundation
    }
    #[cfg(target_os = "macos")]
    {
        ApiBackend::AVFoundation
    }
    #[cfg(target_os = "linux")]
    {
        ApiBackend::Video4Linux
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
    {
        ApiBackend::Auto
    }
}

/// Build the priority-ordered candidate list for a requested index.
pub(crate) fn candidates(device_index: u32) -> Vec<Candidate> {
    let native = native_backend();
    let mut list = vec![
        Candidate {
            index: device_index,
            backend: native,
        },
        Candidate {
            index: device_index,
            backend: ApiBackend::Auto,
        },
    ];
    // Fall back to the first device unless that is what was requested.
    if device_index != 0 {
        list.push(Candidate {
            index: 0,
            backend: native,
        });
        list.push(Candidate {
            index: 0,
            backend: ApiBackend::Auto,
        });
    }
    list
}

/// Try each candidate in order, returning the first handle that opens.
///
/// Returns `None` when every candidate fails; no individual failure is
/// surfaced beyond a log line.
pub(crate) fn open_first(candidates: &[Candidate], config: &CaptureConfig) -> Option<DeviceHandle> {
    for candidate in candidates {
        log::debug!(
            "probing camera {} via {:?}",
            candidate.index,
            candidate.backend
        );
        match try_open(candidate, config) {
            Ok(handle) if handle.is_opened() => {
                log::info!(
                    "opened camera {} via {:?}",
                    candidate.index,
                    candidate.backend
                );
                return Some(handle);
            }
            Ok(_) => {
                // Opened but no live stream; drop releases the partial
                // handle before the next candidate.
                log::debug!(
                    "camera {} via {:?} opened without a stream",
                    candidate.index,
                    candidate.backend
                );
            }
            Err(e) => {
                log::debug!(
                    "camera {} via {:?} failed: {}",
                    candidate.index,
                    candidate.backend,
                    e
                );
            }
        }
    }
    None
}

/// Open one candidate and start its stream.
///
/// A camera that opens but whose stream fails to start is dropped here,
/// releasing the partial handle before the next candidate is tried.
fn try_open(candidate: &Candidate, config: &CaptureConfig) -> Result<DeviceHandle, NokhwaError> {
    let requested = RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(
        CameraFormat::new(
            NokhwaResolution::new(config.width, config.height),
            NokhwaFrameFormat::MJPEG,
            config.fps,
        ),
    ));
    let mut camera = Camera::with_backend(
        CameraIndex::Index(candidate.index),
        requested,
        candidate.backend,
    )?;
    camera.open_stream()?;
    Ok(DeviceHandle::new(camera))
}
