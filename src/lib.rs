//! Webcam capture with ordered backend fallback.
//!
//! This crate opens a platform video capture device by probing a
//! priority-ordered list of `(device index, backend)` candidates, and
//! degrades to a synthetic black-frame source when no physical device
//! can be opened, so downstream consumers expecting a continuous frame
//! stream keep running on hardware-less hosts.
//!
//! - Device enumeration via [`list_devices`]
//! - Capture sessions via [`Capturer`]
//! - Configuration via [`CaptureConfig`]
//!
//! ```no_run
//! use framegrab::{CaptureConfig, Capturer};
//!
//! let mut capturer = Capturer::new(0)?;
//! capturer.start(CaptureConfig::default());
//! if let Some(frame) = capturer.read() {
//!     println!("{}x{} frame, {} bytes", frame.width, frame.height, frame.data.len());
//! }
//! capturer.release();
//! # Ok::<(), framegrab::CaptureError>(())
//! ```

mod capturer;
mod device;
mod dummy;
mod handle;
mod probe;
mod types;

pub use capturer::{Capturer, FrameCallback};
pub use device::list_devices;
pub use dummy::DummySource;
pub use types::{CameraInfo, CaptureConfig, CaptureError, Frame, FrameFormat};
