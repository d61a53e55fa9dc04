//! Capture types and data structures.

use std::fmt;
use std::time::Instant;

use thiserror::Error;

/// Information about an available camera device.
#[derive(Debug, Clone)]
pub struct CameraInfo {
    /// Device index for selection
    pub index: u32,
    /// Human-readable device name
    pub name: String,
    /// Device description
    pub description: String,
}

impl fmt::Display for CameraInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} ({})", self.index, self.name, self.description)
    }
}

/// Pixel format of a captured frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameFormat {
    /// RGB format (3 bytes per pixel)
    Rgb,
}

/// A captured camera frame.
///
/// Pixel data is row-major with no padding between rows, so `data` is
/// always exactly `height * width * 3` bytes.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Raw pixel data in RGB format
    pub data: Vec<u8>,
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Pixel format
    pub format: FrameFormat,
    /// Timestamp when frame was captured
    pub timestamp: Instant,
}

impl Frame {
    /// Create an all-zero (black) frame of the given dimensions.
    pub fn black(width: u32, height: u32) -> Self {
        Self {
            data: vec![0; width as usize * height as usize * 3],
            width,
            height,
            format: FrameFormat::Rgb,
            timestamp: Instant::now(),
        }
    }

    /// Get the number of bytes per pixel (3 for RGB).
    pub fn bytes_per_pixel(&self) -> usize {
        match self.format {
            FrameFormat::Rgb => 3,
        }
    }
}

/// Requested capture format.
///
/// Advisory: the underlying device may silently ignore values it cannot
/// honor, and no error is surfaced when it does.
#[derive(Debug, Clone, Copy)]
pub struct CaptureConfig {
    /// Capture width in pixels
    pub width: u32,
    /// Capture height in pixels
    pub height: u32,
    /// Target FPS (actual may vary)
    pub fps: u32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            width: 960,
            height: 540,
            fps: 60,
        }
    }
}

/// Errors that can occur during capture operations.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// Requested device index exceeds the enumerated device count
    #[error("invalid device index {requested}: {available} device(s) available")]
    InvalidDevice { requested: u32, available: usize },
    /// Failed to query capture devices
    #[error("failed to query capture devices: {0}")]
    QueryFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_info_display() {
        let info = CameraInfo {
            index: 0,
            name: "Test Camera".to_string(),
            description: "Built-in".to_string(),
        };
        assert_eq!(format!("{}", info), "[0] Test Camera (Built-in)");
    }

    #[test]
    fn test_black_frame_shape() {
        let frame = Frame::black(4, 3);
        assert_eq!(frame.width, 4);
        assert_eq!(frame.height, 3);
        assert_eq!(frame.data.len(), 4 * 3 * 3);
        assert!(frame.data.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_frame_bytes_per_pixel() {
        let frame = Frame::black(2, 1);
        assert_eq!(frame.bytes_per_pixel(), 3);
    }

    #[test]
    fn test_capture_config_default() {
        let config = CaptureConfig::default();
        assert_eq!(config.width, 960);
        assert_eq!(config.height, 540);
        assert_eq!(config.fps, 60);
    }

    #[test]
    fn test_capture_error_display() {
        let err = CaptureError::InvalidDevice {
            requested: 5,
            available: 2,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("5"));
        assert!(msg.contains("2 device(s)"));

        assert_eq!(
            format!("{}", CaptureError::QueryFailed("test".to_string())),
            "failed to query capture devices: test"
        );
    }
}
