//! Synthetic black-frame source used when no real camera can be opened.

use crate::types::{CaptureConfig, Frame};

/// A camera stand-in that produces all-zero frames indefinitely.
///
/// Satisfies the same contract as a real device handle so downstream
/// consumers keep receiving frames when hardware is absent. None of its
/// operations can fail.
#[derive(Debug)]
pub struct DummySource {
    width: u32,
    height: u32,
    open: bool,
}

impl DummySource {
    /// Create a dummy source producing frames of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            open: true,
        }
    }

    /// Whether the source is open. True until `release` is called.
    pub fn is_opened(&self) -> bool {
        self.open
    }

    /// Produce a newly allocated black frame.
    pub fn read(&mut self) -> Frame {
        Frame::black(self.width, self.height)
    }

    /// Accept and ignore a requested format, reporting success.
    pub fn configure(&mut self, _config: &CaptureConfig) -> bool {
        true
    }

    /// Mark the source closed.
    pub fn release(&mut self) {
        self.open = false;
    }
}
