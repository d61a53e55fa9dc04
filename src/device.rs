//! Camera device enumeration.

use nokhwa::query;
use nokhwa::utils::ApiBackend;

use crate::types::{CameraInfo, CaptureError};

/// List all available camera devices on the system.
///
/// Returns a vector of `CameraInfo` structs, or an error if querying fails.
/// If no cameras are found, returns an empty vector (not an error).
pub fn list_devices() -> Result<Vec<CameraInfo>, CaptureError> {
    let devices = query(ApiBackend::Auto).map_err(|e| CaptureError::QueryFailed(e.to_string()))?;

    Ok(devices
        .into_iter()
        .map(|d| CameraInfo {
            index: d.index().as_index().unwrap_or(0),
            name: d.human_name(),
            description: d.description().to_string(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_devices_does_not_panic() {
        // May fail on hosts without a usable backend, but must not panic
        // and must return an empty list rather than an error when no
        // cameras are present.
        let _ = list_devices();
    }
}
