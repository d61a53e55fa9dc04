//! End-to-end tests for capture sessions.
//!
//! These tests run against whatever the host actually has: on a machine
//! with no cameras they exercise the degrade-to-black-frames path, on a
//! machine with cameras they exercise real capture. Outcomes that depend
//! on hardware presence are skipped on hosts where they are
//! nondeterministic.

use framegrab::{list_devices, CaptureConfig, CaptureError, Capturer};

/// Test that list_devices returns devices (or an empty list) without
/// panicking.
#[test]
fn test_list_devices_reports() {
    match list_devices() {
        Ok(devices) => {
            println!("Found {} camera device(s)", devices.len());
            for device in &devices {
                println!("  {}", device);
            }
        }
        Err(e) => {
            // No usable backend on this host; construction skips
            // validation in that case, so this is not a failure.
            println!("SKIP: device enumeration unavailable: {}", e);
        }
    }
}

/// Construction with an index far beyond any real device count must fail
/// with InvalidDevice when enumeration reports devices to validate against.
#[test]
fn test_invalid_index_rejected_when_enumerable() {
    let devices = match list_devices() {
        Ok(devices) if !devices.is_empty() => devices,
        _ => {
            println!("SKIP: no enumerable devices, validation is deferred");
            return;
        }
    };

    let result = Capturer::new(999);
    match result {
        Err(CaptureError::InvalidDevice {
            requested,
            available,
        }) => {
            assert_eq!(requested, 999);
            assert_eq!(available, devices.len());
        }
        other => panic!("Expected InvalidDevice, got {:?}", other.map(|_| ())),
    }
}

/// Start always succeeds: a real camera if one opens, black frames if not.
/// Every delivered frame has the height x width x 3 RGB layout.
#[test]
fn test_start_always_succeeds_and_frames_are_well_formed() {
    let mut capturer = Capturer::new(0).expect("index 0 should always construct");
    assert!(capturer.start(CaptureConfig::default()));
    assert!(capturer.is_running());

    let frame = capturer.read().expect("first read should deliver a frame");
    assert_eq!(
        frame.data.len(),
        frame.width as usize * frame.height as usize * 3
    );

    capturer.release();
    assert!(capturer.read().is_none());
}

/// On a host with zero enumerable devices, start(960x540@60) degrades to
/// the black-frame source and read returns all-zero 540x960x3 frames.
#[test]
fn test_degrades_to_black_frames_without_hardware() {
    match list_devices() {
        Ok(devices) if !devices.is_empty() => {
            println!("SKIP: {} real camera(s) present", devices.len());
            return;
        }
        _ => {}
    }

    let mut capturer = Capturer::new(0).expect("construction skips validation");
    assert!(capturer.start(CaptureConfig {
        width: 960,
        height: 540,
        fps: 60,
    }));

    for _ in 0..3 {
        let frame = capturer.read().expect("dummy source always delivers");
        assert_eq!((frame.height, frame.width), (540, 960));
        assert_eq!(frame.data.len(), 540 * 960 * 3);
        assert!(frame.data.iter().all(|&b| b == 0));
    }

    // Releasing twice must be a no-op the second time.
    capturer.release();
    capturer.release();
    assert!(capturer.read().is_none());
}

/// The callback fires synchronously, once per successful read, with the
/// same frame read returns.
#[test]
fn test_callback_delivery() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let mut capturer = Capturer::new(0).expect("index 0 should always construct");
    assert!(capturer.start(CaptureConfig::default()));

    let count = Rc::new(RefCell::new(0u32));
    let counter = Rc::clone(&count);
    capturer.set_frame_callback(move |_| *counter.borrow_mut() += 1);

    if capturer.read().is_some() {
        assert_eq!(*count.borrow(), 1);
    } else {
        // A real device may fail a single grab; that must not fire the
        // callback.
        assert_eq!(*count.borrow(), 0);
    }

    capturer.release();
}
