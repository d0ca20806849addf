//! Common test utilities and helpers

#![allow(dead_code)] // Test utilities may not all be used in every test file

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::atomic::Ordering;
use std::time::Duration;

use toflog_rs::codec::encode_hex;
use toflog_rs::trace::{DISTANCE_MARKER, STATUS_MARKER};
use toflog_rs::types::{Frame, ZONE_COUNT};
use toflog_rs::AcquisitionScheduler;

/// Build a frame with uniform distances and the given statuses
pub fn frame_with_statuses(distance: u8, statuses: [u8; ZONE_COUNT]) -> Frame {
    Frame::new([distance; ZONE_COUNT], statuses)
}

/// Render a frame as the two marker-tagged lines a device monitor captures
pub fn frame_to_log_lines(frame: &Frame) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", DISTANCE_MARKER, encode_hex(&frame.distances));
    let _ = writeln!(out, "{} {}", STATUS_MARKER, encode_hex(&frame.statuses));
    out
}

/// Write a replay log containing the given frames into `dir`
pub fn write_replay_log(dir: &Path, name: &str, frames: &[Frame]) -> PathBuf {
    let mut content = String::from("device boot banner\n");
    for frame in frames {
        content.push_str(&frame_to_log_lines(frame));
    }
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Read the persisted CSV as lines
pub fn read_csv_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

/// Run a scheduler on its own thread for `duration`, then stop and join
pub fn run_pipeline_for(mut scheduler: AcquisitionScheduler, duration: Duration) {
    let stop = scheduler.stop_handle();
    let handle = std::thread::spawn(move || scheduler.run());
    std::thread::sleep(duration);
    stop.store(false, Ordering::SeqCst);
    handle.join().unwrap().unwrap();
}
