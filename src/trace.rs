//! Raw-frame hex traces for the diagnostics stream
//!
//! Every acquired frame is mirrored to the console as two marker-tagged
//! lines, one for the distance buffer and one for the status buffer. The
//! same marker strings tag the lines of a captured device-monitor log,
//! which is exactly what the replay source scans for, so emitted traces
//! round-trip through replay.
//!
//! Tracing is a diagnostic aid only: it carries no state and no failure
//! mode, and the pipeline is correct without it.

use crate::codec::encode_hex;
use crate::types::Frame;
use std::io::{self, Write};

/// Marker tagging a distance-buffer trace line
pub const DISTANCE_MARKER: &str = "TOF: HEX DATA:";

/// Marker tagging a status-buffer trace line
pub const STATUS_MARKER: &str = "TOF: TARGET STATUS:";

/// Render one labelled trace line: label, space, uppercase hex, newline
pub fn write_hex_trace<W: Write>(out: &mut W, label: &str, bytes: &[u8]) -> io::Result<()> {
    writeln!(out, "{} {}", label, encode_hex(bytes))
}

/// Emit the distance and status trace lines for a frame to stdout.
///
/// Write errors are swallowed; a broken console never affects acquisition.
pub fn emit_frame(frame: &Frame) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let _ = write_hex_trace(&mut out, DISTANCE_MARKER, &frame.distances);
    let _ = write_hex_trace(&mut out, STATUS_MARKER, &frame.statuses);
}
