//! Core data types for the acquisition pipeline
//!
//! This module contains the fundamental data structures shared by the
//! acquisition sources, the validity filter, and the persistence sink.
//!
//! # Main Types
//!
//! - [`Frame`] - One synchronized acquisition across all ranging zones
//! - [`ZoneRecord`] - One persisted measurement for a single zone
//!
//! # Zones
//!
//! The sensor measures an 8x8 grid of angular sub-regions in a single
//! acquisition. A frame carries one distance byte and one status byte per
//! zone, index-aligned, so the zone identifier is simply the index into
//! either buffer.

use serde::{Deserialize, Serialize};

/// Number of ranging zones per acquisition (8x8 grid)
pub const ZONE_COUNT: usize = 64;

/// Length of a hex-encoded zone buffer: two digits per byte, no separators
pub const FRAME_HEX_CHARS: usize = ZONE_COUNT * 2;

/// One synchronized acquisition across all ranging zones.
///
/// The two buffers are always index-aligned: `distances[z]` is meaningless
/// without `statuses[z]`. Frames are built fresh each acquisition cycle and
/// consumed immediately; only per-zone [`ZoneRecord`]s are ever persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Distance reading per zone, in millimetres
    pub distances: [u8; ZONE_COUNT],
    /// Sensor-reported status code per zone
    pub statuses: [u8; ZONE_COUNT],
}

impl Frame {
    /// Create a frame from a pair of index-aligned zone buffers
    pub fn new(distances: [u8; ZONE_COUNT], statuses: [u8; ZONE_COUNT]) -> Self {
        Self {
            distances,
            statuses,
        }
    }

    /// Iterate over `(zone_id, distance_mm, status)` triples in zone order
    pub fn zones(&self) -> impl Iterator<Item = (u8, u8, u8)> + '_ {
        (0..ZONE_COUNT).map(move |zone| (zone as u8, self.distances[zone], self.statuses[zone]))
    }
}

/// One persisted measurement for a single zone.
///
/// The field order matches the column order of the CSV record store:
/// `timestamp_ms, zone_id, distance_mm, status`. All zones of one frame
/// share the same timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRecord {
    /// Acquisition time in Unix milliseconds
    pub timestamp_ms: i64,
    /// Zone index within the frame (0-63)
    pub zone_id: u8,
    /// Distance reading, copied verbatim from the frame
    pub distance_mm: u8,
    /// Status code, copied verbatim from the frame
    pub status: u8,
}
