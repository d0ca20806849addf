//! Zone validity filtering
//!
//! A zone's reading is persisted only when its status code is a member of
//! the accepted set. The set is injected from configuration rather than
//! hard-coded; `{5, 9}` are the sensor's "valid target detected" codes and
//! form the default.

use crate::config::DEFAULT_ACCEPTED_STATUSES;
use crate::types::{Frame, ZoneRecord};

/// Selects which zones of a frame become persisted records
#[derive(Debug, Clone)]
pub struct StatusFilter {
    accepted: Vec<u8>,
}

impl StatusFilter {
    /// Create a filter with the given accepted-status set
    pub fn new(accepted: impl Into<Vec<u8>>) -> Self {
        Self {
            accepted: accepted.into(),
        }
    }

    /// The accepted-status set
    pub fn accepted(&self) -> &[u8] {
        &self.accepted
    }

    /// Whether a status code is accepted for persistence
    pub fn accepts(&self, status: u8) -> bool {
        self.accepted.contains(&status)
    }

    /// Build records for every accepted zone of a frame.
    ///
    /// Zones are judged independently, so a frame yields anywhere between
    /// zero and all of its zones. Every record carries the same timestamp.
    pub fn select(&self, frame: &Frame, timestamp_ms: i64) -> Vec<ZoneRecord> {
        frame
            .zones()
            .filter(|&(_, _, status)| self.accepts(status))
            .map(|(zone_id, distance_mm, status)| ZoneRecord {
                timestamp_ms,
                zone_id,
                distance_mm,
                status,
            })
            .collect()
    }
}

impl Default for StatusFilter {
    fn default() -> Self {
        Self::new(DEFAULT_ACCEPTED_STATUSES)
    }
}
