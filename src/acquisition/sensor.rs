//! VL53L8CH sensor frame source
//!
//! Frame source backed by the multizone ranging sensor driver. The
//! register-level protocol is outside this crate: the driver calls here are
//! simulated stand-ins that produce a deterministic synthetic scene, so the
//! rest of the pipeline can be exercised end to end without hardware. A
//! real driver binds by replacing `driver_init`, `start_ranging` and
//! `read_ranging_data`.

use crate::acquisition::source::{FrameSource, SourceError, SourceResult};
use crate::error::Result;
use crate::types::{Frame, ZONE_COUNT};

/// Status code for a zone with a confirmed target
const STATUS_TARGET: u8 = 5;

/// Status code for a target detected at reduced confidence
const STATUS_TARGET_MARGINAL: u8 = 9;

/// Status code for a zone without a detectable target
const STATUS_NO_TARGET: u8 = 255;

/// Width of the simulated target, in zones
const TARGET_SPAN: usize = 8;

/// Nearest distance of the simulated target, in millimetres
const TARGET_BASE_MM: u8 = 40;

/// Background distance reported for empty zones, in millimetres
const BACKGROUND_MM: u8 = 200;

/// Frame source backed by the (simulated) VL53L8CH driver.
///
/// The synthetic scene is a small target sweeping across the zone grid one
/// zone per frame: covered zones report a short distance with a valid
/// status, the leading and trailing edges report the marginal status, and
/// everything else reports no target.
#[derive(Debug, Default)]
pub struct Vl53l8chSource {
    initialized: bool,
    ranging: bool,
    tick: u64,
}

impl Vl53l8chSource {
    /// Create an unopened sensor source
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulated sensor bring-up
    fn driver_init(&mut self) -> Result<()> {
        tracing::info!("Initializing VL53L8CH (simulated driver)");
        self.initialized = true;
        Ok(())
    }

    /// Simulated start of continuous ranging
    fn start_ranging(&mut self) {
        tracing::info!("Starting continuous ranging (simulated driver)");
        self.ranging = true;
    }

    /// Simulated read of the distance and status buffers
    fn read_ranging_data(&mut self) -> Frame {
        let mut distances = [BACKGROUND_MM; ZONE_COUNT];
        let mut statuses = [STATUS_NO_TARGET; ZONE_COUNT];

        let origin = (self.tick as usize) % ZONE_COUNT;
        for offset in 0..TARGET_SPAN {
            let zone = (origin + offset) % ZONE_COUNT;
            distances[zone] = TARGET_BASE_MM.saturating_add(offset as u8);
            statuses[zone] = if offset == 0 || offset == TARGET_SPAN - 1 {
                STATUS_TARGET_MARGINAL
            } else {
                STATUS_TARGET
            };
        }

        self.tick = self.tick.wrapping_add(1);
        Frame::new(distances, statuses)
    }
}

impl FrameSource for Vl53l8chSource {
    fn init(&mut self) -> Result<()> {
        self.driver_init()?;
        self.start_ranging();
        Ok(())
    }

    fn next_frame(&mut self) -> SourceResult<Frame> {
        if !self.initialized || !self.ranging {
            return Err(SourceError::TemporaryNoData(
                "sensor is not ranging".to_string(),
            ));
        }
        Ok(self.read_ranging_data())
    }

    fn describe(&self) -> String {
        "VL53L8CH sensor (simulated driver)".to_string()
    }
}
