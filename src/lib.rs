//! # ToF Log: multi-zone ranging acquisition pipeline
//!
//! Periodically acquires 8x8-zone frames from a VL53L8CH time-of-flight
//! sensor - or replays them from a captured device-monitor log - filters
//! each frame down to the zones reporting a valid target status, and
//! appends the survivors to a durable CSV record store.
//!
//! ## Architecture
//!
//! - **Acquisition**: the [`acquisition::FrameSource`] trait with a
//!   sensor-driver variant and a log-replay variant, orchestrated by
//!   [`acquisition::AcquisitionScheduler`] on a fixed 200 ms cadence
//! - **Codec**: strict hex decoding of captured trace payloads
//! - **Storage**: a configurable status filter feeding an append-only,
//!   header-once CSV sink
//! - **Trace**: a marker-tagged hex mirror of every acquired frame, in the
//!   same format the replay source consumes
//!
//! ## Failure policy
//!
//! Only initialization failures (source cannot open, record store cannot be
//! created) abort the pipeline. Everything after startup - a missed read, a
//! malformed log entry, an exhausted replay file, a failed append - is
//! logged and recovered in place, and the loop continues.
//!
//! ## Example
//!
//! ```ignore
//! use toflog_rs::{acquisition, config::AppConfig, ReplayLogSource};
//!
//! let config = AppConfig::default();
//! let source = ReplayLogSource::open("device-monitor.log")?;
//! let mut scheduler = acquisition::build_scheduler(&config, Box::new(source));
//! scheduler.run()?; // loops until the stop handle is cleared
//! ```

pub mod acquisition;
pub mod codec;
pub mod config;
pub mod error;
pub mod storage;
pub mod trace;
pub mod types;

// Re-export commonly used types
pub use acquisition::{
    AcquisitionScheduler, FrameSource, ReplayLogSource, SourceError, Vl53l8chSource,
};
pub use codec::{decode_frame_hex, encode_hex, DecodeError};
pub use config::AppConfig;
pub use error::{Result, TofLogError};
pub use storage::{CsvSink, StatusFilter};
pub use types::{Frame, ZoneRecord, ZONE_COUNT};
