//! Frame acquisition: sources, scheduling, and the sensor task entry point
//!
//! # Architecture
//!
//! - [`FrameSource`] - capability trait over the two frame producers
//! - [`Vl53l8chSource`] - the (simulated) multizone sensor driver
//! - [`ReplayLogSource`] - offline replay of captured trace logs
//! - [`AcquisitionScheduler`] - the wait/acquire/filter/persist loop
//!
//! The scheduler is written once against the trait; which producer backs it
//! is decided at the entry point. [`spawn_sensor_task`] mirrors a firmware
//! task spawn for sensor mode, while replay mode runs the scheduler in the
//! foreground so open failures can surface as a process exit status.
//!
//! # Example
//!
//! ```ignore
//! use toflog_rs::acquisition::{self, ReplayLogSource};
//! use toflog_rs::config::AppConfig;
//!
//! let config = AppConfig::default();
//! let source = ReplayLogSource::open("device-monitor.log")?;
//! let mut scheduler = acquisition::build_scheduler(&config, Box::new(source));
//! scheduler.run()?; // loops until the stop handle is cleared
//! ```

pub mod replay;
pub mod scheduler;
pub mod sensor;
pub mod source;

pub use replay::ReplayLogSource;
pub use scheduler::AcquisitionScheduler;
pub use sensor::Vl53l8chSource;
pub use source::{FrameSource, SourceError, SourceResult};

use crate::config::AppConfig;
use crate::storage::{CsvSink, StatusFilter};
use std::thread::JoinHandle;

/// Build a scheduler from configuration and a frame source
pub fn build_scheduler(config: &AppConfig, source: Box<dyn FrameSource>) -> AcquisitionScheduler {
    let filter = StatusFilter::new(config.filter.accepted_statuses.clone());
    let sink = CsvSink::new(config.storage.csv_path.clone());
    AcquisitionScheduler::new(source, filter, sink, config.acquisition.poll_interval())
}

/// Start the sensor-mode pipeline on its own thread.
///
/// Nothing is returned to the caller beyond the join handle; startup
/// failures are logged, not propagated.
pub fn spawn_sensor_task(config: AppConfig) -> JoinHandle<()> {
    std::thread::spawn(move || {
        let mut scheduler = build_scheduler(&config, Box::new(Vl53l8chSource::new()));
        if let Err(e) = scheduler.run() {
            tracing::error!("Sensor acquisition task failed to start: {}", e);
        }
    })
}
