//! The acquisition loop
//!
//! One logical task owns the whole pipeline: wait a fixed interval, request
//! a frame, mirror it to the trace stream, filter it, persist the accepted
//! zones. Cycles are strictly sequential; a frame is fully traced, filtered
//! and persisted (or abandoned) before the next wait begins.
//!
//! Startup is the only place a failure can escape: the record store header
//! and the source must come up before the first cycle. After that, every
//! failure is reduced to a diagnostic plus a recovery action - skip the
//! cycle, rewind the source, or drop the cycle's records.

use crate::acquisition::source::{FrameSource, SourceError};
use crate::error::Result;
use crate::storage::{CsvSink, StatusFilter};
use crate::trace;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Orchestrates wait -> acquire -> trace -> filter -> persist cycles
pub struct AcquisitionScheduler {
    source: Box<dyn FrameSource>,
    filter: StatusFilter,
    sink: CsvSink,
    poll_interval: Duration,
    running: Arc<AtomicBool>,
}

impl AcquisitionScheduler {
    /// Create a scheduler over a frame source, filter and sink
    pub fn new(
        source: Box<dyn FrameSource>,
        filter: StatusFilter,
        sink: CsvSink,
        poll_interval: Duration,
    ) -> Self {
        Self {
            source,
            filter,
            sink,
            poll_interval,
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Cooperative stop flag.
    ///
    /// Clearing it ends the loop after the cycle in flight; the loop
    /// otherwise runs for the lifetime of the task.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        self.running.clone()
    }

    /// Run the pipeline until the stop flag is cleared.
    ///
    /// The record store header is ensured and the source initialized before
    /// the first cycle; a failure in either returns without entering the
    /// loop. Nothing else escapes this function.
    pub fn run(&mut self) -> Result<()> {
        self.sink.ensure_header()?;
        self.source.init()?;
        tracing::info!(
            "Acquisition started: {} -> {} every {:?}",
            self.source.describe(),
            self.sink.path().display(),
            self.poll_interval
        );

        while self.running.load(Ordering::SeqCst) {
            std::thread::sleep(self.poll_interval);
            self.cycle();
        }

        tracing::info!("Acquisition stopped");
        Ok(())
    }

    /// One acquisition cycle
    fn cycle(&mut self) {
        match self.source.next_frame() {
            Ok(frame) => {
                trace::emit_frame(&frame);
                let timestamp_ms = chrono::Utc::now().timestamp_millis();
                let records = self.filter.select(&frame, timestamp_ms);
                if records.is_empty() {
                    tracing::debug!("Frame at {} ms has no valid zones", timestamp_ms);
                } else if let Err(e) = self.sink.append(&records) {
                    tracing::warn!(
                        "Dropping {} records for this cycle: {}",
                        records.len(),
                        e
                    );
                } else {
                    tracing::debug!(
                        "Persisted {} zone records at {} ms",
                        records.len(),
                        timestamp_ms
                    );
                }
            }
            Err(SourceError::EndOfSource) => {
                tracing::info!("Frame source exhausted; rewinding for continuous replay");
                if let Err(e) = self.source.reset() {
                    tracing::warn!("Failed to rewind frame source: {}", e);
                }
            }
            Err(SourceError::TemporaryNoData(reason)) => {
                tracing::warn!("No frame this cycle: {}", reason);
            }
        }
    }
}
