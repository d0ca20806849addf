//! Frame source abstraction
//!
//! The scheduler is written once against [`FrameSource`]; the sensor
//! driver and the log replayer are its two implementations. Per-cycle
//! failures are recoverable by definition and never abort the pipeline,
//! which is why they get their own error enum instead of
//! [`crate::error::TofLogError`].

use crate::error::Result;
use crate::types::Frame;
use thiserror::Error;

/// Recoverable per-cycle failures reported by a frame source
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The source produced no frame this cycle; the next cycle may succeed
    #[error("no frame available: {0}")]
    TemporaryNoData(String),

    /// A finite source ran out of input; resetting makes it produce again
    #[error("frame source exhausted")]
    EndOfSource,
}

/// Result alias for per-cycle source operations
pub type SourceResult<T> = std::result::Result<T, SourceError>;

/// Unified interface over the two frame producers.
///
/// Implementations must be `Send` so the pipeline can run on its own
/// thread.
#[cfg_attr(test, mockall::automock)]
pub trait FrameSource: Send {
    /// Bring the source up.
    ///
    /// Called once before the first acquisition cycle; a failure here
    /// aborts the pipeline before it starts.
    fn init(&mut self) -> Result<()>;

    /// Produce the next frame
    fn next_frame(&mut self) -> SourceResult<Frame>;

    /// Return the source to its beginning after exhaustion.
    ///
    /// Sources that never exhaust keep the default no-op.
    fn reset(&mut self) -> Result<()> {
        Ok(())
    }

    /// Human-readable description for diagnostics
    fn describe(&self) -> String;
}
