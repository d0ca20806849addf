//! Filtering and persistence of zone records
//!
//! The storage side of the pipeline is two small, independent pieces:
//!
//! - [`StatusFilter`] - decides, per zone, whether a reading is persisted
//! - [`CsvSink`] - appends accepted records to the header-once CSV store
//!
//! The filter owns the accepted-status policy (injected from
//! configuration); the sink owns the on-disk format and the header-once
//! invariant. Neither holds an open file handle between calls.

pub mod csv_sink;
pub mod filter;

pub use csv_sink::CsvSink;
pub use filter::StatusFilter;
