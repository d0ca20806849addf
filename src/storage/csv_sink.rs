//! Append-only CSV record store
//!
//! Accepted zone records land in a single CSV file whose column header is
//! written exactly once for the lifetime of the file, no matter how often
//! the pipeline restarts against it. Every append opens, writes, flushes
//! and closes its own handle, so a crash can lose at most the records of
//! one in-flight cycle.

use crate::error::Result;
use crate::types::ZoneRecord;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

/// Column header of the record store
pub const CSV_HEADER: [&str; 4] = ["timestamp_ms", "zone_id", "distance_mm", "status"];

/// Append-only sink for zone records
#[derive(Debug, Clone)]
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    /// Create a sink targeting the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The persistence target
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the record store with its header, unless it already holds data.
    ///
    /// Called once before the first acquisition cycle. An existing non-empty
    /// file is left untouched, so restarts never produce a second header.
    pub fn ensure_header(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let has_data = fs::metadata(&self.path).map(|m| m.len() > 0).unwrap_or(false);
        if has_data {
            return Ok(());
        }

        let mut writer = csv::Writer::from_writer(File::create(&self.path)?);
        writer.write_record(CSV_HEADER)?;
        writer.flush()?;
        Ok(())
    }

    /// Append records to the store.
    ///
    /// The handle is scoped to this call; records are flushed before it
    /// returns. Never writes a header.
    pub fn append(&self, records: &[ZoneRecord]) -> Result<()> {
        if records.is_empty() {
            return Ok(());
        }

        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(timestamp_ms: i64, zone_id: u8) -> ZoneRecord {
        ZoneRecord {
            timestamp_ms,
            zone_id,
            distance_mm: 100,
            status: 5,
        }
    }

    fn read_lines(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_header_written_for_new_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = CsvSink::new(dir.path().join("tof_log.csv"));

        sink.ensure_header().unwrap();

        assert_eq!(
            read_lines(sink.path()),
            vec!["timestamp_ms,zone_id,distance_mm,status"]
        );
    }

    #[test]
    fn test_header_written_exactly_once_across_restarts() {
        let dir = tempfile::tempdir().unwrap();
        let sink = CsvSink::new(dir.path().join("tof_log.csv"));

        sink.ensure_header().unwrap();
        sink.append(&[record(1, 0)]).unwrap();
        // Second run against the same target.
        sink.ensure_header().unwrap();
        sink.append(&[record(2, 1)]).unwrap();

        let lines = read_lines(sink.path());
        let headers = lines
            .iter()
            .filter(|l| l.starts_with("timestamp_ms"))
            .count();
        assert_eq!(headers, 1);
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_header_rewritten_for_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tof_log.csv");
        File::create(&path).unwrap();

        let sink = CsvSink::new(&path);
        sink.ensure_header().unwrap();

        assert_eq!(
            read_lines(&path),
            vec!["timestamp_ms,zone_id,distance_mm,status"]
        );
    }

    #[test]
    fn test_append_is_line_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let sink = CsvSink::new(dir.path().join("tof_log.csv"));

        sink.ensure_header().unwrap();
        sink.append(&[record(10, 4), record(10, 5)]).unwrap();

        let lines = read_lines(sink.path());
        assert_eq!(lines[1], "10,4,100,5");
        assert_eq!(lines[2], "10,5,100,5");
    }

    #[test]
    fn test_append_empty_slice_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let sink = CsvSink::new(dir.path().join("tof_log.csv"));

        sink.append(&[]).unwrap();
        assert!(!sink.path().exists());
    }

    #[test]
    fn test_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let sink = CsvSink::new(dir.path().join("logs").join("tof_log.csv"));

        sink.ensure_header().unwrap();
        assert!(sink.path().exists());
    }

    #[test]
    fn test_append_to_unwritable_target_fails() {
        let dir = tempfile::tempdir().unwrap();
        // The target is a directory, so opening it for append must fail.
        let sink = CsvSink::new(dir.path());
        assert!(sink.append(&[record(1, 0)]).is_err());
    }
}
