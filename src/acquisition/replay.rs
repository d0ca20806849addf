//! Log replay frame source
//!
//! Reconstructs frames from a captured device-monitor log so the whole
//! pipeline can run offline. A frame is a pair of consecutive marker-tagged
//! lines: the distance trace immediately followed by the status trace.
//! Malformed candidates are skipped and scanning resumes; exhausting the
//! file reports [`SourceError::EndOfSource`] so the scheduler can rewind
//! for endless replay.
//!
//! The file cursor is owned by the instance, not shared process state, so
//! independent replay sources can coexist (each test gets its own).

use crate::acquisition::source::{FrameSource, SourceError, SourceResult};
use crate::codec::decode_frame_hex;
use crate::error::{Result, ResultExt};
use crate::trace::{DISTANCE_MARKER, STATUS_MARKER};
use crate::types::{Frame, ZONE_COUNT};
use std::fs::File;
use std::io::{BufRead, BufReader, Seek};
use std::path::{Path, PathBuf};

/// Frame source that replays a captured trace log from disk
pub struct ReplayLogSource {
    path: PathBuf,
    reader: BufReader<File>,
}

impl ReplayLogSource {
    /// Open a replay source over the given log file
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path)
            .with_context(|| format!("Failed to open replay log {}", path.display()))?;

        Ok(Self {
            path,
            reader: BufReader::new(file),
        })
    }

    /// The backing log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read one line; `None` at end of file
    fn read_line(&mut self) -> SourceResult<Option<String>> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(line)),
            Err(e) => Err(SourceError::TemporaryNoData(format!(
                "replay read failed: {e}"
            ))),
        }
    }
}

/// Extract the payload following `marker`, skipping leading spaces
fn payload_after<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    line.find(marker)
        .map(|pos| line[pos + marker.len()..].trim_start_matches(' '))
}

/// Decode the hex buffer tagged by `marker`, or `None` for a bad candidate
fn decode_tagged_buffer(line: &str, marker: &str) -> Option<[u8; ZONE_COUNT]> {
    let payload = payload_after(line, marker)?;
    match decode_frame_hex(payload) {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            tracing::debug!("Skipping malformed {:?} line: {}", marker, e);
            None
        }
    }
}

impl FrameSource for ReplayLogSource {
    fn init(&mut self) -> Result<()> {
        tracing::info!("Replaying frames from {}", self.path.display());
        Ok(())
    }

    fn next_frame(&mut self) -> SourceResult<Frame> {
        while let Some(line) = self.read_line()? {
            let Some(distances) = decode_tagged_buffer(&line, DISTANCE_MARKER) else {
                continue;
            };

            // The status trace must be the immediately following line. A
            // missing or malformed one drops this candidate; scanning
            // resumes at the line after it, which can lose a pair when
            // markers are missing (accepted limitation of the log format).
            let Some(status_line) = self.read_line()? else {
                return Err(SourceError::EndOfSource);
            };
            let Some(statuses) = decode_tagged_buffer(&status_line, STATUS_MARKER) else {
                continue;
            };

            return Ok(Frame::new(distances, statuses));
        }

        Err(SourceError::EndOfSource)
    }

    fn reset(&mut self) -> Result<()> {
        self.reader.rewind()?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("replay log {}", self.path.display())
    }
}
