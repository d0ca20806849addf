//! Hex codec for raw frame trace payloads
//!
//! Zone buffers travel through the debug trace as contiguous hexadecimal
//! strings, one 128-character line per 64-byte buffer. This module decodes
//! those payloads back into byte buffers and renders buffers as uppercase
//! hex for the trace emitter.
//!
//! Decoding is strict: after trimming the line ending, the payload must be
//! exactly [`FRAME_HEX_CHARS`] hex digits, and a single bad character
//! rejects the whole buffer. Callers treat a rejected buffer as a skipped
//! candidate, never as partial data.

use crate::types::{FRAME_HEX_CHARS, ZONE_COUNT};
use std::fmt::Write as _;
use thiserror::Error;

/// Errors produced when a hex payload cannot be decoded
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The trimmed payload is not exactly two digits per zone
    #[error("hex payload length mismatch: expected {expected} characters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A character outside `[0-9a-fA-F]` appeared in the payload
    #[error("invalid hex digit {found:?} at offset {offset}")]
    InvalidDigit { found: char, offset: usize },
}

/// Decode a 128-character hex payload into a 64-byte zone buffer.
///
/// At most one trailing line feed (or a lone carriage return) and, after
/// that, at most one trailing carriage return are trimmed, so both LF and
/// CRLF captures decode. Each byte is decoded high nibble first.
pub fn decode_frame_hex(text: &str) -> Result<[u8; ZONE_COUNT], DecodeError> {
    let trimmed = text
        .strip_suffix('\n')
        .or_else(|| text.strip_suffix('\r'))
        .unwrap_or(text);
    let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);

    if trimmed.len() != FRAME_HEX_CHARS {
        return Err(DecodeError::LengthMismatch {
            expected: FRAME_HEX_CHARS,
            actual: trimmed.len(),
        });
    }

    let digits = trimmed.as_bytes();
    let mut bytes = [0u8; ZONE_COUNT];
    for (i, byte) in bytes.iter_mut().enumerate() {
        let high = hex_value(digits[2 * i]).ok_or(DecodeError::InvalidDigit {
            found: digits[2 * i] as char,
            offset: 2 * i,
        })?;
        let low = hex_value(digits[2 * i + 1]).ok_or(DecodeError::InvalidDigit {
            found: digits[2 * i + 1] as char,
            offset: 2 * i + 1,
        })?;
        *byte = (high << 4) | low;
    }

    Ok(bytes)
}

/// Render bytes as two uppercase hex digits each, no separators
pub fn encode_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let _ = write!(out, "{byte:02X}");
    }
    out
}

fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}
