// ABOUTME: A single client-submitted log record, trimmed of surrounding whitespace.
// ABOUTME: Rejects records that are empty after trimming.

use crate::store::StoreError;

/// One line of the log. The contents are opaque bytes; only surrounding
/// whitespace is removed, and the result is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record(Vec<u8>);

impl Record {
    /// Build a record from a raw request payload.
    ///
    /// UTF-8 payloads are trimmed of Unicode whitespace, anything else of
    /// ASCII whitespace. Returns `StoreError::EmptyRecord` if nothing is left.
    pub fn parse(raw: &[u8]) -> Result<Self, StoreError> {
        let trimmed = trim_whitespace(raw);
        if trimmed.is_empty() {
            return Err(StoreError::EmptyRecord);
        }
        Ok(Self(trimmed.to_vec()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The record as it is written to disk: its bytes plus a trailing newline.
    pub(crate) fn to_line(&self) -> Vec<u8> {
        let mut line = Vec::with_capacity(self.0.len() + 1);
        line.extend_from_slice(&self.0);
        line.push(b'\n');
        line
    }
}

/// Trim Unicode whitespace from both ends. Invalid UTF-8 in the middle of
/// the payload does not stop valid text at either end from being trimmed.
fn trim_whitespace(raw: &[u8]) -> &[u8] {
    let start = match raw.utf8_chunks().next() {
        Some(chunk) => chunk.valid().len() - chunk.valid().trim_start().len(),
        None => 0,
    };
    let rest = &raw[start..];

    // Only the last chunk can end in valid text; if it ends in invalid
    // bytes there is no trailing whitespace to remove.
    let end = match rest.utf8_chunks().last() {
        Some(chunk) if chunk.invalid().is_empty() => {
            rest.len() - (chunk.valid().len() - chunk.valid().trim_end().len())
        }
        _ => rest.len(),
    };
    &rest[..end]
}
