//! Content-derived identifiers for log entries.

use sha1::{Digest, Sha1};

/// Compute the deterministic id of a line
///
/// The id is the lowercase hex SHA-1 of `"{source_file}:{line_number}:{raw_line}"`,
/// where `raw_line` is the line text with its trailing newline removed. It stays
/// the same across runs until the file is renamed or the line moves or changes.
pub fn make_log_id(source_file: &str, line_number: u64, raw_line: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(source_file.as_bytes());
    hasher.update(b":");
    hasher.update(line_number.to_string().as_bytes());
    hasher.update(b":");
    hasher.update(raw_line.as_bytes());
    hex::encode(hasher.finalize())
}
