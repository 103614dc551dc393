//! Sequential, lazily opened line reader over a list of log files.

use crate::error::Result;
use crate::parser::{parse_line, ParsedLine};
use crate::source::files::list_log_files;
use log::{debug, trace, warn};
use memchr::memchr2;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Yields every line of every file, classified, in scan order
///
/// Files are opened one at a time, just before their first line is needed, and
/// closed as soon as their last line has been read or the source is dropped.
/// A file that cannot be opened is skipped with a warning.
pub struct LineSource {
    pending: std::vec::IntoIter<PathBuf>,
    current: Option<OpenFile>,
}

impl LineSource {
    /// Scan the files in `dir` matching `pattern`
    pub fn open(dir: &Path, pattern: &str) -> Result<Self> {
        Ok(Self::from_paths(list_log_files(dir, pattern)?))
    }

    /// Scan an explicit, already ordered list of files
    pub fn from_paths(paths: Vec<PathBuf>) -> Self {
        Self {
            pending: paths.into_iter(),
            current: None,
        }
    }
}

impl Iterator for LineSource {
    type Item = ParsedLine;

    fn next(&mut self) -> Option<ParsedLine> {
        loop {
            if let Some(file) = self.current.as_mut() {
                if let Some(parsed) = file.next_line() {
                    return Some(parsed);
                }
                // Dropping the reader releases the handle before the next open
                self.current = None;
            }

            let path = self.pending.next()?;
            self.current = OpenFile::open(&path);
        }
    }
}

/// A log file being read line by line
///
/// `\n`, `\r\n` and a lone `\r` each end a line.
struct OpenFile {
    name: String,
    reader: BufReader<File>,
    line_number: u64,
    buf: Vec<u8>,
    /// Last line ended in `\r`, so a leading `\n` belongs to it
    after_cr: bool,
}

impl OpenFile {
    fn open(path: &Path) -> Option<Self> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                warn!("skipping {}: {e}", path.display());
                return None;
            }
        };
        debug!("scanning {}", path.display());

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Some(Self {
            name,
            reader: BufReader::new(file),
            line_number: 0,
            buf: Vec::new(),
            after_cr: false,
        })
    }

    /// Read the next line into `buf` without its terminator
    ///
    /// Returns `false` at end of file.
    fn read_line(&mut self) -> io::Result<bool> {
        self.buf.clear();
        let mut read_any = false;
        loop {
            let chunk = self.reader.fill_buf()?;
            if chunk.is_empty() {
                return Ok(read_any);
            }
            if self.after_cr {
                self.after_cr = false;
                if chunk[0] == b'\n' {
                    self.reader.consume(1);
                    continue;
                }
            }
            match memchr2(b'\n', b'\r', chunk) {
                Some(end) => {
                    self.after_cr = chunk[end] == b'\r';
                    self.buf.extend_from_slice(&chunk[..end]);
                    self.reader.consume(end + 1);
                    return Ok(true);
                }
                None => {
                    let len = chunk.len();
                    self.buf.extend_from_slice(chunk);
                    self.reader.consume(len);
                    read_any = true;
                }
            }
        }
    }

    fn next_line(&mut self) -> Option<ParsedLine> {
        match self.read_line() {
            Ok(false) => None,
            Ok(true) => {
                self.line_number += 1;
                let text = String::from_utf8_lossy(&self.buf);
                let parsed = parse_line(&text, &self.name, self.line_number);
                if let ParsedLine::Invalid(reason) = &parsed {
                    trace!("{}:{}: {reason}", self.name, self.line_number);
                }
                Some(parsed)
            }
            Err(e) => {
                warn!(
                    "stopped reading {} after line {}: {e}",
                    self.name, self.line_number
                );
                None
            }
        }
    }
}
