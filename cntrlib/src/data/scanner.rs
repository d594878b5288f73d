//! Line scanning for a single file.
//!
//! Files are read as raw bytes and split on `\n`. The last line counts even
//! without a terminator. A line is empty when every byte in it is C-locale
//! whitespace (space, `\t`, `\n`, `\v`, `\f`, `\r`); otherwise it is an
//! actual line. Sizes are the byte lengths of the lines, terminators
//! included, so they add up to the file size.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::CntrError;
use crate::Result;

use super::stats::LineStats;

/// Reads a source line by line and accumulates [`LineStats`].
pub struct Scanner<T: Read> {
    reader: BufReader<T>,
    line: Vec<u8>,
    stats: LineStats,
}

impl Scanner<File> {
    /// Open a file for scanning.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| CntrError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self::from_reader(file))
    }
}

impl<T: Read> Scanner<T> {
    pub fn from_reader(reader: T) -> Self {
        Self {
            reader: BufReader::new(reader),
            line: Vec::new(),
            stats: LineStats::new(),
        }
    }

    /// Read to the end and return the totals.
    pub fn scan(mut self) -> std::io::Result<LineStats> {
        loop {
            self.line.clear();
            let read = self.reader.read_until(b'\n', &mut self.line)?;
            if read == 0 {
                break;
            }
            self.stats.push_line(read as u64, is_blank(&self.line));
        }
        Ok(self.stats)
    }
}

/// Whether a line holds nothing but whitespace. Zero-length lines are blank.
pub fn is_blank(line: &[u8]) -> bool {
    line.iter()
        .all(|&b| matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r'))
}

/// Scan the file at `path`.
///
/// Fails with [`CntrError::FileRead`] if the file cannot be opened or a read
/// fails part way through; no partial totals are returned in that case.
pub fn scan_file(path: impl AsRef<Path>) -> Result<LineStats> {
    let path = path.as_ref();
    Scanner::open(path)?
        .scan()
        .map_err(|e| CntrError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Scan any reader.
pub fn scan_reader(reader: impl Read) -> std::io::Result<LineStats> {
    Scanner::from_reader(reader).scan()
}

/// Scan in-memory text.
///
/// # Example
///
/// ```rust
/// use cntrlib::scan_str;
///
/// let stats = scan_str("int main(void)\n{\n\n    return 0;\n}");
/// assert_eq!(stats.total_lines, 5);
/// assert_eq!(stats.actual_lines, 4);
/// assert_eq!(stats.empty_lines, 1);
/// ```
pub fn scan_str(source: &str) -> LineStats {
    let mut stats = LineStats::new();
    for line in source.as_bytes().split_inclusive(|b| *b == b'\n') {
        stats.push_line(line.len() as u64, is_blank(line));
    }
    stats
}
