//! Line-oriented file reading
//!
//! `\n`, `\r\n` and a lone `\r` all end a line; each terminator comes back
//! as `\n`. Invalid UTF-8 is replaced rather than rejected.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Open a file for buffered line reading
pub fn open_buffered(path: &Path) -> io::Result<BufReader<File>> {
    File::open(path).map(BufReader::new)
}

/// Rewrite `\r\n` and lone `\r` terminators as `\n`
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Iterator over the lines of a reader, terminators normalized to `\n`
pub struct LossyLines<R> {
    reader: R,
    buf: Vec<u8>,
    /// Previous line ended in `\r`; a `\n` right after it belongs to that line
    skip_lf: bool,
}

/// Read `reader` line by line, decoding each line lossily
pub fn lossy_lines<R: BufRead>(reader: R) -> LossyLines<R> {
    LossyLines {
        reader,
        buf: Vec::new(),
        skip_lf: false,
    }
}

impl<R: BufRead> LossyLines<R> {
    /// Fill `buf` with the next line; returns false at end of input
    fn read_line(&mut self) -> io::Result<bool> {
        self.buf.clear();
        loop {
            let (consumed, line_done) = {
                let available = match self.reader.fill_buf() {
                    Ok(bytes) => bytes,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e),
                };

                if available.is_empty() {
                    return Ok(!self.buf.is_empty());
                }

                if self.skip_lf {
                    self.skip_lf = false;
                    if available[0] == b'\n' {
                        (1, false)
                    } else {
                        continue;
                    }
                } else {
                    match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                        Some(i) => {
                            self.buf.extend_from_slice(&available[..i]);
                            self.buf.push(b'\n');
                            self.skip_lf = available[i] == b'\r';
                            (i + 1, true)
                        }
                        None => {
                            self.buf.extend_from_slice(available);
                            (available.len(), false)
                        }
                    }
                }
            };

            self.reader.consume(consumed);
            if line_done {
                return Ok(true);
            }
        }
    }
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read_line() {
            Ok(true) => Some(Ok(String::from_utf8_lossy(&self.buf).into_owned())),
            Ok(false) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
