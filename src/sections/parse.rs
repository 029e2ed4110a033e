//! Section parsing module
//!
//! Splits a markdown document into sections at header lines:
//! # Title
//! ...content...
//! ## Next title
//!
//! Every header depth starts a new section; there is no nesting.

use std::io::{self, BufRead};

use crate::core::file_reader::{lossy_lines, normalize_newlines};
use crate::core::model::Section;

/// Character that opens a header line
pub const HEADER_MARKER: char = '#';

/// Check whether a line opens a new section
pub fn is_header_line(line: &str) -> bool {
    line.trim().starts_with(HEADER_MARKER)
}

/// Accumulates lines and emits a section each time the next header arrives
#[derive(Debug, Default)]
struct SectionBuilder {
    sections: Vec<Section>,
    current_title: Option<String>,
    buffer: String,
}

impl SectionBuilder {
    fn push_line(&mut self, line: &str) {
        if is_header_line(line) {
            self.flush();
            self.current_title = Some(line.trim().to_string());
        } else if self.current_title.is_some() {
            self.buffer.push_str(line);
        }
        // lines before the first header belong to no section
    }

    fn flush(&mut self) {
        if let Some(title) = self.current_title.take() {
            self.sections.push(Section::new(title, self.buffer.trim()));
        }
        self.buffer.clear();
    }

    fn finish(mut self) -> Vec<Section> {
        self.flush();
        self.sections
    }
}

/// Parse sections from a content string
pub fn parse_content(content: &str) -> Vec<Section> {
    let mut builder = SectionBuilder::default();
    for line in normalize_newlines(content).split_inclusive('\n') {
        builder.push_line(line);
    }
    builder.finish()
}

/// Parse sections from a buffered reader
pub fn parse_reader<R: BufRead>(reader: R) -> io::Result<Vec<Section>> {
    let mut builder = SectionBuilder::default();
    for line in lossy_lines(reader) {
        builder.push_line(&line?);
    }
    Ok(builder.finish())
}
