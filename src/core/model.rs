//! Section model
//!
//! A section is one header line of the reference document together with the
//! text that follows it up to the next header.

use serde::Serialize;

/// A header-delimited slice of a markdown document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Header line as found in the source, trimmed, markers included
    title: String,

    /// Body text between this header and the next, trimmed
    content: String,
}

impl Section {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
