//! Errors raised while loading the reference document

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a reference document produced no sections
#[derive(Debug, Error)]
pub enum SourceError {
    /// The document could not be opened or read.
    #[error("File not found at {}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document was read but contains no header lines.
    #[error("No header lines in {}", path.display())]
    NoSections { path: PathBuf },
}

impl SourceError {
    pub fn unavailable(path: &Path, source: io::Error) -> Self {
        Self::Unavailable {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn no_sections(path: &Path) -> Self {
        Self::NoSections {
            path: path.to_path_buf(),
        }
    }
}
