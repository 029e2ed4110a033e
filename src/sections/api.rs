//! Section API - load and search operations

use anyhow::{Context, Result};
use colored::Colorize;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::core::error::SourceError;
use crate::core::file_reader::open_buffered;
use crate::core::model::Section;
use crate::core::render::{RenderConfig, Renderer};
use crate::sections::parse::parse_reader;
use crate::sections::search::search_sections;

/// Diagnostic printed whenever the document yields nothing to search
pub const NO_SECTIONS_MESSAGE: &str = "No sections found or file could not be read.";

/// Everything one search invocation needs
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Markdown document to parse
    pub source_path: PathBuf,
    /// Substring to look for in section titles
    pub term: String,
    pub render: RenderConfig,
    /// Trace progress on stderr
    pub verbose: bool,
}

/// Read and parse the reference document
///
/// The file handle is dropped before this returns, on success and on error.
pub fn load_sections(path: &Path) -> Result<Vec<Section>, SourceError> {
    let reader = open_buffered(path).map_err(|e| SourceError::unavailable(path, e))?;
    let sections = parse_reader(reader).map_err(|e| SourceError::unavailable(path, e))?;

    if sections.is_empty() {
        return Err(SourceError::no_sections(path));
    }

    Ok(sections)
}

/// Run the search command
pub fn run_search(options: &SearchOptions) -> Result<ExitCode> {
    if options.verbose {
        trace(&format!(
            "reading sections from {}",
            options.source_path.display()
        ));
    }

    let sections = match load_sections(&options.source_path) {
        Ok(sections) => sections,
        Err(err) => {
            report_source_error(&err, options.verbose);
            return Ok(ExitCode::from(1));
        }
    };

    let matches = search_sections(&sections, &options.term);

    if options.verbose {
        trace(&format!(
            "{} section(s) parsed, {} matched '{}'",
            sections.len(),
            matches.len(),
            options.term
        ));
    }

    let renderer = Renderer::with_config(options.render);
    renderer
        .render_to(&options.term, &matches, io::stdout().lock())
        .context("Failed to write results to stdout")?;

    Ok(ExitCode::SUCCESS)
}

fn report_source_error(err: &SourceError, verbose: bool) {
    if let SourceError::Unavailable { source, .. } = err {
        eprintln!("{} {}", "Error:".red().bold(), err);
        if verbose {
            trace(&format!("cause: {}", source));
        }
    } else if verbose {
        trace(&err.to_string());
    }
    eprintln!("{}", NO_SECTIONS_MESSAGE);
}

fn trace(message: &str) {
    eprintln!("{} {}", "refsearch:".dimmed(), message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_sections() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("ref.md");
        std::fs::write(&path, "intro\n# A\nfoo\n# B\nbar\nbaz\n").unwrap();

        let sections = load_sections(&path).unwrap();
        assert_eq!(
            sections,
            vec![Section::new("# A", "foo"), Section::new("# B", "bar\nbaz")]
        );
    }

    #[test]
    fn test_load_sections_missing_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("missing.md");

        match load_sections(&path) {
            Err(SourceError::Unavailable { path: p, source }) => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected Unavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_load_sections_directory_is_unavailable() {
        let temp = tempdir().unwrap();
        let err = load_sections(temp.path()).unwrap_err();
        assert!(matches!(err, SourceError::Unavailable { .. }));
    }

    #[test]
    fn test_load_sections_empty_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("empty.md");
        std::fs::write(&path, "").unwrap();

        let err = load_sections(&path).unwrap_err();
        assert!(matches!(err, SourceError::NoSections { .. }));
    }

    #[test]
    fn test_load_sections_no_headers() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("plain.md");
        std::fs::write(&path, "no headers\nat all\n").unwrap();

        let err = load_sections(&path).unwrap_err();
        assert!(matches!(err, SourceError::NoSections { .. }));
    }

    #[test]
    fn test_run_search_missing_source_fails() {
        let temp = tempdir().unwrap();
        let options = SearchOptions {
            source_path: temp.path().join("missing.md"),
            term: "opcode".to_string(),
            render: RenderConfig::default(),
            verbose: false,
        };

        let code = run_search(&options).unwrap();
        assert_eq!(code, ExitCode::from(1));
    }
}
