//! Renderer module
//!
//! Renders matched sections as human-readable text blocks or JSON Lines.

use crate::core::model::Section;
use std::io::Write;

/// Width of the `=` rule framing each title in text output
pub const SEPARATOR_WIDTH: usize = 80;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Jsonl,
}

impl OutputFormat {
    /// Pick the format selected by the `--json` switch
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Jsonl
        } else {
            OutputFormat::Text
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    /// Omit the "Found N ..." summary in text output
    pub quiet: bool,
}

impl RenderConfig {
    pub fn with_quiet(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }
}

/// Renderer for search results
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render the matches for `term` to a string
    pub fn render(&self, term: &str, matches: &[&Section]) -> String {
        match self.config.format {
            OutputFormat::Text => self.render_text(term, matches),
            OutputFormat::Jsonl => self.render_jsonl(matches),
        }
    }

    /// Render to a writer
    pub fn render_to<W: Write>(
        &self,
        term: &str,
        matches: &[&Section],
        mut writer: W,
    ) -> std::io::Result<()> {
        let output = self.render(term, matches);
        writer.write_all(output.as_bytes())?;
        writer.flush()
    }

    /// One JSON object per line; no output at all when nothing matched
    fn render_jsonl(&self, matches: &[&Section]) -> String {
        let mut output = String::new();
        for section in matches {
            if let Ok(line) = serde_json::to_string(section) {
                output.push_str(&line);
                output.push('\n');
            }
        }
        output
    }

    fn render_text(&self, term: &str, matches: &[&Section]) -> String {
        if matches.is_empty() {
            return format!("No sections found matching '{}'.\n", term);
        }

        let separator = "=".repeat(SEPARATOR_WIDTH);
        let mut output = String::new();

        if !self.config.quiet {
            output.push_str(&format!(
                "Found {} matching section(s) for '{}':\n\n",
                matches.len(),
                term
            ));
        }

        for section in matches {
            output.push_str(&separator);
            output.push('\n');
            output.push_str(section.title());
            output.push('\n');
            output.push_str(&separator);
            output.push('\n');
            output.push_str(section.content());
            output.push_str("\n\n");
        }

        output
    }
}
