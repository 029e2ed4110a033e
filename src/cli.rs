//! CLI module - Command-line interface definition and handler

use anyhow::Result;
use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::core::render::{OutputFormat, RenderConfig};
use crate::sections::api::{run_search, SearchOptions};

/// Document searched when neither --source nor REFSEARCH_SOURCE is given
pub const DEFAULT_SOURCE: &str = "c64ref.md";

/// refsearch - search the section headers of a markdown reference document.
#[derive(Parser, Debug)]
#[command(name = "refsearch")]
#[command(
    author,
    version,
    about,
    long_about = r#"refsearch splits a markdown reference document into sections at every
header line (#, ##, ### ...) and prints the sections whose title contains
SEARCH_TERM, ignoring case and header level.

Output formats:
- text (default): each match framed by '=' rules, title then content
- json (--json): one {"title", "content"} object per line

Exit status is 1 when the document cannot be read or has no headers,
0 otherwise (also when nothing matched).

Examples:
    refsearch opcode
    refsearch "memory map" --json
    refsearch sid --source docs/c64ref.md
    REFSEARCH_SOURCE=docs/c64ref.md refsearch vic
"#
)]
pub struct Cli {
    /// Substring to look for in section titles.
    #[arg(
        value_name = "SEARCH_TERM",
        value_parser = NonEmptyStringValueParser::new(),
        long_help = "Substring to look for in section titles.\n\n\
Matching is case-insensitive. Leading '#' markers and surrounding whitespace\n\
are ignored on the title side; the term itself is only lower-cased."
    )]
    pub search_term: String,

    /// Print one JSON object per matching section.
    #[arg(
        long,
        long_help = "Print one JSON object per line, each with exactly the keys \"title\" and\n\
\"content\". Nothing is printed when no section matches."
    )]
    pub json: bool,

    /// Markdown document to search.
    #[arg(
        long,
        env = "REFSEARCH_SOURCE",
        default_value = DEFAULT_SOURCE,
        value_name = "PATH",
        long_help = "Markdown document to parse and search.\n\n\
Can also be set through the REFSEARCH_SOURCE environment variable."
    )]
    pub source: PathBuf,

    /// Disable colored diagnostics.
    #[arg(
        long,
        long_help = "Disable colored output on stderr. This is useful when capturing\n\
diagnostics or when your terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    /// Quiet mode (no summary line).
    #[arg(
        short,
        long,
        long_help = "Omit the \"Found N matching section(s)\" summary in text output.\n\
Matches and the no-match message are still printed."
    )]
    pub quiet: bool,

    /// Verbose mode (more diagnostics).
    #[arg(
        short,
        long,
        long_help = "Trace the source path and section/match counts on stderr.\n\
This is intended for debugging and does not change stdout."
    )]
    pub verbose: bool,
}

/// Whether diagnostics on stderr get ANSI styling
///
/// Keyed on stderr, where diagnostics go. `NO_COLOR` is checked here since the
/// override skips colored's own env lookup.
pub fn stderr_color_enabled(
    no_color: bool,
    stderr_is_terminal: bool,
    no_color_env: bool,
) -> bool {
    !no_color && stderr_is_terminal && !no_color_env
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<ExitCode> {
    colored::control::set_override(stderr_color_enabled(
        cli.no_color,
        io::stderr().is_terminal(),
        std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()),
    ));

    let format = OutputFormat::from_json_flag(cli.json);
    let options = SearchOptions {
        source_path: cli.source,
        term: cli.search_term,
        render: RenderConfig::with_quiet(format, cli.quiet),
        verbose: cli.verbose,
    };

    run_search(&options)
}
