//! refsearch - search the section headers of a markdown reference document
//!
//! refsearch provides:
//! - Header-delimited section parsing
//! - Case-insensitive title search
//! - Text or JSON Lines output

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

mod cli;
mod core;
mod sections;

fn main() -> Result<ExitCode> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
