//! Sections module - header-delimited document sections
//!
//! Provides:
//! - Parsing a markdown document into sections
//! - Case-insensitive title search
//! - The search command handler

pub mod api;
pub mod parse;
pub mod search;
