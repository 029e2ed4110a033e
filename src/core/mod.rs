//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - The Section model
//! - Source loading errors
//! - Line-oriented file reading
//! - Rendering for text and JSON Lines output

pub mod error;
pub mod file_reader;
pub mod model;
pub mod render;
