//! dirsnap - snapshot a directory tree as an ASCII listing
//!
//! This crate provides functionality for:
//! - Rendering a directory's contents as an indented ASCII tree
//! - Exporting the listing to a plain-text or PDF file
//! - An interactive flow that prompts for a format and offers to open
//!   the saved file

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod renderer;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, SnapError};
