//! Rusty Tree - A directory tree rendering utility
//!
//! This crate provides functionality for:
//! - Walking a directory subtree depth-first
//! - Rendering each visible entry with box-drawing branch connectors
//! - Excluding configured base names at any level

pub mod cli;
pub mod config;
pub mod error;
pub mod tree;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, TreeError};
