//! File system utilities
//!
//! Provides JSON file operations, empty-file seeding, and home-directory
//! shorthand expansion.

mod files;
mod json;
mod paths;

pub use files::{create_empty_file, create_empty_list_file, exists};
pub use json::{read_json, save_to_file};
pub use paths::{expand_tilde, expand_tilde_with, HomeDir, OsHomeDir};
