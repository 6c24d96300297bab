//! q - a directory listing tool that draws entries inside a colored box table
//!
//! This crate provides the listing, configuration and rendering pieces used
//! by the `q` binary.

pub mod cli;
pub mod config;
pub mod display;
pub mod domain;
pub mod error;

// Re-export primary types for convenience
pub use config::UserConfig;
pub use display::{BoxRenderer, ColorAssignment, DisplayMode};
pub use domain::{list_entries, Entry, EntryType};
pub use error::{QError, Result};
