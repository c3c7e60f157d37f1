//! Error types for the catalog CLI.

use std::path::PathBuf;

use thiserror::Error;

use crate::error::{FixtureError, LookupError};

/// Errors surfaced by the CLI settings and run flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// Layered configuration could not be loaded.
    #[error("failed to load settings: {message}")]
    Settings {
        /// Loader error message.
        message: String,
    },
    /// A category id in the comma-separated list failed to parse.
    #[error("invalid category id '{value}' ({message})")]
    InvalidCategoryId {
        /// Raw list entry.
        value: String,
        /// Parser error message.
        message: String,
    },
    /// The fixtures path cannot be opened as a file.
    #[error("invalid fixtures path '{path}': {reason}")]
    InvalidFixturesPath {
        /// Supplied path.
        path: PathBuf,
        /// Why the path was rejected.
        reason: &'static str,
    },
    /// The output format is not recognised.
    #[error("unknown output format '{value}'; expected 'table' or 'json'")]
    UnknownFormat {
        /// Supplied format name.
        value: String,
    },
    /// The fixture document could not be loaded.
    #[error("fixture error: {0}")]
    Fixture(#[from] FixtureError),
    /// The fixture tables contain a dangling reference.
    #[error("catalog join failed: {0}")]
    Lookup(#[from] LookupError),
    /// The filtered products could not be serialised.
    #[error("failed to render output: {message}")]
    Render {
        /// Serialiser error message.
        message: String,
    },
}
