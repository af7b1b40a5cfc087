//! Error types for bundling operations.
//!
//! Provides the bundler [`Error`] enum plus the [`Context`] and [`ErrorExt`]
//! helper traits used throughout the bundling code to attach human-readable
//! context to failures.

use std::path::Path;
use thiserror::Error;

/// Result type alias for bundling operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for bundling operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Manifest serialization errors
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Configuration shape errors detected before any external process runs
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// External command could not be spawned
    #[error("Failed to execute {command}: {error}")]
    CommandFailed {
        /// Command that failed
        command: String,
        /// Underlying spawn error
        error: std::io::Error,
    },

    /// External tool ran but exited unsuccessfully
    #[error("{tool} failed with exit code {code:?}{}", format_stderr(.stderr))]
    ToolFailed {
        /// Tool name
        tool: String,
        /// Exit code if the process terminated normally
        code: Option<i32>,
        /// Captured standard error, if any
        stderr: String,
    },

    /// Directory traversal errors
    #[error("Directory walk error: {0}")]
    WalkdirError(#[from] walkdir::Error),

    /// Path prefix stripping errors
    #[error("Path prefix error: {0}")]
    PathPrefixError(#[from] std::path::StripPrefixError),

    /// Generic errors with a formatted message
    #[error("{0}")]
    GenericError(String),
}

fn format_stderr(stderr: &str) -> String {
    if stderr.trim().is_empty() {
        String::new()
    } else {
        format!(": {}", stderr.trim())
    }
}

/// Early-return with a [`Error::GenericError`] built from format arguments.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::bundler::error::Error::GenericError(format!($($arg)*)).into())
    };
}

/// Attach a static or lazily-built message to an error or missing value.
pub trait Context<T> {
    /// Wrap the failure with a static message.
    fn context(self, msg: &str) -> Result<T>;

    /// Wrap the failure with a lazily-built message.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> Context<T> for Option<T> {
    fn context(self, msg: &str) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| Error::GenericError(f()))
    }
}

impl<T, E> Context<T> for std::result::Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> Result<T> {
        self.map_err(|e| Error::GenericError(format!("{msg}: {e}")))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| Error::GenericError(format!("{}: {e}", f())))
    }
}

/// Filesystem-flavored context: records the attempted action and the path.
pub trait ErrorExt<T> {
    /// Wrap the failure with "while {action} {path}".
    fn fs_context(self, action: &str, path: &Path) -> Result<T>;
}

impl<T, E> ErrorExt<T> for std::result::Result<T, E>
where
    E: std::fmt::Display,
{
    fn fs_context(self, action: &str, path: &Path) -> Result<T> {
        self.map_err(|e| {
            Error::GenericError(format!("while {} {}: {e}", action, path.display()))
        })
    }
}
