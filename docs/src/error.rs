//! Typed error conditions callers may want to match on.
//!
//! Library entry points return [`anyhow::Result`]; these types travel inside
//! the `anyhow::Error` and can be recovered with `downcast_ref`.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to obtain documentation from the external tool.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The tool could not be started at all (missing binary, permissions).
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        /// Program that was invoked.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The tool ran but exited unsuccessfully.
    #[error("`{program}` failed for {module} (exit code {}): {stderr}", display_code(.code))]
    Failed {
        /// Program that was invoked.
        program: String,
        /// Module path the tool was asked to document.
        module: String,
        /// Exit code, if the process was not killed by a signal.
        code: Option<i32>,
        /// Trimmed standard error of the tool.
        stderr: String,
    },
}

fn display_code(code: &Option<i32>) -> String {
    code.map_or_else(|| String::from("none"), |c| c.to_string())
}

/// Invalid or unreadable generator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("cannot read config {path}: {source}")]
    Read {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The configuration file is not valid TOML for [`crate::config::Config`].
    #[error("cannot parse config {path}: {source}")]
    Parse {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
    /// A package id is empty or contains a path separator.
    #[error("invalid package id `{0}`: ids must be non-empty and contain no path separators")]
    InvalidPackageId(String),
    /// A package was selected that the configuration does not list.
    #[error("unknown package `{0}`")]
    UnknownPackage(String),
}
