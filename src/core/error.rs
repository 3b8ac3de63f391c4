// Copyright © 2024 DocNav. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Error Handling for DocNav
//!
//! This module defines the crate-level error type. Validation findings have
//! their own structured representation in
//! [`diagnostics`](crate::core::diagnostics); a failed validation surfaces
//! here as [`DocNavError::Validation`] wrapping the full report.

use std::path::PathBuf;
use thiserror::Error;

use crate::core::diagnostics::Report;

/// A unified result type for the DocNav library.
pub type Result<T> = std::result::Result<T, DocNavError>;

/// The main error type for DocNav, encompassing all potential error cases.
#[derive(Error, Debug)]
pub enum DocNavError {
    /// Error related to configuration loading or overrides.
    ///
    /// Raised for unsupported file extensions, unknown override keys and
    /// override values that cannot be parsed.
    #[error("Configuration error: {message}.")]
    Config {
        /// Detailed description of the configuration error.
        message: String,
        /// Optional path of the configuration file that caused the error.
        path: Option<PathBuf>,
    },

    /// A configuration file could not be deserialized.
    #[error("Failed to parse {format} config{}: {message}", location(.path))]
    Parse {
        /// The format the file was parsed as (`toml`, `json` or `yaml`).
        format: &'static str,
        /// Description produced by the underlying parser.
        message: String,
        /// Path of the file, when parsing from disk.
        path: Option<PathBuf>,
    },

    /// IO error encountered while reading a configuration file.
    #[error("File IO error at `{path:?}`: {source}")]
    Io {
        /// Path associated with the IO error.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration was read but failed validation.
    #[error("{0}")]
    Validation(Report),
}

impl DocNavError {
    /// Creates a `Config` error with a specific message.
    ///
    /// # Parameters
    /// - `message`: A description of the configuration error.
    /// - `path`: Optional path of the configuration file causing the error.
    pub fn config<S: Into<String>>(
        message: S,
        path: Option<PathBuf>,
    ) -> Self {
        DocNavError::Config {
            message: message.into(),
            path,
        }
    }

    /// Creates a `Parse` error for the given format.
    pub fn parse<S: Into<String>>(
        format: &'static str,
        message: S,
        path: Option<PathBuf>,
    ) -> Self {
        DocNavError::Parse {
            format,
            message: message.into(),
            path,
        }
    }

    /// Wraps an IO error as an `Io` variant with the specified path.
    pub fn io(path: PathBuf, source: std::io::Error) -> Self {
        DocNavError::Io { path, source }
    }

    /// Returns the validation report if this error is a validation failure.
    pub fn report(&self) -> Option<&Report> {
        match self {
            DocNavError::Validation(report) => Some(report),
            _ => None,
        }
    }
}

/// The ` at <file>` suffix of a parse error, empty for in-memory sources.
fn location(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" at `{}`", path.display()),
        None => String::new(),
    }
}

impl From<Report> for DocNavError {
    fn from(report: Report) -> Self {
        DocNavError::Validation(report)
    }
}
