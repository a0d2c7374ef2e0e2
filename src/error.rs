// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Error types for theme loading.
//!
//! The switch itself has no failure paths; only reading a theme file from disk can fail.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading or validating a theme file.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The theme file could not be read or written.
    #[error("theme file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The theme file is not valid JSON or has unknown fields.
    #[error("invalid theme JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A color string is not `#RRGGBB` or `#RRGGBBAA`.
    #[error("invalid color for {field}: {value:?}")]
    InvalidColor { field: &'static str, value: String },

    /// Corner radius is negative or not finite.
    #[error("invalid corner radius: {0}")]
    InvalidRadius(f32),
}

pub type Result<T> = std::result::Result<T, ThemeError>;
