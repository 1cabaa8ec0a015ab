//! Error types for the gizmo crate
//!
//! Drag and mode handling never fail; these cover the configuration surface.

use std::path::PathBuf;

use thiserror::Error;

/// Gizmo configuration errors
#[derive(Debug, Error)]
pub enum GizmoError {
    /// Reading or writing a settings file failed
    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid TOML for the settings schema
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Settings could not be encoded
    #[error("TOML encode error: {0}")]
    Encode(#[from] toml::ser::Error),

    /// No platform config directory to fall back on
    #[error("No config directory available on this platform")]
    NoConfigDir,

    /// Unrecognised axis name
    #[error("Unknown axis: {0}")]
    UnknownAxis(String),

    /// Unrecognised operating mode name
    #[error("Unknown mode: {0}")]
    UnknownMode(String),
}

/// Result type for gizmo operations
pub type Result<T> = std::result::Result<T, GizmoError>;
