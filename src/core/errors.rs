//! CMU-prefixed error types with structured error codes.

#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Shared `Result` alias for the project.
pub type Result<T> = std::result::Result<T, MenuError>;

/// Top-level error type for the client menu.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("[CMU-1001] invalid configuration: {details}")]
    InvalidConfig { details: String },

    #[error("[CMU-1002] missing configuration file: {path}")]
    MissingConfig { path: PathBuf },

    #[error("[CMU-1003] configuration parse failure in {context}: {details}")]
    ConfigParse {
        context: &'static str,
        details: String,
    },

    #[error("[CMU-2001] invalid input: {token:?} is not a number")]
    MalformedInput { token: String },

    #[error("[CMU-2002] {value} is outside the accepted range {min}..={max}")]
    OutOfRange { value: i32, min: i32, max: i32 },

    #[error("[CMU-2003] input stream closed")]
    EndOfInput,

    #[error("[CMU-3001] serialization failure in {context}: {details}")]
    Serialization {
        context: &'static str,
        details: String,
    },

    #[error("[CMU-3002] IO failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[CMU-3003] console IO failure: {source}")]
    Console {
        #[source]
        source: std::io::Error,
    },
}

impl MenuError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfig { .. } => "CMU-1001",
            Self::MissingConfig { .. } => "CMU-1002",
            Self::ConfigParse { .. } => "CMU-1003",
            Self::MalformedInput { .. } => "CMU-2001",
            Self::OutOfRange { .. } => "CMU-2002",
            Self::EndOfInput => "CMU-2003",
            Self::Serialization { .. } => "CMU-3001",
            Self::Io { .. } => "CMU-3002",
            Self::Console { .. } => "CMU-3003",
        }
    }

    /// Whether the menu loop recovers from this error locally and re-prompts.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::MalformedInput { .. } | Self::OutOfRange { .. })
    }

    /// Convenience constructor for IO errors with a known path.
    #[must_use]
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

impl From<std::io::Error> for MenuError {
    fn from(source: std::io::Error) -> Self {
        Self::Console { source }
    }
}

impl From<serde_json::Error> for MenuError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization {
            context: "serde_json",
            details: value.to_string(),
        }
    }
}

impl From<toml::de::Error> for MenuError {
    fn from(value: toml::de::Error) -> Self {
        Self::ConfigParse {
            context: "toml",
            details: value.to_string(),
        }
    }
}
