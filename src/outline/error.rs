//! Errors surfaced to the command line.
//!
//! Tokenizing and analyzing never fail; only reading input, loading configuration and rendering
//! output can.

use crate::outline::formats::FormatError;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum OutlineError {
    /// Reading a grammar file failed
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Configuration could not be loaded or deserialized
    Config(config::ConfigError),
    /// Output could not be rendered
    Format(FormatError),
}

impl OutlineError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        OutlineError::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for OutlineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutlineError::Io { path, source } => {
                write!(f, "Failed to read '{}': {}", path.display(), source)
            }
            OutlineError::Config(err) => write!(f, "Configuration error: {}", err),
            OutlineError::Format(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for OutlineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OutlineError::Io { source, .. } => Some(source),
            OutlineError::Config(err) => Some(err),
            OutlineError::Format(err) => Some(err),
        }
    }
}

impl From<config::ConfigError> for OutlineError {
    fn from(err: config::ConfigError) -> Self {
        OutlineError::Config(err)
    }
}

impl From<FormatError> for OutlineError {
    fn from(err: FormatError) -> Self {
        OutlineError::Format(err)
    }
}
