//! Format registry for outline output
//!
//! Each format implements the `Formatter` trait and is looked up by name in a `FormatRegistry`,
//! which is what the `--format` flag resolves against.

use crate::outline::ast::OutlineSnapshot;
use std::collections::HashMap;
use std::fmt;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during serialization
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Renders an outline snapshot to text
pub trait Formatter: Send + Sync {
    /// The name selecting this format, e.g. "treeviz"
    fn name(&self) -> &str;

    fn serialize(&self, snapshot: &OutlineSnapshot) -> Result<String, FormatError>;

    fn description(&self) -> &str {
        ""
    }
}

/// Formatters by name
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter, replacing any formatter with the same name
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Render a snapshot with the named format
    pub fn serialize(&self, snapshot: &OutlineSnapshot, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(snapshot)
    }

    /// All format names, sorted
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Name and description of every format, sorted by name
    pub fn describe_formats(&self) -> Vec<(String, String)> {
        self.list_formats()
            .into_iter()
            .map(|name| {
                let description = self
                    .get(&name)
                    .map(|formatter| formatter.description().to_string())
                    .unwrap_or_default();
                (name, description)
            })
            .collect()
    }

    /// Create a registry with the built-in formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(super::TreevizFormatter::default());
        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
