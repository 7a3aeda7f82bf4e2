//! Group marker prefixes.

/// Keyword marking a lexer helper rule: `fragment DIGIT : '0'..'9' ;`
pub const FRAGMENT: &str = "fragment";

/// Default prefix of a comment opening a group: `// $<Name`
pub const BEGIN_GROUP: &str = "// $<";

/// Default prefix of a comment closing a group: `// $>`
pub const END_GROUP: &str = "// $>";

/// The comment prefixes recognized as group markers.
///
/// Built explicitly and handed to the [Analyzer](super::Analyzer), usually from
/// [OutlineConfig](crate::outline::config::OutlineConfig).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupMarkers {
    pub begin: String,
    pub end: String,
}

impl GroupMarkers {
    pub fn new(begin: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            begin: begin.into(),
            end: end.into(),
        }
    }
}

impl Default for GroupMarkers {
    fn default() -> Self {
        Self::new(BEGIN_GROUP, END_GROUP)
    }
}
