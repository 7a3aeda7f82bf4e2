//! Output formats for grammar outlines
//!
//! Every format renders an [OutlineSnapshot](crate::outline::ast::OutlineSnapshot), so positions
//! and derived rule properties are computed once, whatever the output.
//!
//! - treeviz: one line per node, for reading in a terminal
//! - json, yaml: the snapshot serialized through serde, for tooling

pub mod registry;
pub mod serde_formats;
pub mod treeviz;

pub use registry::{FormatError, FormatRegistry, Formatter};
pub use serde_formats::{JsonFormatter, YamlFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
