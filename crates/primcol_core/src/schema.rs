//! Coarse schema tags for emitted array items.
//!
//! A schema tag is the output-format-agnostic classification of a container's elements. It only feeds schema and
//! metadata generation; emission never looks at it.
//!
//! ## Examples
//! ```rust
//! use primcol_core::schema::{self, SchemaTag};
//!
//! assert_eq!(schema::as_str(SchemaTag::Number), "number");
//! assert_eq!(schema::from_str("string"), Some(SchemaTag::String));
//! ```

use std::fmt;

use crate::registry::{self, ItemInfo, item};

/// Stable identifier for schema tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaTag {
    Integer,
    Number,
    String,
}

/// Metadata for a schema tag.
pub type SchemaTagInfo = ItemInfo<SchemaTag>;

/// Registry of schema tags.
pub const SCHEMA_TAGS: &[SchemaTagInfo] = &[
    item(SchemaTag::Integer, "integer", &[], "Whole numbers of any integral element kind."),
    item(SchemaTag::Number, "number", &[], "Floating-point numbers."),
    // The output format has no single-character type; characters are emitted as text.
    item(SchemaTag::String, "string", &[], "Text values, used for characters."),
];

/// Resolve a spelling to a [`SchemaTag`] (case-sensitive).
pub fn from_str(name: &str) -> Option<SchemaTag> {
    registry::resolve(SCHEMA_TAGS, name, false)
}

/// Return the canonical spelling for a schema tag.
pub fn as_str(id: SchemaTag) -> &'static str {
    match id {
        SchemaTag::Integer => "integer",
        SchemaTag::Number => "number",
        SchemaTag::String => "string",
    }
}

impl fmt::Display for SchemaTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(as_str(*self))
    }
}
