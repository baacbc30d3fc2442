//! Element kind vocabulary.
//!
//! This registry covers the seven primitive element kinds a container can hold, their spellings, the Rust type that
//! stores them and the schema tag their arrays advertise.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-insensitive ASCII**.
//! - The table order is the probe order of the emitter registry; do not reorder entries casually.
//!
//! ## Examples
//! ```rust
//! use primcol_core::kinds::{self, ElementKind};
//! use primcol_core::schema::SchemaTag;
//!
//! assert_eq!(kinds::from_str("int"), Some(ElementKind::Int));
//! assert_eq!(kinds::from_str("I64"), Some(ElementKind::Long));
//! assert_eq!(kinds::schema_tag(ElementKind::Char), SchemaTag::String);
//! ```

use std::fmt;

use crate::registry::{self, ItemInfo, item};
use crate::schema::SchemaTag;

/// Stable identifier for primitive element kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
}

impl ElementKind {
    /// Every kind, in registry probe order.
    pub const ALL: [ElementKind; 7] = [
        ElementKind::Byte,
        ElementKind::Short,
        ElementKind::Int,
        ElementKind::Long,
        ElementKind::Char,
        ElementKind::Float,
        ElementKind::Double,
    ];

    /// Return true for the four integral kinds.
    pub const fn is_integral(self) -> bool {
        matches!(
            self,
            ElementKind::Byte | ElementKind::Short | ElementKind::Int | ElementKind::Long
        )
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(as_str(*self))
    }
}

/// Metadata for an element kind.
#[derive(Debug, Clone, Copy)]
pub struct ElementKindInfo {
    pub item: ItemInfo<ElementKind>,
    /// Rust type that stores one element.
    pub rust_type: &'static str,
    pub schema_tag: SchemaTag,
}

/// Registry of element kinds, in probe order.
pub const ELEMENT_KINDS: &[ElementKindInfo] = &[
    info(
        ElementKind::Byte,
        "byte",
        &["i8"],
        "i8",
        SchemaTag::Integer,
        "Signed 8-bit integer.",
    ),
    info(
        ElementKind::Short,
        "short",
        &["i16"],
        "i16",
        SchemaTag::Integer,
        "Signed 16-bit integer.",
    ),
    info(
        ElementKind::Int,
        "int",
        &["i32"],
        "i32",
        SchemaTag::Integer,
        "Signed 32-bit integer.",
    ),
    info(
        ElementKind::Long,
        "long",
        &["i64"],
        "i64",
        SchemaTag::Integer,
        "Signed 64-bit integer.",
    ),
    info(
        ElementKind::Char,
        "char",
        &[],
        "char",
        SchemaTag::String,
        "Unicode scalar value, emitted as a one-character string.",
    ),
    info(
        ElementKind::Float,
        "float",
        &["f32"],
        "f32",
        SchemaTag::Number,
        "Single-precision floating-point number.",
    ),
    info(
        ElementKind::Double,
        "double",
        &["f64"],
        "f64",
        SchemaTag::Number,
        "Double-precision floating-point number.",
    ),
];

/// Resolve a kind name to an [`ElementKind`].
///
/// ## Parameters
/// - `name`: Candidate kind name (canonical or alias).
///
/// ## Returns
/// - `Some(ElementKind)` if the spelling matches this registry.
/// - `None` otherwise.
///
/// ## Notes
/// - Matching is **case-insensitive ASCII**.
pub fn from_str(name: &str) -> Option<ElementKind> {
    registry::resolve(ELEMENT_KINDS.iter().map(|k| &k.item), name, true)
}

/// Return the canonical spelling for an element kind.
pub fn as_str(id: ElementKind) -> &'static str {
    info_for(id).item.canonical
}

/// Return the schema tag an array of `id` elements advertises.
///
/// `const` so emitter tables can be built in `static` items; kept in sync with [`ELEMENT_KINDS`] by tests.
pub const fn schema_tag(id: ElementKind) -> SchemaTag {
    match id {
        ElementKind::Byte | ElementKind::Short | ElementKind::Int | ElementKind::Long => SchemaTag::Integer,
        ElementKind::Float | ElementKind::Double => SchemaTag::Number,
        ElementKind::Char => SchemaTag::String,
    }
}

/// Return the full metadata entry for an element kind.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: ElementKind) -> &'static ElementKindInfo {
    ELEMENT_KINDS
        .iter()
        .find(|k| k.item.id == id)
        .expect("element kind info missing")
}

const fn info(
    id: ElementKind,
    canonical: &'static str,
    aliases: &'static [&'static str],
    rust_type: &'static str,
    schema_tag: SchemaTag,
    description: &'static str,
) -> ElementKindInfo {
    ElementKindInfo {
        item: item(id, canonical, aliases, description),
        rust_type,
        schema_tag,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_type_resolves_as_alias() {
        for info in ELEMENT_KINDS {
            assert_eq!(from_str(info.rust_type), Some(info.item.id));
        }
    }

    #[test]
    fn table_order_matches_probe_order() {
        let ids: Vec<ElementKind> = ELEMENT_KINDS.iter().map(|k| k.item.id).collect();
        assert_eq!(ids, ElementKind::ALL);
    }

    #[test]
    fn schema_tag_agrees_with_table() {
        for info in ELEMENT_KINDS {
            assert_eq!(schema_tag(info.item.id), info.schema_tag, "{}", info.item.canonical);
        }
    }

    #[test]
    fn only_integral_kinds_are_tagged_integer() {
        for kind in ElementKind::ALL {
            assert_eq!(kind.is_integral(), schema_tag(kind) == SchemaTag::Integer, "{kind}");
        }
    }
}
