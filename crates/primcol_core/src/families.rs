//! Container family vocabulary.
//!
//! A family names the capability a container exposes: `Bulk` containers can only be traversed with a visitor,
//! `Indexed` containers additionally support `size()` and positional access. Indexed refines Bulk, so every indexed
//! container is also a valid bulk container.
//!
//! ## Examples
//! ```rust
//! use primcol_core::families::{self, ContainerType, Family};
//! use primcol_core::kinds::ElementKind;
//!
//! assert_eq!(families::from_str("random-access"), Some(Family::Indexed));
//! assert!(Family::Indexed.refines(Family::Bulk));
//!
//! let ty = ContainerType::new(ElementKind::Int, Family::Indexed);
//! assert!(ty.is_instance_of(ElementKind::Int, Family::Bulk));
//! assert_eq!(ty.to_string(), "int indexed container");
//! ```

use std::fmt;

use crate::kinds::ElementKind;
use crate::registry::{self, ItemInfo, item};

/// Stable identifier for container families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Bulk,
    Indexed,
}

impl Family {
    /// Check whether a container of family `self` is also a valid container of family `other`.
    ///
    /// Every family refines itself; `Indexed` refines `Bulk`.
    pub const fn refines(self, other: Family) -> bool {
        matches!(
            (self, other),
            (Family::Bulk, Family::Bulk) | (Family::Indexed, _)
        )
    }

    /// Return true if containers of this family support random access.
    pub const fn is_random_access(self) -> bool {
        matches!(self, Family::Indexed)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(as_str(*self))
    }
}

/// Metadata for a container family.
pub type FamilyInfo = ItemInfo<Family>;

/// Registry of container families.
pub const FAMILIES: &[FamilyInfo] = &[
    item(
        Family::Bulk,
        "bulk",
        &["visitor"],
        "Traversal through a visitor that may stop early; order is whatever the container yields.",
    ),
    item(
        Family::Indexed,
        "indexed",
        &["random-access"],
        "Random access by contiguous position `0..size`, traversed in ascending position order.",
    ),
];

/// Resolve a spelling to a [`Family`] (case-insensitive ASCII).
pub fn from_str(name: &str) -> Option<Family> {
    registry::resolve(FAMILIES, name, true)
}

/// Return the canonical spelling for a family.
pub fn as_str(id: Family) -> &'static str {
    match id {
        Family::Bulk => "bulk",
        Family::Indexed => "indexed",
    }
}

/// Describe a concrete container type by its element kind and family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerType {
    pub kind: ElementKind,
    pub family: Family,
}

impl ContainerType {
    pub const fn new(kind: ElementKind, family: Family) -> Self {
        Self { kind, family }
    }

    /// Check whether this type is an instance of the `(kind, family)` container family.
    ///
    /// Kinds must match exactly; the family check honors refinement (see [`Family::refines`]).
    pub const fn is_instance_of(&self, kind: ElementKind, family: Family) -> bool {
        // `PartialEq` is not const; compare discriminants instead.
        self.kind as u8 == kind as u8 && self.family.refines(family)
    }
}

impl fmt::Display for ContainerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} container", self.kind, self.family)
    }
}
