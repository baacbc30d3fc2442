//! The read-only emitter registry.
//!
//! One [`EmitterEntry`] per element kind, probed in [`ElementKind::ALL`] order; the first entry whose family
//! accepts the descriptor decides the result. The builtin registry is a `static` built in a `const` context, so
//! lookups need no initialization and no locking.
//!
//! ## Examples
//! ```rust
//! use primcol_runtime::{EMITTERS, EmitPath, TypeDescriptor};
//! use primcol_core::ElementKind;
//!
//! let emitter = EMITTERS.find_for::<Vec<i32>>().expect("int list is handled");
//! assert_eq!(emitter.kind(), ElementKind::Int);
//! assert_eq!(emitter.path(), EmitPath::Indexed);
//!
//! assert_eq!(EMITTERS.find(&TypeDescriptor::opaque::<String>()), None);
//! ```

use primcol_core::{ElementKind, Family, SchemaTag, kinds};

use crate::container::Container;
use crate::descriptor::TypeDescriptor;
use crate::emitter::{EmitPath, Emitter};

/// The builtin registry: every kind refines to the indexed emitter for random-access containers.
pub static EMITTERS: EmitterRegistry = EmitterRegistry::builtin();

/// One registry entry: an element kind and how its emitter is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitterEntry {
    kind: ElementKind,
    schema_tag: SchemaTag,
    refines_indexed: bool,
}

impl EmitterEntry {
    pub const fn new(kind: ElementKind, refines_indexed: bool) -> Self {
        Self {
            kind,
            schema_tag: kinds::schema_tag(kind),
            refines_indexed,
        }
    }

    pub const fn kind(&self) -> ElementKind {
        self.kind
    }

    pub const fn schema_tag(&self) -> SchemaTag {
        self.schema_tag
    }

    pub const fn refines_indexed(&self) -> bool {
        self.refines_indexed
    }

    /// Match `descriptor` against this entry's container family.
    ///
    /// ## Returns
    /// - `Some` indexed emitter if the descriptor is random-access and this entry refines.
    /// - `Some` generic emitter for any other container of this kind.
    /// - `None` if the descriptor is not a container of this kind.
    pub fn matching(&self, descriptor: &TypeDescriptor) -> Option<Emitter> {
        let ty = descriptor.container_type()?;
        if !ty.is_instance_of(self.kind, Family::Bulk) {
            return None;
        }
        let path = if self.refines_indexed && ty.family.is_random_access() {
            EmitPath::Indexed
        } else {
            EmitPath::Generic
        };
        Some(Emitter::new(self.kind, path))
    }
}

/// Ordered, immutable set of emitter entries.
#[derive(Debug, Clone)]
pub struct EmitterRegistry {
    entries: [EmitterEntry; 7],
}

impl EmitterRegistry {
    /// Registry that hands out the indexed specialization for every random-access container.
    pub const fn builtin() -> Self {
        Self::with_refinement(true)
    }

    /// Registry that only hands out generic emitters.
    ///
    /// Output is identical to [`EmitterRegistry::builtin`]; only the traversal strategy chosen at match time differs.
    pub const fn generic_only() -> Self {
        Self::with_refinement(false)
    }

    const fn with_refinement(refine: bool) -> Self {
        let [a, b, c, d, e, f, g] = ElementKind::ALL;
        Self {
            entries: [
                EmitterEntry::new(a, refine),
                EmitterEntry::new(b, refine),
                EmitterEntry::new(c, refine),
                EmitterEntry::new(d, refine),
                EmitterEntry::new(e, refine),
                EmitterEntry::new(f, refine),
                EmitterEntry::new(g, refine),
            ],
        }
    }

    /// Entries in probe order.
    pub fn entries(&self) -> &[EmitterEntry] {
        &self.entries
    }

    /// Find the emitter for `descriptor`, or `None` if this layer does not handle the type.
    pub fn find(&self, descriptor: &TypeDescriptor) -> Option<Emitter> {
        let found = self.entries.iter().find_map(|entry| entry.matching(descriptor));
        match found {
            Some(emitter) => tracing::trace!(
                descriptor = %descriptor,
                kind = %emitter.kind(),
                path = ?emitter.path(),
                "matched container emitter"
            ),
            None => tracing::trace!(descriptor = %descriptor, "no container emitter"),
        }
        found
    }

    /// Find the emitter for a statically known container type.
    pub fn find_for<C: Container + ?Sized>(&self) -> Option<Emitter> {
        self.find(&TypeDescriptor::of::<C>())
    }
}

impl Default for EmitterRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
