//! Provide the shared, pure vocabulary for primitive container emission.
//!
//! This crate is intentionally small and dependency-free. It names the things every other layer talks about:
//! - the closed set of element kinds a container may hold ([`ElementKind`]),
//! - the container families describing capabilities ([`Family`], [`ContainerType`]),
//! - the coarse schema tags advertised for emitted arrays ([`SchemaTag`]).
//!
//! ## Notes
//!
//! - This is a "vocabulary core" crate: **no IO**, no global mutable state, no emission logic.
//! - Every vocabulary is a `const` registry table plus `from_str`/`as_str` lookups.

#![deny(clippy::unwrap_used)]

pub mod families;
pub mod kinds;
pub mod reference;
pub mod registry;
pub mod schema;

pub use families::{ContainerType, Family};
pub use kinds::ElementKind;
pub use schema::SchemaTag;
