//! Emit containers of primitive elements through a host-supplied sink.
//!
//! The runtime is organized around three seams:
//! - **containers** expose a bulk (visitor) capability and optionally an indexed (random-access) refinement
//!   ([`BulkContainer`], [`IndexedContainer`], [`Container`]);
//! - **sinks** accept one primitive term per element ([`Sink`]);
//! - **emitters** walk a container and write its elements in order, picked once per type by the read-only
//!   [`EMITTERS`] registry.
//!
//! ## Examples
//! ```rust
//! use primcol_runtime::{BulkOnly, ContainerValue, EMITTERS, EmitPath, TypeDescriptor};
//! use primcol_runtime::testing::{RecordingSink, Term};
//!
//! let data = BulkOnly(vec![3i64, 1]);
//! let emitter = EMITTERS.find(&TypeDescriptor::of::<BulkOnly<Vec<i64>>>()).expect("long bulk is handled");
//! assert_eq!(emitter.path(), EmitPath::Generic);
//!
//! let mut sink = RecordingSink::new();
//! emitter.emit_contents(ContainerValue::of(&data), &mut sink).expect("recording never fails");
//! assert_eq!(sink.terms(), &[Term::Integer(3), Term::Integer(1)]);
//! ```
//!
//! ## Notes
//!
//! - The `json` feature adds a serde host adapter in [`json`].
//! - [`testing`] holds the sink and container doubles used by this crate's own tests.

#![deny(clippy::unwrap_used)]

pub mod container;
pub mod descriptor;
pub mod element;
pub mod emitter;
pub mod errors;
pub mod holder;
#[cfg(feature = "json")]
pub mod json;
pub mod registry;
pub mod sink;
pub mod testing;
pub mod value;

pub use container::{BulkContainer, BulkOnly, Container, IndexedContainer, Shape};
pub use descriptor::TypeDescriptor;
pub use element::Element;
pub use emitter::{ContainerEmitter, EmitPath, Emitter, IndexedEmitter};
pub use errors::EmitError;
pub use holder::ErrorHolder;
pub use registry::{EMITTERS, EmitterEntry, EmitterRegistry};
pub use sink::Sink;
pub use value::ContainerValue;
