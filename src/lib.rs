#![forbid(unsafe_code)]
//! Emit containers of primitive elements as JSON arrays.
//!
//! This crate is the command-line front of the workspace: [`primcol_core`] holds the element kind and container
//! family vocabulary, [`primcol_runtime`] the container traits, emitters and registry. The `primcol` binary parses
//! values for one element kind, builds a container with the requested capability, and prints it through the
//! runtime's serde adapter.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]` and `#![deny(clippy::expect_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a logic error, use `.expect("INVARIANT: reason")` with a clear
//!   explanation.

pub mod cli;
pub mod config;

pub use config::EmitConfig;
pub use primcol_core::{ContainerType, ElementKind, Family, SchemaTag};
pub use primcol_runtime::json::{JsonArray, schema_for, to_json_string, to_json_writer};
pub use primcol_runtime::{BulkOnly, Container, ContainerValue, EMITTERS, TypeDescriptor};
