//! CLI command implementations
//!
//! Commands render their output to a `String` and return `CliResult<String>`; printing and exits happen in the
//! top-level `run()`.

use std::fmt::Display;
use std::str::FromStr;

use miette::Diagnostic;
use primcol_core::{ContainerType, ElementKind, Family, reference};
use primcol_runtime::json::{schema_for, to_json_string};
use primcol_runtime::{BulkOnly, Element, TypeDescriptor};
use thiserror::Error;

use super::{CliError, CliResult};
use crate::config::EmitConfig;

// ============================================================================
// Value parsing
// ============================================================================

/// A command-line value that does not parse as the requested element kind.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("invalid {kind} value `{value}` (value #{position}): {reason}")]
#[diagnostic(code(primcol::parse))]
pub struct ValueParseError {
    pub kind: ElementKind,
    pub value: String,
    /// 1-based position among the given values
    pub position: usize,
    pub reason: String,
    #[help]
    pub help: String,
}

/// An element type the CLI can parse from text.
pub trait CliValue: Element + FromStr<Err: Display> {
    /// Reject parsed values the JSON output cannot represent.
    fn check(&self) -> Result<(), &'static str> {
        Ok(())
    }
}

impl CliValue for i8 {}
impl CliValue for i16 {}
impl CliValue for i32 {}
impl CliValue for i64 {}
impl CliValue for char {}

impl CliValue for f32 {
    fn check(&self) -> Result<(), &'static str> {
        if self.is_finite() { Ok(()) } else { Err("JSON numbers must be finite") }
    }
}

impl CliValue for f64 {
    fn check(&self) -> Result<(), &'static str> {
        if self.is_finite() { Ok(()) } else { Err("JSON numbers must be finite") }
    }
}

fn value_hint(kind: ElementKind) -> String {
    let info = primcol_core::kinds::info_for(kind);
    let example = match kind {
        ElementKind::Char => "`x`",
        ElementKind::Float | ElementKind::Double => "`1.5` or `-0.25`",
        _ => "`42` or `-7`",
    };
    format!("{kind} values parse as `{}`, e.g. {example}", info.rust_type)
}

/// Parse every value as `T`, failing on the first one that does not parse.
pub fn parse_values<T: CliValue>(values: &[String]) -> Result<Vec<T>, ValueParseError> {
    values
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            let reason = match raw.parse::<T>() {
                Ok(value) => match value.check() {
                    Ok(()) => return Ok(value),
                    Err(reason) => reason.to_string(),
                },
                Err(err) => err.to_string(),
            };
            Err(ValueParseError {
                kind: T::KIND,
                value: raw.clone(),
                position: index + 1,
                reason,
                help: value_hint(T::KIND),
            })
        })
        .collect()
}

// ============================================================================
// Commands
// ============================================================================

/// Parse `values` per `config` and render them as a JSON array.
pub fn emit_values(config: &EmitConfig, values: &[String]) -> CliResult<String> {
    tracing::debug!(
        kind = %config.kind,
        family = %config.family,
        count = values.len(),
        "emitting values"
    );
    let json = match config.kind {
        ElementKind::Byte => emit_as::<i8>(config.family, values),
        ElementKind::Short => emit_as::<i16>(config.family, values),
        ElementKind::Int => emit_as::<i32>(config.family, values),
        ElementKind::Long => emit_as::<i64>(config.family, values),
        ElementKind::Char => emit_as::<char>(config.family, values),
        ElementKind::Float => emit_as::<f32>(config.family, values),
        ElementKind::Double => emit_as::<f64>(config.family, values),
    }?;
    Ok(config.finish(json))
}

fn emit_as<T: CliValue>(family: Family, values: &[String]) -> CliResult<String> {
    let parsed = parse_values::<T>(values).map_err(|err| {
        tracing::debug!(position = err.position, "value did not parse");
        CliError::usage(format!("{:?}", miette::Report::new(err)))
    })?;
    let written = match family {
        Family::Indexed => to_json_string(&parsed),
        Family::Bulk => to_json_string(&BulkOnly(parsed)),
    };
    written.map_err(|e| CliError::failure(format!("Error writing JSON: {e}")))
}

/// Render the pretty-printed array schema for `kind`.
pub fn render_schema(kind: ElementKind) -> CliResult<String> {
    let descriptor = TypeDescriptor::for_container("primcol value list", ContainerType::new(kind, Family::Indexed));
    tracing::debug!(descriptor = %descriptor, "rendering schema");
    let schema =
        schema_for(&descriptor).ok_or_else(|| CliError::failure(format!("No emitter handles {descriptor}")))?;
    serde_json::to_string_pretty(&schema).map_err(|e| CliError::failure(format!("Error writing JSON: {e}")))
}

/// Render the element kind and container family reference tables.
pub fn render_kinds() -> String {
    format!("{}\n{}", reference::render_kinds(), reference::render_families())
}
