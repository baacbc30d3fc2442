//! Errors surfaced by dynamic emission.

use primcol_core::ContainerType;
use thiserror::Error;

/// Failure of [`crate::Emitter::emit_contents`].
///
/// `E` is the sink's own error type; it is carried verbatim.
#[derive(Debug, Error, PartialEq)]
pub enum EmitError<E> {
    /// The sink rejected a write. Elements written before it stay written.
    #[error("{0}")]
    Sink(E),

    /// The host paired a value with an emitter that was matched for a different container type.
    #[error("emitter for {expected} cannot write {found}")]
    Mismatch {
        expected: ContainerType,
        found: ContainerType,
    },
}

impl<E> EmitError<E> {
    /// Return the sink error, if this is one.
    pub fn into_sink_error(self) -> Option<E> {
        match self {
            EmitError::Sink(err) => Some(err),
            EmitError::Mismatch { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primcol_core::{ElementKind, Family};

    #[test]
    fn mismatch_message_names_both_types() {
        let err: EmitError<std::io::Error> = EmitError::Mismatch {
            expected: ContainerType::new(ElementKind::Int, Family::Indexed),
            found: ContainerType::new(ElementKind::Int, Family::Bulk),
        };
        assert_eq!(
            err.to_string(),
            "emitter for int indexed container cannot write int bulk container"
        );
    }

    #[test]
    fn sink_error_displays_verbatim() {
        let err = EmitError::Sink("stream closed");
        assert_eq!(err.to_string(), "stream closed");
        assert_eq!(err.into_sink_error(), Some("stream closed"));
    }
}
