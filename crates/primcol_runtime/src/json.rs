//! JSON host adapter.
//!
//! Bridges emitters into serde: a container becomes a JSON array whose items are written by the matched emitter
//! through a [`SeqSink`]. Schema generation advertises the emitter's schema tag as the array's item type.

use std::io;

use serde::ser::{Error as _, Serialize, SerializeSeq, Serializer};
use serde_json::json;

use crate::container::Container;
use crate::descriptor::TypeDescriptor;
use crate::errors::EmitError;
use crate::registry::EMITTERS;
use crate::sink::Sink;
use crate::value::ContainerValue;

/// Sink that writes each term as one element of a serde sequence.
pub struct SeqSink<'a, S> {
    seq: &'a mut S,
}

impl<'a, S: SerializeSeq> SeqSink<'a, S> {
    pub fn new(seq: &'a mut S) -> Self {
        Self { seq }
    }
}

impl<S: SerializeSeq> Sink for SeqSink<'_, S> {
    type Error = S::Error;

    fn write_integer(&mut self, value: i64) -> Result<(), S::Error> {
        self.seq.serialize_element(&value)
    }

    fn write_float(&mut self, value: f64) -> Result<(), S::Error> {
        self.seq.serialize_element(&value)
    }

    fn write_f32(&mut self, value: f32) -> Result<(), S::Error> {
        self.seq.serialize_element(&value)
    }

    fn write_text(&mut self, value: &str) -> Result<(), S::Error> {
        self.seq.serialize_element(value)
    }
}

/// Serialize a container value as an array, using the builtin registry.
///
/// ## Examples
/// ```rust
/// use primcol_runtime::json::JsonArray;
///
/// let data = vec![1i32, 2, 3];
/// assert_eq!(serde_json::to_string(&JsonArray::of(&data)).unwrap(), "[1,2,3]");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct JsonArray<'a> {
    value: ContainerValue<'a>,
}

impl<'a> JsonArray<'a> {
    pub fn new(value: ContainerValue<'a>) -> Self {
        Self { value }
    }

    pub fn of<C: Container>(container: &'a C) -> Self {
        Self::new(ContainerValue::of(container))
    }
}

impl Serialize for JsonArray<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let descriptor = self.value.descriptor();
        let emitter = EMITTERS
            .find(&descriptor)
            .ok_or_else(|| S::Error::custom(format_args!("no emitter for {descriptor}")))?;

        let mut seq = serializer.serialize_seq(self.value.len_hint())?;
        emitter
            .emit_contents(self.value, &mut SeqSink::new(&mut seq))
            .map_err(|err| match err {
                EmitError::Sink(err) => err,
                mismatch => S::Error::custom(mismatch),
            })?;
        seq.end()
    }
}

/// Build the schema object for arrays of the described container type.
///
/// ## Returns
/// - `{"type": "array", "items": {"type": <tag>}}` for handled containers.
/// - `None` if no emitter handles the descriptor.
pub fn schema_for(descriptor: &TypeDescriptor) -> Option<serde_json::Value> {
    let emitter = EMITTERS.find(descriptor)?;
    Some(json!({
        "type": "array",
        "items": { "type": emitter.schema_tag().to_string() },
    }))
}

/// Serialize a container to a compact JSON string.
pub fn to_json_string<C: Container>(container: &C) -> Result<String, serde_json::Error> {
    serde_json::to_string(&JsonArray::of(container))
}

/// Serialize a container as compact JSON into `writer`.
pub fn to_json_writer<W: io::Write, C: Container>(writer: W, container: &C) -> Result<(), serde_json::Error> {
    serde_json::to_writer(writer, &JsonArray::of(container))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::container::BulkOnly;
    use std::collections::BTreeSet;

    /// Writer that accepts `limit` bytes and then reports a closed stream.
    struct ClosesAfter {
        written: Vec<u8>,
        limit: usize,
    }

    impl io::Write for ClosesAfter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.written.len() + buf.len() > self.limit {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream closed"));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn indexed_and_bulk_emit_the_same_array() {
        let indexed = vec![1i64, 2, 3];
        let bulk = BulkOnly(indexed.clone());
        assert_eq!(to_json_string(&indexed).unwrap(), "[1,2,3]");
        assert_eq!(to_json_string(&bulk).unwrap(), "[1,2,3]");
    }

    #[test]
    fn chars_become_one_character_strings() {
        assert_eq!(to_json_string(&vec!['a', 'b']).unwrap(), r#"["a","b"]"#);
    }

    #[test]
    fn floats_keep_their_shortest_form() {
        assert_eq!(to_json_string(&vec![0.1f32, 2.5]).unwrap(), "[0.1,2.5]");
        assert_eq!(to_json_string(&vec![0.1f64, -1.0]).unwrap(), "[0.1,-1.0]");
    }

    #[test]
    fn empty_container_is_empty_array() {
        let empty: BTreeSet<i16> = BTreeSet::new();
        assert_eq!(to_json_string(&empty).unwrap(), "[]");
    }

    #[test]
    fn writer_failure_propagates_with_prefix_written() {
        let mut out = ClosesAfter {
            written: Vec::new(),
            limit: 4,
        };
        let err = to_json_writer(&mut out, &vec![10i32, 20, 30]).unwrap_err();
        assert!(err.is_io(), "{err}");
        assert_eq!(String::from_utf8_lossy(&out.written), "[10,");
    }

    #[test]
    fn schema_uses_emitter_tag() {
        assert_eq!(
            schema_for(&TypeDescriptor::of::<Vec<char>>()),
            Some(json!({"type": "array", "items": {"type": "string"}}))
        );
        assert_eq!(
            schema_for(&TypeDescriptor::of::<BulkOnly<Vec<f32>>>()),
            Some(json!({"type": "array", "items": {"type": "number"}}))
        );
        assert_eq!(schema_for(&TypeDescriptor::opaque::<String>()), None);
    }
}
