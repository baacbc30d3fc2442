//! Per-element-kind emitters.
//!
//! Every element kind shares one emission shape, [`ContainerEmitter`], with two paths chosen once per call from the
//! value's [`Shape`]:
//! - **indexed**: positions `0..size` in ascending order;
//! - **visitor**: the container's own traversal order, stopping at the first sink failure.
//!
//! [`IndexedEmitter`] is the indexed-only specialization the registry hands out when a descriptor is known to be
//! random-access. Both paths write the same terms in the same order for the same contents.
//!
//! [`Emitter`] is the small `Copy` handle returned by the registry; it dispatches a dynamic [`ContainerValue`] to
//! the typed emitters above.

use std::marker::PhantomData;

use primcol_core::{ContainerType, ElementKind, Family, SchemaTag, kinds};

use crate::container::{BulkContainer, IndexedContainer, Shape};
use crate::element::Element;
use crate::errors::EmitError;
use crate::holder::ErrorHolder;
use crate::sink::Sink;
use crate::value::ContainerValue;

/// Which algorithm an [`Emitter`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmitPath {
    /// Accepts any container of the kind; picks indexed or visitor traversal per value.
    Generic,
    /// Accepts only random-access containers; always indexed traversal.
    Indexed,
}

/// Emission shape shared by all element kinds.
pub struct ContainerEmitter<T> {
    _element: PhantomData<fn(T)>,
}

impl<T: Element> ContainerEmitter<T> {
    pub const fn new() -> Self {
        Self { _element: PhantomData }
    }

    pub fn kind(&self) -> ElementKind {
        T::KIND
    }

    pub fn schema_tag(&self) -> SchemaTag {
        kinds::schema_tag(T::KIND)
    }

    /// Write every element of `shape` to `sink`.
    ///
    /// ## Errors
    /// - The first sink failure, verbatim. No further writes happen after it.
    pub fn emit_contents<S: Sink + ?Sized>(&self, shape: Shape<'_, T>, sink: &mut S) -> Result<(), S::Error> {
        match shape {
            Shape::Indexed(list) => write_indexed(list, sink),
            Shape::Bulk(container) => write_visited(container, sink),
        }
    }
}

impl<T: Element> Default for ContainerEmitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Indexed-only specialization of [`ContainerEmitter`].
pub struct IndexedEmitter<T> {
    _element: PhantomData<fn(T)>,
}

impl<T: Element> IndexedEmitter<T> {
    pub const fn new() -> Self {
        Self { _element: PhantomData }
    }

    pub fn emit_contents<S: Sink + ?Sized>(
        &self,
        list: &dyn IndexedContainer<T>,
        sink: &mut S,
    ) -> Result<(), S::Error> {
        write_indexed(list, sink)
    }
}

impl<T: Element> Default for IndexedEmitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn write_indexed<T: Element, S: Sink + ?Sized>(list: &dyn IndexedContainer<T>, sink: &mut S) -> Result<(), S::Error> {
    for index in 0..list.size() {
        list.element_at(index).write_to(sink)?;
    }
    Ok(())
}

fn write_visited<T: Element, S: Sink + ?Sized>(
    container: &dyn BulkContainer<T>,
    sink: &mut S,
) -> Result<(), S::Error> {
    let mut holder = ErrorHolder::new();
    container.for_each(&mut |value: T| holder.guard(|| value.write_to(&mut *sink)));
    holder.into_result()
}

/// Handle to a matched emitter, as returned by [`crate::EmitterRegistry::find`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Emitter {
    kind: ElementKind,
    path: EmitPath,
}

impl Emitter {
    pub const fn new(kind: ElementKind, path: EmitPath) -> Self {
        Self { kind, path }
    }

    pub const fn kind(&self) -> ElementKind {
        self.kind
    }

    pub const fn path(&self) -> EmitPath {
        self.path
    }

    pub const fn schema_tag(&self) -> SchemaTag {
        kinds::schema_tag(self.kind)
    }

    /// The widest container type this emitter accepts.
    pub const fn handled_type(&self) -> ContainerType {
        let family = match self.path {
            EmitPath::Generic => Family::Bulk,
            EmitPath::Indexed => Family::Indexed,
        };
        ContainerType::new(self.kind, family)
    }

    /// Check whether values of type `ty` can be written by this emitter.
    pub const fn accepts(&self, ty: ContainerType) -> bool {
        let handled = self.handled_type();
        ty.is_instance_of(handled.kind, handled.family)
    }

    /// Write the elements of `value` to `sink`.
    ///
    /// ## Errors
    /// - [`EmitError::Sink`] with the first sink failure; elements before it remain written.
    /// - [`EmitError::Mismatch`] if `value` is not of a type this emitter accepts. Nothing is written.
    pub fn emit_contents<S: Sink + ?Sized>(
        &self,
        value: ContainerValue<'_>,
        sink: &mut S,
    ) -> Result<(), EmitError<S::Error>> {
        let found = value.container_type();
        if !self.accepts(found) {
            return Err(EmitError::Mismatch {
                expected: self.handled_type(),
                found,
            });
        }
        let written = match value {
            ContainerValue::Byte(shape) => self.emit_shape(shape, sink),
            ContainerValue::Short(shape) => self.emit_shape(shape, sink),
            ContainerValue::Int(shape) => self.emit_shape(shape, sink),
            ContainerValue::Long(shape) => self.emit_shape(shape, sink),
            ContainerValue::Char(shape) => self.emit_shape(shape, sink),
            ContainerValue::Float(shape) => self.emit_shape(shape, sink),
            ContainerValue::Double(shape) => self.emit_shape(shape, sink),
        };
        written.map_err(EmitError::Sink)
    }

    fn emit_shape<T: Element, S: Sink + ?Sized>(&self, shape: Shape<'_, T>, sink: &mut S) -> Result<(), S::Error> {
        match (self.path, shape) {
            (EmitPath::Indexed, Shape::Indexed(list)) => IndexedEmitter::new().emit_contents(list, sink),
            // `accepts` rules out an indexed emitter meeting a bulk-only value.
            (_, shape) => ContainerEmitter::new().emit_contents(shape, sink),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::container::BulkOnly;
    use crate::testing::{FailingSink, Instrumented, RecordingSink, SinkFailure, Term};
    use std::ops::ControlFlow;

    /// Bulk container that keeps calling the visitor after being asked to stop.
    struct IgnoresBreak(Vec<i32>);

    impl BulkContainer<i32> for IgnoresBreak {
        fn for_each(&self, visitor: &mut dyn FnMut(i32) -> ControlFlow<()>) {
            for &v in &self.0 {
                let _ = visitor(v);
            }
        }
    }

    fn ints(values: &[i64]) -> Vec<Term> {
        values.iter().map(|&v| Term::Integer(v)).collect()
    }

    #[test]
    fn indexed_path_writes_in_position_order() {
        let data = vec![1i32, 2, 3];
        let mut sink = RecordingSink::new();
        ContainerEmitter::<i32>::new().emit_contents(Shape::Indexed(&data), &mut sink).unwrap();
        assert_eq!(sink.terms(), ints(&[1, 2, 3]).as_slice());
    }

    #[test]
    fn visitor_path_writes_in_traversal_order() {
        let data = BulkOnly(vec![9i64, 7, 8]);
        let mut sink = RecordingSink::new();
        ContainerEmitter::<i64>::new().emit_contents(Shape::Bulk(&data), &mut sink).unwrap();
        assert_eq!(sink.terms(), ints(&[9, 7, 8]).as_slice());
    }

    #[test]
    fn generic_emitter_prefers_indexed_access() {
        let data = Instrumented::new(vec![4i16, 5]);
        let mut sink = RecordingSink::new();
        ContainerEmitter::<i16>::new().emit_contents(Shape::Indexed(&data), &mut sink).unwrap();
        assert_eq!(data.element_at_calls(), 2);
        assert_eq!(data.for_each_calls(), 0);
    }

    #[test]
    fn visitor_failure_stops_after_nth_write() {
        let data = BulkOnly(vec![1i32, 2, 3, 4, 5]);
        let mut sink = FailingSink::failing_on(3);
        let result = ContainerEmitter::<i32>::new().emit_contents(Shape::Bulk(&data), &mut sink);
        assert_eq!(result, Err(SinkFailure { write: 3 }));
        assert_eq!(sink.attempts(), 3);
        assert_eq!(sink.written(), ints(&[1, 2]).as_slice());
    }

    #[test]
    fn failure_is_held_even_if_container_ignores_break() {
        let data = IgnoresBreak(vec![1, 2, 3, 4]);
        let mut sink = FailingSink::failing_on(2);
        let result = ContainerEmitter::<i32>::new().emit_contents(Shape::Bulk(&data), &mut sink);
        assert_eq!(result, Err(SinkFailure { write: 2 }));
        assert_eq!(sink.attempts(), 2);
    }

    #[test]
    fn indexed_failure_stops_after_nth_write() {
        let data = vec![1.5f64, 2.5, 3.5];
        let mut sink = FailingSink::failing_on(2);
        let result = IndexedEmitter::<f64>::new().emit_contents(&data, &mut sink);
        assert_eq!(result, Err(SinkFailure { write: 2 }));
        assert_eq!(sink.attempts(), 2);
        assert_eq!(sink.written(), &[Term::Float(1.5)]);
    }

    #[test]
    fn empty_containers_write_nothing() {
        let empty: Vec<char> = Vec::new();
        let mut sink = FailingSink::failing_on(1);
        ContainerEmitter::<char>::new().emit_contents(Shape::Indexed(&empty), &mut sink).unwrap();
        ContainerEmitter::<char>::new()
            .emit_contents(Shape::Bulk(&BulkOnly(empty.clone())), &mut sink)
            .unwrap();
        assert_eq!(sink.attempts(), 0);
    }

    #[test]
    fn chars_are_one_character_strings() {
        let data = vec!['a', 'b'];
        let mut sink = RecordingSink::new();
        Emitter::new(ElementKind::Char, EmitPath::Indexed)
            .emit_contents(ContainerValue::of(&data), &mut sink)
            .unwrap();
        assert_eq!(sink.terms(), &[Term::Text("a".into()), Term::Text("b".into())]);
    }

    #[test]
    fn indexed_emitter_rejects_bulk_values() {
        let data = BulkOnly(vec![1i32]);
        let mut sink = RecordingSink::new();
        let err = Emitter::new(ElementKind::Int, EmitPath::Indexed)
            .emit_contents(ContainerValue::of(&data), &mut sink)
            .unwrap_err();
        assert_eq!(
            err,
            EmitError::Mismatch {
                expected: ContainerType::new(ElementKind::Int, Family::Indexed),
                found: ContainerType::new(ElementKind::Int, Family::Bulk),
            }
        );
        assert!(sink.terms().is_empty());
    }

    #[test]
    fn emitter_rejects_other_kinds() {
        let data = vec![1i64];
        let mut sink = RecordingSink::new();
        let result = Emitter::new(ElementKind::Int, EmitPath::Generic).emit_contents(ContainerValue::of(&data), &mut sink);
        assert!(matches!(result, Err(EmitError::Mismatch { .. })));
    }

    #[test]
    fn schema_tags_follow_kind() {
        assert_eq!(ContainerEmitter::<f32>::new().schema_tag(), SchemaTag::Number);
        assert_eq!(ContainerEmitter::<char>::new().schema_tag(), SchemaTag::String);
        assert_eq!(Emitter::new(ElementKind::Byte, EmitPath::Generic).schema_tag(), SchemaTag::Integer);
    }
}
