//! Primitive element types and how each one is written to a sink.

use std::fmt;

use primcol_core::ElementKind;

use crate::container::Shape;
use crate::sink::Sink;
use crate::value::ContainerValue;

/// A primitive element type with a fixed [`ElementKind`].
///
/// Implemented for exactly seven types: `i8`, `i16`, `i32`, `i64`, `char`, `f32`, `f64`.
pub trait Element: Copy + fmt::Debug + 'static {
    const KIND: ElementKind;

    /// Write this element with the sink operation for its kind.
    fn write_to<S: Sink + ?Sized>(self, sink: &mut S) -> Result<(), S::Error>;

    /// Wrap a typed shape into the dynamic carrier.
    fn into_value(shape: Shape<'_, Self>) -> ContainerValue<'_>;

    /// Extract a typed shape from the dynamic carrier, if the kinds agree.
    fn from_value(value: ContainerValue<'_>) -> Option<Shape<'_, Self>>;
}

macro_rules! element {
    ($ty:ty, $kind:ident, |$value:ident, $sink:ident| $write:expr) => {
        impl Element for $ty {
            const KIND: ElementKind = ElementKind::$kind;

            #[inline]
            fn write_to<S: Sink + ?Sized>(self, $sink: &mut S) -> Result<(), S::Error> {
                let $value = self;
                $write
            }

            fn into_value(shape: Shape<'_, Self>) -> ContainerValue<'_> {
                ContainerValue::$kind(shape)
            }

            fn from_value(value: ContainerValue<'_>) -> Option<Shape<'_, Self>> {
                match value {
                    ContainerValue::$kind(shape) => Some(shape),
                    _ => None,
                }
            }
        }
    };
}

element!(i8, Byte, |value, sink| sink.write_integer(i64::from(value)));
element!(i16, Short, |value, sink| sink.write_integer(i64::from(value)));
element!(i32, Int, |value, sink| sink.write_integer(i64::from(value)));
element!(i64, Long, |value, sink| sink.write_integer(value));
element!(char, Char, |value, sink| {
    let mut buf = [0u8; 4];
    sink.write_text(value.encode_utf8(&mut buf))
});
element!(f32, Float, |value, sink| sink.write_f32(value));
element!(f64, Double, |value, sink| sink.write_float(value));

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::testing::{RecordingSink, Term};

    #[test]
    fn char_is_written_as_one_character_text() {
        let mut sink = RecordingSink::new();
        'é'.write_to(&mut sink).unwrap();
        assert_eq!(sink.terms(), &[Term::Text("é".to_string())]);
    }

    #[test]
    fn integral_kinds_widen_losslessly() {
        let mut sink = RecordingSink::new();
        i8::MIN.write_to(&mut sink).unwrap();
        i16::MAX.write_to(&mut sink).unwrap();
        i32::MIN.write_to(&mut sink).unwrap();
        i64::MAX.write_to(&mut sink).unwrap();
        assert_eq!(
            sink.terms(),
            &[
                Term::Integer(-128),
                Term::Integer(32767),
                Term::Integer(-2147483648),
                Term::Integer(i64::MAX),
            ]
        );
    }

    #[test]
    fn value_round_trip_respects_kind() {
        let data = vec![1i32, 2];
        let value = i32::into_value(Shape::Indexed(&data));
        assert!(i32::from_value(value).is_some());
        assert!(i64::from_value(value).is_none());
    }
}
