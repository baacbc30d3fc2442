//! The dynamic container carrier handed to matched emitters.

use primcol_core::{ContainerType, ElementKind, Family};

use crate::container::{Container, Shape};
use crate::descriptor::TypeDescriptor;
use crate::element::Element;

/// A container value of any supported element kind, viewed through its capability.
///
/// ## Examples
/// ```rust
/// use primcol_runtime::ContainerValue;
/// use primcol_core::{ElementKind, Family};
///
/// let data = vec!['a', 'b'];
/// let value = ContainerValue::of(&data);
/// assert_eq!(value.kind(), ElementKind::Char);
/// assert_eq!(value.family(), Family::Indexed);
/// ```
#[derive(Debug, Clone, Copy)]
pub enum ContainerValue<'a> {
    Byte(Shape<'a, i8>),
    Short(Shape<'a, i16>),
    Int(Shape<'a, i32>),
    Long(Shape<'a, i64>),
    Char(Shape<'a, char>),
    Float(Shape<'a, f32>),
    Double(Shape<'a, f64>),
}

impl<'a> ContainerValue<'a> {
    /// Wrap a statically typed container.
    pub fn of<C: Container>(container: &'a C) -> Self {
        C::Element::into_value(container.shape())
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            ContainerValue::Byte(_) => ElementKind::Byte,
            ContainerValue::Short(_) => ElementKind::Short,
            ContainerValue::Int(_) => ElementKind::Int,
            ContainerValue::Long(_) => ElementKind::Long,
            ContainerValue::Char(_) => ElementKind::Char,
            ContainerValue::Float(_) => ElementKind::Float,
            ContainerValue::Double(_) => ElementKind::Double,
        }
    }

    pub fn family(&self) -> Family {
        match self {
            ContainerValue::Byte(shape) => shape.family(),
            ContainerValue::Short(shape) => shape.family(),
            ContainerValue::Int(shape) => shape.family(),
            ContainerValue::Long(shape) => shape.family(),
            ContainerValue::Char(shape) => shape.family(),
            ContainerValue::Float(shape) => shape.family(),
            ContainerValue::Double(shape) => shape.family(),
        }
    }

    /// Element count, when known without traversing (indexed values only).
    pub fn len_hint(&self) -> Option<usize> {
        match self {
            ContainerValue::Byte(shape) => shape.len_hint(),
            ContainerValue::Short(shape) => shape.len_hint(),
            ContainerValue::Int(shape) => shape.len_hint(),
            ContainerValue::Long(shape) => shape.len_hint(),
            ContainerValue::Char(shape) => shape.len_hint(),
            ContainerValue::Float(shape) => shape.len_hint(),
            ContainerValue::Double(shape) => shape.len_hint(),
        }
    }

    pub fn container_type(&self) -> ContainerType {
        ContainerType::new(self.kind(), self.family())
    }

    /// Describe this value for registry lookup.
    pub fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::for_container(std::any::type_name::<ContainerValue<'static>>(), self.container_type())
    }
}
