//! Runtime type descriptors used for registry lookup.

use std::any;
use std::fmt;

use primcol_core::{ContainerType, ElementKind, Family};

use crate::container::Container;
use crate::element::Element;

/// Describe a type the host wants to serialize.
///
/// Container types carry their [`ContainerType`]; anything else is opaque and never matches an emitter.
///
/// ## Examples
/// ```rust
/// use primcol_runtime::TypeDescriptor;
/// use primcol_core::{ElementKind, Family};
///
/// let list = TypeDescriptor::of::<Vec<i32>>();
/// assert!(list.is_instance_of(ElementKind::Int, Family::Bulk));
///
/// let text = TypeDescriptor::opaque::<String>();
/// assert_eq!(text.container_type(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    name: &'static str,
    container: Option<ContainerType>,
}

impl TypeDescriptor {
    /// Describe a statically known container type.
    pub fn of<C: Container + ?Sized>() -> Self {
        Self::for_container(
            any::type_name::<C>(),
            ContainerType::new(<C::Element as Element>::KIND, C::FAMILY),
        )
    }

    /// Describe a type this layer does not handle.
    pub fn opaque<T: ?Sized>() -> Self {
        Self {
            name: any::type_name::<T>(),
            container: None,
        }
    }

    /// Describe a container type by name, for hosts with their own container types.
    pub const fn for_container(name: &'static str, container: ContainerType) -> Self {
        Self {
            name,
            container: Some(container),
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn container_type(&self) -> Option<ContainerType> {
        self.container
    }

    /// Check whether the described type belongs to the `(kind, family)` container family.
    pub fn is_instance_of(&self, kind: ElementKind, family: Family) -> bool {
        self.container.is_some_and(|ty| ty.is_instance_of(kind, family))
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.container {
            Some(ty) => write!(f, "{} ({ty})", self.name),
            None => f.write_str(self.name),
        }
    }
}
