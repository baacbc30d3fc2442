//! Container capabilities consumed by emitters.
//!
//! Two capability traits describe what a container can do:
//! - [`BulkContainer`]: visit every element; the visitor may ask to stop early.
//! - [`IndexedContainer`]: additionally `size()` and `element_at(i)` for `0 <= i < size`.
//!
//! Indexed refines bulk (it is a supertrait), so any indexed container can also be visited.
//!
//! ## Notes
//! - The capability of a concrete value is surfaced once, through [`Container::shape`]; emitters never probe types
//!   at runtime.
//! - Traversal order of bulk-only containers is whatever the container yields (e.g. hash order for `HashSet`).

use std::collections::{BTreeSet, HashSet, VecDeque};
use std::fmt;
use std::ops::ControlFlow;

use primcol_core::Family;

use crate::element::Element;

/// Visit-only access to a container's elements.
pub trait BulkContainer<T> {
    /// Apply `visitor` to each element exactly once, in the container's natural order.
    ///
    /// Implementations must check the returned [`ControlFlow`] between elements and stop traversing as soon as the
    /// visitor returns `Break`.
    fn for_each(&self, visitor: &mut dyn FnMut(T) -> ControlFlow<()>);
}

/// Random access by contiguous position.
pub trait IndexedContainer<T>: BulkContainer<T> {
    /// Number of elements.
    fn size(&self) -> usize;

    /// Element at `index`.
    ///
    /// ## Panics
    /// - If `index >= self.size()`.
    fn element_at(&self, index: usize) -> T;
}

fn visit_all<T>(values: impl Iterator<Item = T>, visitor: &mut dyn FnMut(T) -> ControlFlow<()>) {
    for value in values {
        if visitor(value).is_break() {
            return;
        }
    }
}

impl<T: Copy> BulkContainer<T> for [T] {
    fn for_each(&self, visitor: &mut dyn FnMut(T) -> ControlFlow<()>) {
        visit_all(self.iter().copied(), visitor);
    }
}

impl<T: Copy> IndexedContainer<T> for [T] {
    fn size(&self) -> usize {
        self.len()
    }

    fn element_at(&self, index: usize) -> T {
        self[index]
    }
}

impl<T: Copy> BulkContainer<T> for Vec<T> {
    fn for_each(&self, visitor: &mut dyn FnMut(T) -> ControlFlow<()>) {
        self.as_slice().for_each(visitor);
    }
}

impl<T: Copy> IndexedContainer<T> for Vec<T> {
    fn size(&self) -> usize {
        self.len()
    }

    fn element_at(&self, index: usize) -> T {
        self[index]
    }
}

impl<T: Copy> BulkContainer<T> for VecDeque<T> {
    fn for_each(&self, visitor: &mut dyn FnMut(T) -> ControlFlow<()>) {
        visit_all(self.iter().copied(), visitor);
    }
}

impl<T: Copy> IndexedContainer<T> for VecDeque<T> {
    fn size(&self) -> usize {
        self.len()
    }

    fn element_at(&self, index: usize) -> T {
        self[index]
    }
}

impl<T: Copy, S> BulkContainer<T> for HashSet<T, S> {
    fn for_each(&self, visitor: &mut dyn FnMut(T) -> ControlFlow<()>) {
        visit_all(self.iter().copied(), visitor);
    }
}

impl<T: Copy> BulkContainer<T> for BTreeSet<T> {
    fn for_each(&self, visitor: &mut dyn FnMut(T) -> ControlFlow<()>) {
        visit_all(self.iter().copied(), visitor);
    }
}

impl<T, C: BulkContainer<T> + ?Sized> BulkContainer<T> for &C {
    fn for_each(&self, visitor: &mut dyn FnMut(T) -> ControlFlow<()>) {
        (**self).for_each(visitor);
    }
}

impl<T, C: IndexedContainer<T> + ?Sized> IndexedContainer<T> for &C {
    fn size(&self) -> usize {
        (**self).size()
    }

    fn element_at(&self, index: usize) -> T {
        (**self).element_at(index)
    }
}

/// The capability view of a concrete container value.
pub enum Shape<'a, T> {
    Bulk(&'a dyn BulkContainer<T>),
    Indexed(&'a dyn IndexedContainer<T>),
}

impl<T> Shape<'_, T> {
    pub fn family(&self) -> Family {
        match self {
            Shape::Bulk(_) => Family::Bulk,
            Shape::Indexed(_) => Family::Indexed,
        }
    }

    /// Element count, when known without traversing.
    pub fn len_hint(&self) -> Option<usize> {
        match self {
            Shape::Bulk(_) => None,
            Shape::Indexed(list) => Some(list.size()),
        }
    }
}

// Manual impls: derives would bound `T: Clone` and `T: Debug`.
impl<T> Clone for Shape<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Shape<'_, T> {}

impl<T> fmt::Debug for Shape<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Bulk(_) => f.write_str("Shape::Bulk(..)"),
            Shape::Indexed(list) => write!(f, "Shape::Indexed(size = {})", list.size()),
        }
    }
}

/// A concrete container type whose element kind and family are known statically.
///
/// This is what a host uses to build a [`crate::TypeDescriptor`] and a [`crate::ContainerValue`] for a value.
pub trait Container {
    type Element: Element;

    /// The narrowest family this type belongs to.
    const FAMILY: Family;

    /// View the value through its capability.
    fn shape(&self) -> Shape<'_, Self::Element>;
}

impl<T: Element> Container for Vec<T> {
    type Element = T;
    const FAMILY: Family = Family::Indexed;

    fn shape(&self) -> Shape<'_, T> {
        Shape::Indexed(self)
    }
}

impl<T: Element> Container for VecDeque<T> {
    type Element = T;
    const FAMILY: Family = Family::Indexed;

    fn shape(&self) -> Shape<'_, T> {
        Shape::Indexed(self)
    }
}

impl<T: Element> Container for &[T] {
    type Element = T;
    const FAMILY: Family = Family::Indexed;

    fn shape(&self) -> Shape<'_, T> {
        Shape::Indexed(self)
    }
}

impl<T: Element, S> Container for HashSet<T, S> {
    type Element = T;
    const FAMILY: Family = Family::Bulk;

    fn shape(&self) -> Shape<'_, T> {
        Shape::Bulk(self)
    }
}

impl<T: Element> Container for BTreeSet<T> {
    type Element = T;
    const FAMILY: Family = Family::Bulk;

    fn shape(&self) -> Shape<'_, T> {
        Shape::Bulk(self)
    }
}

/// Expose only the bulk capability of a container.
///
/// ## Examples
/// ```rust
/// use primcol_runtime::{BulkOnly, Container};
/// use primcol_core::Family;
///
/// assert_eq!(<Vec<i64> as Container>::FAMILY, Family::Indexed);
/// assert_eq!(<BulkOnly<Vec<i64>> as Container>::FAMILY, Family::Bulk);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkOnly<C>(pub C);

impl<T, C: BulkContainer<T>> BulkContainer<T> for BulkOnly<C> {
    fn for_each(&self, visitor: &mut dyn FnMut(T) -> ControlFlow<()>) {
        self.0.for_each(visitor);
    }
}

impl<C> Container for BulkOnly<C>
where
    C: Container + BulkContainer<<C as Container>::Element>,
{
    type Element = C::Element;
    const FAMILY: Family = Family::Bulk;

    fn shape(&self) -> Shape<'_, C::Element> {
        Shape::Bulk(self)
    }
}
