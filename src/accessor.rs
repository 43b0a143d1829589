//! Classification of sequence-like inputs into directly indexable storage or
//! accessor-mediated storage.
//!
//! A reduction asks its input for an [`ArrayObject`] once per call and then
//! commits to one code path:
//!
//! - [`ArrayObject::Indexed`]: a plain slice, read with ordinary indexing and no
//!   per-element indirection
//! - [`ArrayObject::Accessor`]: a handle whose elements are produced by
//!   [`Accessor::get`], e.g. [`Cell`] storage or views that compute on read
//!
//! Building an [`ArrayObject`] never reads an element.

use std::cell::Cell;
use std::fmt;

/// Element read protocol for sequences that cannot be indexed directly.
pub trait Accessor<T> {
    /// Number of readable elements.
    fn len(&self) -> usize;

    /// Read the element at `index`.
    ///
    /// Behavior for `index >= self.len()` is up to the implementation; the
    /// types in this crate panic.
    fn get(&self, index: usize) -> T;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Anything a strided reduction accepts as input.
pub trait Sequence<T> {
    fn as_array_object(&self) -> ArrayObject<'_, T>;
}

/// Result of classifying a [`Sequence`].
pub enum ArrayObject<'a, T> {
    /// Directly indexable storage.
    Indexed(&'a [T]),
    /// Storage read through an [`Accessor`].
    Accessor(AccessorObject<'a, T>),
}

impl<'a, T> ArrayObject<'a, T> {
    #[inline]
    pub fn has_accessors(&self) -> bool {
        matches!(self, ArrayObject::Accessor(_))
    }

    #[inline]
    pub fn len(&self) -> usize {
        match self {
            ArrayObject::Indexed(data) => data.len(),
            ArrayObject::Accessor(obj) => obj.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> fmt::Debug for ArrayObject<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayObject::Indexed(data) => f.debug_tuple("Indexed").field(&data.len()).finish(),
            ArrayObject::Accessor(obj) => f.debug_tuple("Accessor").field(&obj.len()).finish(),
        }
    }
}

/// Type-erased accessor handle: the storage and its read function in one.
#[derive(Clone, Copy)]
pub struct AccessorObject<'a, T> {
    data: &'a dyn Accessor<T>,
}

impl<'a, T> AccessorObject<'a, T> {
    #[inline]
    pub fn new(data: &'a dyn Accessor<T>) -> Self {
        Self { data }
    }

    #[inline]
    pub fn data(&self) -> &'a dyn Accessor<T> {
        self.data
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> T {
        self.data.get(index)
    }
}

/// Classify `x`. Equivalent to `x.as_array_object()`.
#[inline]
pub fn array_object<T, S: Sequence<T> + ?Sized>(x: &S) -> ArrayObject<'_, T> {
    x.as_array_object()
}

// ============================================================================
// Directly indexable storage
// ============================================================================

impl<T> Sequence<T> for [T] {
    #[inline]
    fn as_array_object(&self) -> ArrayObject<'_, T> {
        ArrayObject::Indexed(self)
    }
}

impl<T> Sequence<T> for Vec<T> {
    #[inline]
    fn as_array_object(&self) -> ArrayObject<'_, T> {
        ArrayObject::Indexed(self.as_slice())
    }
}

impl<T, const N: usize> Sequence<T> for [T; N] {
    #[inline]
    fn as_array_object(&self) -> ArrayObject<'_, T> {
        ArrayObject::Indexed(self.as_slice())
    }
}

// ============================================================================
// Accessor-mediated storage
// ============================================================================

impl<'s, T> Sequence<T> for dyn Accessor<T> + 's {
    #[inline]
    fn as_array_object(&self) -> ArrayObject<'_, T> {
        ArrayObject::Accessor(AccessorObject::new(self))
    }
}

impl<T: Copy> Accessor<T> for Vec<Cell<T>> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> T {
        self[index].get()
    }
}

impl<T: Copy> Sequence<T> for Vec<Cell<T>> {
    #[inline]
    fn as_array_object(&self) -> ArrayObject<'_, T> {
        ArrayObject::Accessor(AccessorObject::new(self))
    }
}

impl<T: Copy, const N: usize> Accessor<T> for [Cell<T>; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> T {
        self[index].get()
    }
}

impl<T: Copy, const N: usize> Sequence<T> for [Cell<T>; N] {
    #[inline]
    fn as_array_object(&self) -> ArrayObject<'_, T> {
        ArrayObject::Accessor(AccessorObject::new(self))
    }
}

/// Sequence whose elements are computed on read.
///
/// Created by [`from_fn`].
#[derive(Clone, Copy)]
pub struct FromFn<F> {
    len: usize,
    f: F,
}

/// Create a sequence of `len` elements where element `i` is `f(i)`.
///
/// ```rust
/// use strided_asum::{asum, from_fn};
///
/// let alternating = from_fn(4, |i| if i % 2 == 0 { 1.0 } else { -1.0 });
/// assert_eq!(asum(4, &alternating, 1, 0), 4.0);
/// ```
pub fn from_fn<T, F: Fn(usize) -> T>(len: usize, f: F) -> FromFn<F> {
    FromFn { len, f }
}

impl<T, F: Fn(usize) -> T> Accessor<T> for FromFn<F> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn get(&self, index: usize) -> T {
        assert!(
            index < self.len,
            "index {index} out of range for sequence of length {}",
            self.len
        );
        (self.f)(index)
    }
}

impl<T, F: Fn(usize) -> T> Sequence<T> for FromFn<F> {
    #[inline]
    fn as_array_object(&self) -> ArrayObject<'_, T> {
        ArrayObject::Accessor(AccessorObject::new(self))
    }
}

/// View over a slice that applies a function to each element on read.
///
/// Created by [`map_slice`].
#[derive(Clone, Copy)]
pub struct MappedSlice<'a, S, F> {
    data: &'a [S],
    f: F,
}

/// Create a lazily mapped view over `data`.
pub fn map_slice<S, T, F: Fn(&S) -> T>(data: &[S], f: F) -> MappedSlice<'_, S, F> {
    MappedSlice { data, f }
}

impl<'a, S, F> MappedSlice<'a, S, F> {
    #[inline]
    pub fn data(&self) -> &'a [S] {
        self.data
    }
}

impl<S, T, F: Fn(&S) -> T> Accessor<T> for MappedSlice<'_, S, F> {
    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn get(&self, index: usize) -> T {
        (self.f)(&self.data[index])
    }
}

impl<S, T, F: Fn(&S) -> T> Sequence<T> for MappedSlice<'_, S, F> {
    #[inline]
    fn as_array_object(&self) -> ArrayObject<'_, T> {
        ArrayObject::Accessor(AccessorObject::new(self))
    }
}
