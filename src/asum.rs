//! Strided absolute-sum kernel.
//!
//! Computes `sum(|x[offset + i * stride]|)` for `i` in `0..n`. The input is
//! classified once per call into an [`ArrayObject`], and then one of four
//! paths runs to completion:
//!
//! | input | stride | path |
//! |---|---|---|
//! | accessor-mediated | any | one [`Accessor::get`](crate::Accessor::get) per element |
//! | indexed | `0` | `abs(x[offset] * n)`, a single multiply |
//! | indexed | `1` | remainder loop, then blocks of [`UNROLL`] |
//! | indexed | other | one element per step |

use crate::accessor::{array_object, AccessorObject, ArrayObject, Sequence};
use crate::scalar::AsumScalar;
use crate::simd;
use crate::{Result, StridedError};

/// Number of elements summed per iteration of the contiguous path.
pub const UNROLL: usize = 6;

/// Sum of absolute values of `n` elements of `x`, starting at `offset` and
/// stepping by `stride`.
///
/// `n == 0` returns zero without reading `x`. Every visited index must lie
/// within `x`; violating this panics for slices and does whatever the
/// [`Accessor`](crate::Accessor) does for accessor-mediated input. Use
/// [`try_asum`] to get an error instead.
///
/// ```rust
/// use strided_asum::asum;
///
/// let x = [1.0, -2.0, 3.0, -4.0, 5.0];
/// assert_eq!(asum(5, &x, 1, 0), 15.0);
///
/// // Visit indices 1, 3, 5, 7.
/// let y = [1.0, 1.0, 1.0, -2.0, 2.0, 2.0, 3.0, -3.0];
/// assert_eq!(asum(4, &y, 2, 1), 8.0);
/// ```
pub fn asum<T, S>(n: usize, x: &S, stride: isize, offset: usize) -> T
where
    T: AsumScalar,
    S: Sequence<T> + ?Sized,
{
    if n == 0 {
        return T::zero();
    }
    asum_object(n, array_object(x), stride, offset)
}

/// [`asum`] with the BLAS offset convention: a negative `stride` starts from
/// the last visited element, so the same `n` elements are reduced either way.
///
/// ```rust
/// use strided_asum::asum_blas;
///
/// let x = [1.0, -2.0, 3.0, -4.0];
/// assert_eq!(asum_blas(2, &x, 2), 4.0);
/// assert_eq!(asum_blas(2, &x, -2), 4.0);
/// ```
pub fn asum_blas<T, S>(n: usize, x: &S, stride: isize) -> T
where
    T: AsumScalar,
    S: Sequence<T> + ?Sized,
{
    asum(n, x, stride, stride2offset(n, stride))
}

/// Checked [`asum`]: verifies that every visited index lies in `x` before
/// reading anything.
///
/// ```rust
/// use strided_asum::{try_asum, StridedError};
///
/// let x = [1.0, -2.0, 3.0];
/// assert_eq!(try_asum(2, &x, 2, 0).unwrap(), 4.0);
/// assert!(matches!(
///     try_asum(2, &x, 2, 1),
///     Err(StridedError::OutOfBounds { index: 3, len: 3 })
/// ));
/// ```
pub fn try_asum<T, S>(n: usize, x: &S, stride: isize, offset: usize) -> Result<T>
where
    T: AsumScalar,
    S: Sequence<T> + ?Sized,
{
    if n == 0 {
        return Ok(T::zero());
    }
    let obj = array_object(x);
    validate_bounds(obj.len(), n, stride, offset)?;
    Ok(asum_object(n, obj, stride, offset))
}

/// Starting index for `n` elements at `stride` under the BLAS convention.
///
/// Zero for non-negative strides, `(n - 1) * |stride|` otherwise.
#[inline]
pub fn stride2offset(n: usize, stride: isize) -> usize {
    if stride >= 0 || n == 0 {
        return 0;
    }
    (n - 1) * stride.unsigned_abs()
}

/// Validate that indices `offset + i * stride` for `i` in `0..n` stay within
/// `[0, len)`.
fn validate_bounds(len: usize, n: usize, stride: isize, offset: usize) -> Result<()> {
    if n == 0 {
        return Ok(());
    }
    let first = isize::try_from(offset).map_err(|_| StridedError::OffsetOverflow)?;
    let steps = isize::try_from(n - 1).map_err(|_| StridedError::OffsetOverflow)?;
    let last = stride
        .checked_mul(steps)
        .and_then(|span| first.checked_add(span))
        .ok_or(StridedError::OffsetOverflow)?;
    // Indices are linear in `i`, so checking both ends covers the range.
    for index in [first, last] {
        if index < 0 || index as usize >= len {
            return Err(StridedError::OutOfBounds { index, len });
        }
    }
    Ok(())
}

fn asum_object<T: AsumScalar>(
    n: usize,
    obj: ArrayObject<'_, T>,
    stride: isize,
    offset: usize,
) -> T {
    match obj {
        ArrayObject::Accessor(acc) => {
            log::trace!("asum: accessor path n={n} stride={stride} offset={offset}");
            asum_accessor(n, &acc, stride, offset)
        }
        ArrayObject::Indexed(data) => asum_indexed(n, data, stride, offset),
    }
}

fn asum_accessor<T: AsumScalar>(
    n: usize,
    x: &AccessorObject<'_, T>,
    stride: isize,
    offset: usize,
) -> T {
    let mut sum = T::zero();
    let mut ix = offset as isize;
    for _ in 0..n {
        sum = sum + x.get(ix as usize).abs();
        ix = ix.wrapping_add(stride);
    }
    sum
}

fn asum_indexed<T: AsumScalar>(n: usize, x: &[T], stride: isize, offset: usize) -> T {
    if stride == 0 {
        log::trace!("asum: zero-stride path n={n} offset={offset}");
        return (x[offset] * T::from_count(n)).abs();
    }
    if stride == 1 {
        log::trace!("asum: contiguous path n={n} offset={offset}");
        let src = &x[offset..offset + n];
        return simd::dispatch_if_large(n, || asum_contiguous(src));
    }

    log::trace!("asum: strided path n={n} stride={stride} offset={offset}");
    let mut sum = T::zero();
    let mut ix = offset as isize;
    for _ in 0..n {
        sum = sum + x[ix as usize].abs();
        ix = ix.wrapping_add(stride);
    }
    sum
}

/// Remainder first, then blocks of six. Each block is summed left to right
/// before it is added to the accumulator; this grouping fixes the rounding.
#[inline(always)]
fn asum_contiguous<T: AsumScalar>(src: &[T]) -> T {
    let (head, body) = src.split_at(src.len() % UNROLL);

    let mut sum = T::zero();
    for &v in head {
        sum = sum + v.abs();
    }
    for c in body.chunks_exact(UNROLL) {
        sum = sum + (c[0].abs() + c[1].abs() + c[2].abs() + c[3].abs() + c[4].abs() + c[5].abs());
    }
    sum
}
