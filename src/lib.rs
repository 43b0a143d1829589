//! Strided absolute-sum reduction (BLAS `asum`) over slices and
//! accessor-backed sequences.
//!
//! # Core API
//!
//! - [`asum`]: `sum(|x[offset + i * stride]|)` for `i` in `0..n`
//! - [`asum_blas`]: the same, with the offset derived from the stride the BLAS
//!   way ([`stride2offset`])
//! - [`try_asum`]: bounds-checked variant returning [`StridedError`]
//!
//! # Input kinds
//!
//! Every input implements [`Sequence`] and is classified per call into an
//! [`ArrayObject`]:
//!
//! - Directly indexable: `[T]`, `Vec<T>`, `[T; N]`
//! - Accessor-mediated: `Vec<Cell<T>>`, `[Cell<T>; N]`, [`from_fn`],
//!   [`map_slice`], and any `dyn` [`Accessor`]
//!
//! Directly indexable input is reduced on a plain slice. Contiguous input
//! (`stride == 1`) is summed in blocks of [`UNROLL`], and a zero stride is
//! evaluated as `|x[offset] * n|`. Accessor-mediated input is read one element
//! at a time through [`Accessor::get`].
//!
//! # Example
//!
//! ```rust
//! use std::cell::Cell;
//! use strided_asum::{asum, map_slice};
//!
//! let x = vec![1.0, -2.0, 3.0, -4.0, 5.0];
//! assert_eq!(asum(x.len(), &x, 1, 0), 15.0);
//!
//! // Elements computed on read.
//! let doubled = map_slice(&x, |v: &f64| 2.0 * v);
//! assert_eq!(asum(x.len(), &doubled, 1, 0), 30.0);
//!
//! // Getter-only storage.
//! let cells: Vec<Cell<f64>> = x.iter().copied().map(Cell::new).collect();
//! let s: f64 = asum(3, &cells, 2, 0);
//! assert_eq!(s, 9.0);
//! ```
//!
//! # Features
//!
//! - `simd`: run the contiguous path under `pulp` runtime target-feature
//!   dispatch. Summation order is unchanged.

mod accessor;
mod asum;
mod scalar;
mod simd;

pub use accessor::{
    array_object, from_fn, map_slice, Accessor, AccessorObject, ArrayObject, FromFn, MappedSlice,
    Sequence,
};
pub use asum::{asum, asum_blas, stride2offset, try_asum, UNROLL};
pub use scalar::AsumScalar;

// ============================================================================
// Error types
// ============================================================================

/// Errors reported by [`try_asum`].
#[derive(Debug, thiserror::Error)]
pub enum StridedError {
    /// A visited index lies outside the sequence.
    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds { index: isize, len: usize },

    /// Integer overflow while computing an element index.
    #[error("offset overflow while computing index")]
    OffsetOverflow,
}

/// Result type for checked strided operations.
pub type Result<T> = std::result::Result<T, StridedError>;
