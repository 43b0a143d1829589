//! Scalar type bounds for absolute-sum reductions.

use num_traits::Zero;
use std::ops::{Add, Mul};

/// Element types that can be reduced by [`asum`](crate::asum).
///
/// Besides plain arithmetic, a type needs two things:
/// - [`abs`](AsumScalar::abs): its magnitude, in its own type
/// - [`from_count`](AsumScalar::from_count): a conversion from an element
///   count, used by the zero-stride shortcut `|x * n|`
///
/// No overflow checking is performed anywhere: integer types follow the usual
/// Rust arithmetic semantics of the build profile.
pub trait AsumScalar: Copy + Zero + Add<Output = Self> + Mul<Output = Self> {
    fn abs(self) -> Self;

    fn from_count(n: usize) -> Self;
}

macro_rules! impl_asum_scalar {
    ($($t:ty),*) => {
        $(
            impl AsumScalar for $t {
                #[inline(always)]
                fn abs(self) -> Self {
                    <$t>::abs(self)
                }

                #[inline(always)]
                fn from_count(n: usize) -> Self {
                    n as $t
                }
            }
        )*
    };
}

impl_asum_scalar!(f32, f64, i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_asum_scalar<T: AsumScalar>() {}

    #[test]
    fn test_standard_types() {
        assert_asum_scalar::<f32>();
        assert_asum_scalar::<f64>();
        assert_asum_scalar::<i32>();
        assert_asum_scalar::<i64>();
    }

    #[test]
    fn test_abs_and_count() {
        assert_eq!(AsumScalar::abs(-2.5f64), 2.5);
        assert_eq!(AsumScalar::abs(-7i32), 7);
        assert_eq!(<f32 as AsumScalar>::from_count(6), 6.0);
        assert_eq!(<i64 as AsumScalar>::from_count(3), 3);
    }

    #[test]
    fn test_custom_type() {
        // Fixed-point value in thousandths.
        #[derive(Debug, Clone, Copy, PartialEq)]
        struct Milli(i64);

        impl Add for Milli {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Milli(self.0 + rhs.0)
            }
        }

        impl Mul for Milli {
            type Output = Self;
            fn mul(self, rhs: Self) -> Self {
                Milli(self.0 * rhs.0 / 1000)
            }
        }

        impl Zero for Milli {
            fn zero() -> Self {
                Milli(0)
            }
            fn is_zero(&self) -> bool {
                self.0 == 0
            }
        }

        impl AsumScalar for Milli {
            fn abs(self) -> Self {
                Milli(self.0.abs())
            }
            fn from_count(n: usize) -> Self {
                Milli(n as i64 * 1000)
            }
        }

        assert_asum_scalar::<Milli>();
        assert_eq!(Milli(-1500).abs(), Milli(1500));
        assert_eq!(Milli(-1500) * Milli::from_count(2), Milli(-3000));
        assert!(Milli::zero().is_zero());
    }
}
