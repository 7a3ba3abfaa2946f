use std::fmt::Debug;

use num_traits::Zero;
use tracing::{debug, trace};

use crate::EuclidError;

/// Greatest common divisor by subtraction and by remainder.
pub trait Euclid: Sized {
    /// Calculates the Greatest Common Divisor (GCD) of the number and `other`
    /// by repeated subtraction. We require `self > 0` and `other > 0`.
    ///
    /// Each step replaces the pair `(a, b)` with `(|a - b|, min(a, b))` and the
    /// loop stops once `min(a, b) == 0`. The value left in `b` is returned.
    ///
    /// Since `|a - b|` only reaches zero from an equal pair `(g, g)`, the final
    /// step always lands on `(0, g)` and `b` holds the GCD. Outside the
    /// precondition nothing is corrected: `gcd_sub(0, b)` is `b` while
    /// `gcd_sub(a, 0)` is `0`.
    ///
    /// The number of steps grows with `max(a, b) / min(a, b)`.
    fn gcd_sub(self, other: Self) -> Self;

    /// Calculates the Greatest Common Divisor (GCD) of the number and `other`
    /// with the Euclidean algorithm. We require `self ≥ other > 0`.
    ///
    /// Each step replaces the pair `(a, b)` with `(b, a mod b)` until `b == 0`,
    /// then `a` is returned. A first operand smaller than the second is
    /// swapped by the first step, and `other == 0` returns `self` untouched.
    fn gcd_mod(self, other: Self) -> Self;

    /// Same as [`Euclid::gcd_sub`], but rejects a zero operand.
    fn try_gcd_sub(self, other: Self) -> Result<Self, EuclidError>
    where
        Self: Zero + Debug + 'static,
    {
        if self.is_zero() || other.is_zero() {
            return Err(EuclidError::ZeroOperand {
                lhs: Box::new(self),
                rhs: Box::new(other),
            });
        }
        Ok(self.gcd_sub(other))
    }

    /// Same as [`Euclid::gcd_mod`], but rejects `other == 0` and `self < other`.
    fn try_gcd_mod(self, other: Self) -> Result<Self, EuclidError>
    where
        Self: Zero + PartialOrd + Debug + 'static,
    {
        if other.is_zero() {
            return Err(EuclidError::ZeroOperand {
                lhs: Box::new(self),
                rhs: Box::new(other),
            });
        }
        if self < other {
            return Err(EuclidError::OperandOrder {
                lhs: Box::new(self),
                rhs: Box::new(other),
            });
        }
        Ok(self.gcd_mod(other))
    }
}

/// Subtractive GCD of `a` and `b`, see [`Euclid::gcd_sub`].
#[inline]
pub fn gcd_sub<T: Euclid>(a: T, b: T) -> T {
    a.gcd_sub(b)
}

/// Euclidean GCD of `a` and `b`, see [`Euclid::gcd_mod`].
#[inline]
pub fn gcd_mod<T: Euclid>(a: T, b: T) -> T {
    a.gcd_mod(b)
}

macro_rules! impl_euclid {
    ($($T:ty),*) => {
        $(
            impl Euclid for $T {
                fn gcd_sub(self, other: Self) -> Self {
                    let mut a = self;
                    let mut b = other;
                    let mut steps = 0usize;

                    while a.min(b) > 0 {
                        // (a, b) <- (|a - b|, min(a, b))
                        if a >= b {
                            a -= b;
                        } else {
                            b -= a;
                            ::core::mem::swap(&mut a, &mut b);
                        }
                        steps += 1;
                        trace!(a = ?a, b = ?b, "gcd_sub step");
                    }

                    debug!(steps, gcd = ?b, "gcd_sub done");
                    b
                }

                fn gcd_mod(self, other: Self) -> Self {
                    let mut a = self;
                    let mut b = other;
                    let mut steps = 0usize;

                    while b > 0 {
                        let r = a % b;
                        a = b;
                        b = r;
                        steps += 1;
                        trace!(a = ?a, b = ?b, "gcd_mod step");
                    }

                    debug!(steps, gcd = ?a, "gcd_mod done");
                    a
                }
            }
        )*
    };
}

impl_euclid!(u8, u16, u32, u64, u128, usize);

#[cfg(feature = "bigint")]
impl Euclid for num_bigint::BigUint {
    fn gcd_sub(self, other: Self) -> Self {
        let mut a = self;
        let mut b = other;
        let mut steps = 0usize;

        while !a.is_zero() && !b.is_zero() {
            if a >= b {
                a -= &b;
            } else {
                b -= &a;
                std::mem::swap(&mut a, &mut b);
            }
            steps += 1;
            trace!(a = %a, b = %b, "gcd_sub step");
        }

        debug!(steps, bits = b.bits(), "gcd_sub done");
        b
    }

    fn gcd_mod(self, other: Self) -> Self {
        let mut a = self;
        let mut b = other;
        let mut steps = 0usize;

        while !b.is_zero() {
            let r = &a % &b;
            a = b;
            b = r;
            steps += 1;
            trace!(a = %a, b = %b, "gcd_mod step");
        }

        debug!(steps, bits = a.bits(), "gcd_mod done");
        a
    }
}

#[cfg(test)]
mod tests {
    use rand::prelude::*;

    use super::*;

    type ValueT = u64;

    #[test]
    fn test_gcd_small() {
        assert_eq!(gcd_sub(15u32, 6), 3);
        assert_eq!(gcd_mod(15u32, 6), 3);
        assert_eq!(gcd_sub(6u8, 15), 3);
        assert_eq!(gcd_mod(6u8, 15), 3);
        assert_eq!(gcd_sub(17u16, 13), 1);
        assert_eq!(gcd_mod(u128::MAX, 5), 5);
    }

    #[test]
    fn test_gcd_mod_divides() {
        let mut rng = thread_rng();

        for _ in 0..1000 {
            let x = rng.gen_range(1..=ValueT::MAX);
            let y = rng.gen_range(1..=x);

            let d = ValueT::gcd_mod(x, y);
            assert_eq!(x % d, 0);
            assert_eq!(y % d, 0);
            assert_eq!(d, ValueT::gcd_mod(y, x));
            assert_eq!(d, gcd_mod(y, x % y));
        }
    }

    #[test]
    fn test_gcd_sub_agrees() {
        let mut rng = thread_rng();

        // the subtractive variant needs up to `max / min` steps
        for _ in 0..200 {
            let x = rng.gen_range(1..=u16::MAX as ValueT);
            let y = rng.gen_range(1..=x);
            let k = rng.gen_range(1..=1 << 20);

            assert_eq!(ValueT::gcd_sub(x * k, y * k), ValueT::gcd_mod(x * k, y * k));
            assert_eq!(gcd_sub(y, x), gcd_sub(x, y));
        }
    }

    #[test]
    fn test_out_of_precondition() {
        assert_eq!(gcd_sub(0u32, 9), 9);
        assert_eq!(gcd_sub(9u32, 0), 0);
        assert_eq!(gcd_mod(9u32, 0), 9);
        assert_eq!(gcd_mod(0u32, 9), 9);
    }

    #[test]
    fn test_checked() {
        assert_eq!(ValueT::try_gcd_sub(15, 6).unwrap(), 3);
        assert_eq!(ValueT::try_gcd_mod(15, 6).unwrap(), 3);

        assert!(matches!(
            ValueT::try_gcd_sub(0, 6),
            Err(EuclidError::ZeroOperand { .. })
        ));
        assert!(matches!(
            ValueT::try_gcd_sub(6, 0),
            Err(EuclidError::ZeroOperand { .. })
        ));
        assert!(matches!(
            ValueT::try_gcd_mod(6, 0),
            Err(EuclidError::ZeroOperand { .. })
        ));
        assert!(matches!(
            ValueT::try_gcd_mod(6, 15),
            Err(EuclidError::OperandOrder { .. })
        ));
    }
}
