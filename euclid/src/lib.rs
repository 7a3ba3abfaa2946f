#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! Greatest common divisor by repeated subtraction and by the Euclidean algorithm,
//! over primitive unsigned integers and arbitrary-precision [`BigUint`].

pub mod arith;
pub mod error;

pub use arith::{gcd_mod, gcd_sub, wrap, wrap_byte, wrap_short, Euclid};
pub use error::EuclidError;

#[cfg(feature = "bigint")]
pub use num_bigint::BigUint;
