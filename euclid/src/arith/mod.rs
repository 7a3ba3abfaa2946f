//! Define the GCD algorithms and the wrap-around counters built on them.

mod gcd;
mod wrap;

pub use gcd::{gcd_mod, gcd_sub, Euclid};
pub use wrap::{wrap, wrap_byte, wrap_short};
