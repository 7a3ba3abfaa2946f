//! Wrap-around counters.
//!
//! A counter starts at `step` and keeps advancing by `step`, wrapping at the
//! end of its range, until it lands on zero. The functions here return how many
//! non-zero positions were visited. For `0 < step < range` this equals
//! `range / gcd(step, range) - 1`.

use tracing::{debug, trace};

use crate::EuclidError;

/// Counts the non-zero positions visited while stepping by `step` modulo `range`.
///
/// The remainder takes the sign of the dividend, so a negative `step` walks the
/// negative residues. A `step` that is a non-zero multiple of `range` visits
/// only its own starting position.
pub fn wrap(step: i32, range: i32) -> Result<u32, EuclidError> {
    if range == 0 {
        return Err(EuclidError::ZeroRange);
    }
    let range = i64::from(range);
    Ok(count(step, |i| (i + i64::from(step)) % range))
}

/// Counts the non-zero positions of a signed 8-bit counter stepping by `step`.
pub fn wrap_byte(step: i32) -> u32 {
    count(step, |i| (i + i64::from(step)) as i8 as i64)
}

/// Counts the non-zero positions of a signed 16-bit counter stepping by `step`.
pub fn wrap_short(step: i32) -> u32 {
    count(step, |i| (i + i64::from(step)) as i16 as i64)
}

fn count(step: i32, advance: impl Fn(i64) -> i64) -> u32 {
    let mut n = 0;
    let mut prev = 0;
    let mut i = i64::from(step);

    while i != 0 {
        n += 1;
        trace!(position = i, wrapped = i < prev, "wrap step");
        prev = i;
        i = advance(i);
    }

    debug!(step, count = n, "wrap done");
    n
}
