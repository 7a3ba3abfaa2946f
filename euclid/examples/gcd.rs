use std::time::Instant;

use euclid::{gcd_mod, gcd_sub, wrap, wrap_byte, wrap_short, BigUint, EuclidError};
use num_traits::One;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn pow2(exp: u32) -> BigUint {
    BigUint::one() << exp
}

fn main() -> Result<(), EuclidError> {
    // RUST_LOG=euclid=trace shows every step
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!(
        "GCD(15, 6) = {} (gcd_sub) = {} (gcd_mod)",
        gcd_sub(15u32, 6),
        gcd_mod(15u32, 6)
    );

    let start = Instant::now();
    let d = gcd_mod(pow2(1000) + pow2(100) + 10u32, pow2(111) + 6u32);
    println!("GCD(2^1000+2^100+10, 2^111+6) = {d} (gcd_mod)");
    println!("Computation time = {:?}", start.elapsed());

    let start = Instant::now();
    let d = gcd_sub(pow2(25), pow2(5) + 1u32);
    println!("GCD(2^25, 2^5+1) = {d} (gcd_sub)");
    println!("Computation time = {:?}", start.elapsed());

    let start = Instant::now();
    let d = gcd_sub(pow2(25), BigUint::from(5u32 + 1));
    println!("GCD(2^25, 5+1) = {d} (gcd_sub)");
    println!("Computation time = {:?}", start.elapsed());

    let step = 15;
    let range = 100;
    println!("wrap {step}/{range} = {}", wrap(step, range)?);
    println!("wrap {step}/{} = {}", 1 << 8, wrap_byte(step));
    println!("wrap {step}/{} = {}", 1 << 16, wrap_short(step));

    Ok(())
}
