//! Small number-theory helpers

/// `base^exp mod modulus` by repeated squaring.
pub fn mod_pow(base: u64, mut exp: u64, modulus: u64) -> u64 {
    let m = modulus as u128;
    let mut base = base as u128 % m;
    let mut acc = 1 % m;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = acc * base % m;
        }
        base = base * base % m;
        exp >>= 1;
    }
    acc as u64
}

pub fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

pub fn lcm(a: u64, b: u64) -> u64 {
    a / gcd(a, b) * b
}
