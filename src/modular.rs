//! Integer arithmetic modulo the alphabet size.

use crate::alphabet::ALPHABET_LEN;

/// The cipher modulus.
pub const MODULUS: i64 = ALPHABET_LEN as i64;

/// Reduces `x` into `[0, m)`. Negative inputs wrap to their positive
/// representative, unlike the `%` operator.
///
/// `m` must be positive.
pub fn normalize(x: i64, m: i64) -> i64 {
    ((x % m) + m) % m
}

/// Reduces `x` into `[0, 26)`.
///
/// # Examples
///
/// ```
/// use hillcipher::modular::normalize_mod26;
///
/// assert_eq!(normalize_mod26(27), 1);
/// assert_eq!(normalize_mod26(-1), 25);
/// assert_eq!(normalize_mod26(-52), 0);
/// ```
pub fn normalize_mod26(x: i64) -> i64 {
    normalize(x, MODULUS)
}

/// Greatest common divisor, always non-negative.
pub fn gcd(a: i64, b: i64) -> i64 {
    extended_gcd(a, b).0
}

/// Extended Euclidean algorithm.
///
/// # Returns
/// `(g, x, y)` with `a*x + b*y == g` and `g == gcd(a, b) >= 0`.
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    let (mut old_r, mut r) = (a, b);
    let (mut old_s, mut s) = (1i64, 0i64);
    let (mut old_t, mut t) = (0i64, 1i64);

    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
        (old_t, t) = (t, old_t - q * t);
    }

    if old_r < 0 {
        (-old_r, -old_s, -old_t)
    } else {
        (old_r, old_s, old_t)
    }
}

/// Modular multiplicative inverse of `a` modulo `m`.
///
/// # Returns
/// The unique `x` in `[1, m)` with `a*x ≡ 1 (mod m)`, or `None` when
/// `gcd(a, m) != 1`. `a` may be negative or larger than `m`.
///
/// # Examples
///
/// ```
/// use hillcipher::modular::{mod_inverse, MODULUS};
///
/// assert_eq!(mod_inverse(9, MODULUS), Some(3));
/// assert_eq!(mod_inverse(13, MODULUS), None);
/// ```
pub fn mod_inverse(a: i64, m: i64) -> Option<i64> {
    if m <= 1 {
        return None;
    }
    let (g, x, _) = extended_gcd(normalize(a, m), m);
    if g != 1 {
        return None;
    }
    Some(normalize(x, m))
}
