//! Deterministic string-seeded pseudo-random values.
//!
//! Every numeric field of a generated report is derived from a seed string such as
//! `https://example.com_pro_perf`. The seed is hashed with the classic 31-multiplier
//! rolling hash over UTF-16 code units (32-bit wrapping, then absolute value), and the
//! hash is fed through `frac(sin(x) * 10000)` to obtain a float in `[0, 1)`.
//!
//! Nothing here is cryptographic. The only requirement is that the same seed produces
//! the same value on every call, in every process, on every platform, with no stored
//! state. Collisions between unrelated seeds are accepted.

/// Hashes a seed string into a non-negative integer.
///
/// Equivalent to `hash = hash * 31 + code_unit` over the UTF-16 encoding of `seed`,
/// truncated to a signed 32-bit integer at every step, followed by the absolute value.
/// The result is returned as `u32` so that `i32::MIN` maps to `2147483648` instead of
/// overflowing.
///
/// # Examples
///
/// ```
/// use site_audit::seed::hash;
///
/// assert_eq!(hash(""), 0);
/// assert_eq!(hash("a"), 97);
/// assert_eq!(hash("hello"), 99_162_322);
/// ```
pub fn hash(seed: &str) -> u32 {
    let mut acc: i32 = 0;
    for unit in seed.encode_utf16() {
        acc = acc.wrapping_mul(31).wrapping_add(i32::from(unit));
    }
    acc.unsigned_abs()
}

/// Maps an integer to a float in `[0, 1)` using the fractional part of `sin(n) * 10000`.
pub fn seeded_random(n: u32) -> f64 {
    let x = f64::from(n).sin() * 10_000.0;
    let frac = x - x.floor();
    // Guards the (theoretical) rounding case where the subtraction lands on 1.0.
    if frac >= 1.0 {
        0.0
    } else {
        frac
    }
}

/// Returns a reproducible integer in `[min, max]` (inclusive) for `seed`.
///
/// If `max < min` the bounds are swapped.
pub fn deterministic_value(seed: &str, min: u32, max: u32) -> u32 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let span = f64::from(hi - lo) + 1.0;
    let offset = (seeded_random(hash(seed)) * span).floor();
    // offset < span by construction of seeded_random, so it always fits in the range.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let offset = offset as u32;
    lo + offset.min(hi - lo)
}

/// Builds the seed string for one report field: `<url>_<plan>_<field>`.
pub fn field_seed(normalized_url: &str, plan: &str, field: &str) -> String {
    format!("{normalized_url}_{plan}_{field}")
}
