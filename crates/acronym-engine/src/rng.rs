// String hashing and the seeded linear-congruential stream
//
// The stream is a pure function of its seed: every call returns the drawn
// value together with the seed for the next draw, and callers thread that
// seed explicitly. Nothing here keeps state between calls.

/// LCG multiplier.
pub const LCG_MULTIPLIER: u64 = 9301;

/// LCG increment.
pub const LCG_INCREMENT: u64 = 49297;

/// LCG modulus. Drawn values are `seed / LCG_MODULUS`, so they lie in `[0, 1)`.
pub const LCG_MODULUS: u64 = 233_280;

/// 32-bit rolling hash of a string: `h = h * 31 + unit` over its UTF-16 code
/// units with wrapping arithmetic, returned as an absolute value.
pub fn string_seed(s: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in s.encode_utf16() {
        hash = (hash << 5).wrapping_sub(hash).wrapping_add(i32::from(unit));
    }
    hash.unsigned_abs()
}

/// Advance the stream by one step.
///
/// Returns `(value, next_seed)` where `value` is in `[0, 1)`.
pub fn next_random(seed: u32) -> (f64, u32) {
    let next = (u64::from(seed) * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
    // next < LCG_MODULUS, so it fits in u32.
    (next as f64 / LCG_MODULUS as f64, next as u32)
}

/// Seed for the `occurrence`-th occurrence (0-based) of `letter` in a word.
///
/// The canonical seed depends only on the letter and occurrence index, so a
/// letter picks the same company regardless of the surrounding word (as long
/// as its pool is not reduced by earlier letters). A `perturbation` is XORed
/// in to move the whole pass onto a different stream.
pub fn occurrence_seed(letter: char, occurrence: usize, perturbation: Option<u32>) -> u32 {
    let base = string_seed(&format!("{letter}{occurrence}"));
    match perturbation {
        Some(p) => base ^ p,
        None => base,
    }
}
