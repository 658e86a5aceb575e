//! Core ternary types shared across the tcrypt workspace

/// A balanced-ternary digit.
///
/// Valid values are `-1`, `0` and `1`. Buffers of trits are plain slices; the
/// types that own them (tryte strings, keys, sponge state) are responsible for
/// keeping the values in range.
pub type Trit = i8;

/// Smallest valid trit value
pub const MIN_TRIT: Trit = -1;

/// Largest valid trit value
pub const MAX_TRIT: Trit = 1;

/// Returns `true` if `value` is a valid balanced trit
#[inline(always)]
pub fn is_trit(value: Trit) -> bool {
    (MIN_TRIT..=MAX_TRIT).contains(&value)
}

/// Returns `true` if every value in `trits` is a valid balanced trit
#[inline]
pub fn all_trits(trits: &[Trit]) -> bool {
    trits.iter().all(|&t| is_trit(t))
}
