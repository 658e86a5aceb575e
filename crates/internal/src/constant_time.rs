//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise.
/// Only the lengths are compared in variable time.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    ct_eq_choice(a.as_ref(), b.as_ref()).into()
}

/// Constant-time equality check that returns a Choice (0 or 1)
pub fn ct_eq_choice<T: ConstantTimeEq>(a: &[T], b: &[T]) -> Choice {
    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}
