//! Sign utilities for root-finding algorithms.
//! - `opposite_sign` : `true` if values have strictly opposite sign
//! - `same_sign`     : `true` if values share the same sign

/// Returns `true` if `x` and `y` are non-zero with opposite signs.
#[inline]
pub(crate) fn opposite_sign(x: f64, y: f64) -> bool {
    x != 0.0 && y != 0.0 && x.is_sign_positive() != y.is_sign_positive()
}


/// Returns `true` if `x` and `y` have the same sign.
#[inline]
pub(crate) fn same_sign(x: f64, y: f64) -> bool {
    x.is_sign_positive() == y.is_sign_positive()
}
