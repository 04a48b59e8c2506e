//! Fixed predicate helpers.
//!
//! Trivial boolean tests, shaped so they coerce to `fn(&i64) -> bool`
//! (or `fn(&bool) -> bool`) pointers and mix freely with closures in
//! the predicate vectors taken by
//! [`filters`](crate::sequence::filters).

/// Returns whether the value is `false`.
#[inline]
#[must_use]
pub const fn is_false(value: &bool) -> bool {
    !*value
}

/// Returns whether the value is `true`.
#[inline]
#[must_use]
pub const fn is_true(value: &bool) -> bool {
    *value
}

/// Returns whether the value is strictly positive.
#[inline]
#[must_use]
pub const fn is_positive(value: &i64) -> bool {
    *value > 0
}

/// Returns whether the value is strictly negative.
#[inline]
#[must_use]
pub const fn is_negative(value: &i64) -> bool {
    *value < 0
}

/// Returns whether the value is zero or negative.
#[inline]
#[must_use]
pub const fn is_not_positive(value: &i64) -> bool {
    *value <= 0
}

/// Returns whether the value is zero or positive.
#[inline]
#[must_use]
pub const fn is_not_negative(value: &i64) -> bool {
    *value >= 0
}

/// Returns whether the value is even.
#[inline]
#[must_use]
pub const fn is_even(value: &i64) -> bool {
    *value % 2 == 0
}

/// Returns whether the value is odd.
#[inline]
#[must_use]
pub const fn is_odd(value: &i64) -> bool {
    *value % 2 != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parity() {
        assert!(is_even(&0));
        assert!(is_even(&-2));
        assert!(is_odd(&3));
        assert!(is_odd(&-3));
    }

    #[test]
    fn test_signs() {
        assert!(is_positive(&1));
        assert!(!is_positive(&0));
        assert!(is_negative(&-1));
        assert!(is_not_positive(&0));
        assert!(is_not_negative(&0));
    }

    #[test]
    fn test_bools() {
        assert!(is_true(&true));
        assert!(is_false(&false));
    }
}
