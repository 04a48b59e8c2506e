//! Small combinators used as pipeline building blocks.

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition:
/// `pipe!(identity, f)` and `pipe!(f, identity)` are both equivalent
/// to `f`. It is also the value transform behind
/// [`group_by`](crate::sequence::group_by).
///
/// # Examples
///
/// ```
/// use seqtools::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring
/// its input.
///
/// Useful as an always-true predicate: counting every element of a
/// sequence is counting with `constant(true)`.
///
/// # Examples
///
/// ```
/// use seqtools::compose::constant;
/// use seqtools::sequence::count;
///
/// assert_eq!(count(0..10, constant(true)), 10);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}
