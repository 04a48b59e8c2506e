//! Counting and searching helpers.

/// Returns the number of elements matching the given predicate.
///
/// Always consumes the whole input: counting is a single full pass
/// with no short-circuit.
///
/// # Examples
///
/// ```rust
/// use seqtools::sequence::{count, predicates::is_even};
///
/// assert_eq!(count(0..10, is_even), 5);
/// ```
pub fn count<I, P>(iterable: I, mut predicate: P) -> usize
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    iterable
        .into_iter()
        .filter(|element| predicate(element))
        .count()
}

/// Returns the first element matching the given predicate, or `None`
/// if no element matches.
///
/// Stops at the first match.
///
/// # Examples
///
/// ```rust
/// use seqtools::sequence::{find, predicates::is_odd};
///
/// assert_eq!(find(0..11, is_odd), Some(1));
/// assert_eq!(find(0..11, |value: &i64| *value < 0), None);
/// ```
pub fn find<I, P>(iterable: I, mut predicate: P) -> Option<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    iterable.into_iter().find(|element| predicate(element))
}

/// Returns the last element matching the given predicate, or `None`
/// if no element matches.
///
/// This is the forward-only strategy: a full scan retaining the last
/// match seen so far — O(n) time, O(1) extra space, no buffering. Use
/// [`find_last_back`] when the source can be walked from the end.
///
/// # Examples
///
/// ```rust
/// use seqtools::sequence::{find_last, predicates::is_odd};
///
/// assert_eq!(find_last(0..10, is_odd), Some(9));
/// assert_eq!(find_last(0..11, is_odd), Some(9));
/// ```
pub fn find_last<I, P>(iterable: I, mut predicate: P) -> Option<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    let mut last_match = None;

    for element in iterable {
        if predicate(&element) {
            last_match = Some(element);
        }
    }

    last_match
}

/// Returns the last element matching the given predicate by scanning
/// from the end.
///
/// Requires a source that can be walked backwards
/// ([`DoubleEndedIterator`]); the capability is an explicit bound
/// chosen at the call site rather than a runtime type test. Cost is
/// O(k), where k is the distance from the end to the last match.
///
/// # Examples
///
/// ```rust
/// use seqtools::sequence::{find_last_back, predicates::is_odd};
///
/// let values: Vec<i64> = (0..11).collect();
/// assert_eq!(find_last_back(values, is_odd), Some(9));
/// ```
pub fn find_last_back<I, P>(iterable: I, mut predicate: P) -> Option<I::Item>
where
    I: IntoIterator,
    I::IntoIter: DoubleEndedIterator,
    P: FnMut(&I::Item) -> bool,
{
    iterable
        .into_iter()
        .rev()
        .find(|element| predicate(element))
}
