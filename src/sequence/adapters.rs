//! Lazy single-pass iterator adapters.

use std::collections::HashSet;
use std::hash::Hash;

// =============================================================================
// maps
// =============================================================================

/// Returns a lazy iterator applying the given functions, in order, to
/// each element of the iterable.
///
/// The functions form a homogeneous chain (`T -> T`); the result is
/// function composition applied elementwise. Zero functions yields the
/// input unchanged — an identity pipeline.
///
/// # Examples
///
/// ```rust
/// use seqtools::sequence::maps;
///
/// let functions: Vec<fn(i64) -> i64> = vec![|value| value * 10, |value| value + 1];
/// let values: Vec<i64> = maps(0..10, functions).collect();
/// assert_eq!(values, vec![1, 11, 21, 31, 41, 51, 61, 71, 81, 91]);
/// ```
pub fn maps<I, F>(iterable: I, functions: impl IntoIterator<Item = F>) -> Maps<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> I::Item,
{
    Maps {
        iter: iterable.into_iter(),
        functions: functions.into_iter().collect(),
    }
}

/// Iterator returned by [`maps`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Maps<I, F> {
    iter: I,
    functions: Vec<F>,
}

impl<I, F> Iterator for Maps<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> I::Item,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        Some(
            self.functions
                .iter_mut()
                .fold(item, |value, function| function(value)),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

// =============================================================================
// filters
// =============================================================================

/// Returns a lazy iterator retaining only the elements that satisfy
/// every given predicate.
///
/// Predicates short-circuit per element: an element failing the first
/// predicate is never shown to the second. Zero predicates yields the
/// input unchanged.
///
/// # Examples
///
/// ```rust
/// use seqtools::sequence::{filters, predicates::is_even};
///
/// let predicates: Vec<fn(&i64) -> bool> = vec![|value| *value > 3, is_even];
/// let kept: Vec<i64> = filters(0..10, predicates).collect();
/// assert_eq!(kept, vec![4, 6, 8]);
/// ```
pub fn filters<I, P>(iterable: I, predicates: impl IntoIterator<Item = P>) -> Filters<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    Filters {
        iter: iterable.into_iter(),
        predicates: predicates.into_iter().collect(),
    }
}

/// Iterator returned by [`filters`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Filters<I, P> {
    iter: I,
    predicates: Vec<P>,
}

impl<I, P> Iterator for Filters<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.iter.next()?;
            if self
                .predicates
                .iter_mut()
                .all(|predicate| predicate(&item))
            {
                return Some(item);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

// =============================================================================
// flatten
// =============================================================================

/// Lazily concatenates the elements of each inner sequence, preserving
/// outer-sequence order.
///
/// # Examples
///
/// ```rust
/// use seqtools::sequence::flatten;
///
/// let values: Vec<i64> = flatten(vec![vec![1, 2, 3], vec![4, 5], vec![6]]).collect();
/// assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
/// ```
pub fn flatten<I>(iterable: I) -> std::iter::Flatten<I::IntoIter>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    iterable.into_iter().flatten()
}

// =============================================================================
// unique
// =============================================================================

/// Lazily yields each element on its first occurrence only.
///
/// Order of first occurrence is preserved. Membership is tracked with
/// a hash set, so elements must be `Eq + Hash + Clone`; the hashable
/// requirement is a compile-time bound rather than a runtime fallback.
///
/// # Examples
///
/// ```rust
/// use seqtools::sequence::unique;
///
/// let values: Vec<i64> = unique(vec![0, 0, 1, 0, 1, 2, 0, 1, 2, 3]).collect();
/// assert_eq!(values, vec![0, 1, 2, 3]);
/// ```
pub fn unique<I>(iterable: I) -> Unique<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Eq + Hash + Clone,
{
    Unique {
        iter: iterable.into_iter(),
        seen: HashSet::new(),
    }
}

/// Iterator returned by [`unique`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Unique<I: Iterator> {
    iter: I,
    seen: HashSet<I::Item>,
}

impl<I> Clone for Unique<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            seen: self.seen.clone(),
        }
    }
}

impl<I> std::fmt::Debug for Unique<I>
where
    I: Iterator + std::fmt::Debug,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Unique")
            .field("iter", &self.iter)
            .finish_non_exhaustive()
    }
}

impl<I> Iterator for Unique<I>
where
    I: Iterator,
    I::Item: Eq + Hash + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.iter.next()?;
            if self.seen.insert(item.clone()) {
                return Some(item);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

// =============================================================================
// filter_not_none
// =============================================================================

/// Lazily removes `None` values from a sequence of options.
///
/// Only the absent marker is removed — values such as `0` or an empty
/// string pass through untouched, because absence is encoded in the
/// `Option` rather than in truthiness.
///
/// # Examples
///
/// ```rust
/// use seqtools::sequence::filter_not_none;
///
/// let values: Vec<i64> =
///     filter_not_none(vec![None, Some(1), None, Some(2), None, Some(3)]).collect();
/// assert_eq!(values, vec![1, 2, 3]);
/// ```
pub fn filter_not_none<I, T>(iterable: I) -> std::iter::Flatten<I::IntoIter>
where
    I: IntoIterator<Item = Option<T>>,
{
    iterable.into_iter().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_zero_functions_is_identity() {
        let values: Vec<i64> = maps(0..5, Vec::<fn(i64) -> i64>::new()).collect();
        assert_eq!(values, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_maps_applies_in_order() {
        // (value * 10) + 1, not (value + 1) * 10
        let functions: Vec<fn(i64) -> i64> = vec![|value| value * 10, |value| value + 1];
        let values: Vec<i64> = maps(0..3, functions).collect();
        assert_eq!(values, vec![1, 11, 21]);
    }

    #[test]
    fn test_filters_zero_predicates_is_identity() {
        let values: Vec<i64> = filters(0..5, Vec::<fn(&i64) -> bool>::new()).collect();
        assert_eq!(values, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_filters_short_circuits_per_element() {
        use std::cell::Cell;

        let second_calls = Cell::new(0);
        let first = |value: &i64| *value > 2;
        let second = |_: &i64| {
            second_calls.set(second_calls.get() + 1);
            true
        };

        let predicates: Vec<Box<dyn FnMut(&i64) -> bool + '_>> =
            vec![Box::new(first), Box::new(second)];
        let kept: Vec<i64> = filters(0..5, predicates).collect();

        assert_eq!(kept, vec![3, 4]);
        // 0, 1, 2 failed the first predicate and never reached the second.
        assert_eq!(second_calls.get(), 2);
    }

    #[test]
    fn test_unique_preserves_first_occurrence_order() {
        let values: Vec<i64> = unique(vec![3, 1, 3, 2, 1]).collect();
        assert_eq!(values, vec![3, 1, 2]);
    }

    #[test]
    fn test_flatten_preserves_order() {
        let values: Vec<i64> = flatten(vec![vec![], vec![1], vec![2, 3]]).collect();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_filter_not_none_keeps_falsy_values() {
        let values: Vec<i64> = filter_not_none(vec![Some(0), None, Some(1)]).collect();
        assert_eq!(values, vec![0, 1]);
    }
}
