//! Key-value association and grouping helpers.

use std::collections::HashMap;
use std::hash::Hash;

use crate::compose::identity;

/// Builds a map from the key-value pairs produced by applying
/// `transform` to each element.
///
/// Pairs are produced in source order; a later pair with a duplicate
/// key overwrites the earlier one. Iteration order of the resulting
/// map is not semantically meaningful.
///
/// # Examples
///
/// ```rust
/// use seqtools::sequence::associate;
///
/// let map = associate(1..4, |value| (value, value * value));
/// assert_eq!(map[&3], 9);
/// ```
pub fn associate<I, K, V, F>(iterable: I, transform: F) -> HashMap<K, V>
where
    I: IntoIterator,
    K: Eq + Hash,
    F: FnMut(I::Item) -> (K, V),
{
    iterable.into_iter().map(transform).collect()
}

/// Builds a map of the elements indexed by the key returned from
/// `key_selector`.
///
/// If two elements map to the same key, the last one wins.
///
/// # Examples
///
/// ```rust
/// use seqtools::sequence::associate_by;
///
/// let map = associate_by(["foo", "bar", "bazaar"], |word| word.len());
/// assert_eq!(map[&3], "bar");
/// assert_eq!(map[&6], "bazaar");
/// ```
pub fn associate_by<I, K, F>(iterable: I, mut key_selector: F) -> HashMap<K, I::Item>
where
    I: IntoIterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    iterable
        .into_iter()
        .map(|element| {
            let key = key_selector(&element);
            (key, element)
        })
        .collect()
}

/// Builds a map where the keys are the elements themselves and the
/// values are produced by `value_selector`.
///
/// If two elements are equal, the last one wins.
///
/// # Examples
///
/// ```rust
/// use seqtools::sequence::associate_with;
///
/// let map = associate_with(1..4, |value| value * 10);
/// assert_eq!(map[&2], 20);
/// ```
pub fn associate_with<I, V, F>(iterable: I, mut value_selector: F) -> HashMap<I::Item, V>
where
    I: IntoIterator,
    I::Item: Eq + Hash,
    F: FnMut(&I::Item) -> V,
{
    iterable
        .into_iter()
        .map(|key| {
            let value = value_selector(&key);
            (key, value)
        })
        .collect()
}

/// Groups elements by the key returned from `key_selector`.
///
/// Within each group, elements appear in their original encounter
/// order. An empty input yields an empty map.
///
/// # Examples
///
/// ```rust
/// use seqtools::sequence::group_by;
/// use seqtools::sequence::predicates::is_even;
///
/// let groups = group_by(0..10, |value| if is_even(value) { "even" } else { "odd" });
/// assert_eq!(groups["even"], vec![0, 2, 4, 6, 8]);
/// assert_eq!(groups["odd"], vec![1, 3, 5, 7, 9]);
/// ```
pub fn group_by<I, K, F>(iterable: I, key_selector: F) -> HashMap<K, Vec<I::Item>>
where
    I: IntoIterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    group_by_to(iterable, key_selector, identity)
}

/// Groups the values produced by `value_transform` by the key returned
/// from `key_selector`.
///
/// A key not yet seen creates a new single-element group; a key seen
/// before appends to its group.
///
/// # Examples
///
/// ```rust
/// use seqtools::sequence::group_by_to;
/// use seqtools::sequence::predicates::is_even;
///
/// let groups = group_by_to(
///     0..10,
///     |value| if is_even(value) { "even" } else { "odd" },
///     |value| -value,
/// );
/// assert_eq!(groups["even"], vec![0, -2, -4, -6, -8]);
/// assert_eq!(groups["odd"], vec![-1, -3, -5, -7, -9]);
/// ```
pub fn group_by_to<I, K, V, F, G>(
    iterable: I,
    mut key_selector: F,
    mut value_transform: G,
) -> HashMap<K, Vec<V>>
where
    I: IntoIterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
    G: FnMut(I::Item) -> V,
{
    let mut result: HashMap<K, Vec<V>> = HashMap::new();

    for element in iterable {
        let key = key_selector(&element);
        let value = value_transform(element);
        result.entry(key).or_default().push(value);
    }

    result
}
