//! The lazy `Stream` pipeline.
//!
//! A [`Stream`] wraps exactly one underlying iterator and exposes
//! chainable transformation stages plus terminal operations that force
//! evaluation. Every chainable stage consumes the stream and returns a
//! *new* `Stream` over a newly composed lazy iterator — an immutable
//! builder; no stage mutates shared state.
//!
//! Because terminal operations take the stream by value, a chain is
//! consumed exactly once: re-using a consumed chain is a compile
//! error, not a runtime hazard. Re-running a pipeline means building a
//! fresh chain (or cloning the stream up front when the source
//! iterator is [`Clone`]).
//!
//! # Examples
//!
//! ```rust
//! use seqtools::stream::Stream;
//!
//! let values = Stream::new(0..20)
//!     .filter(|value| value % 2 == 0)
//!     .filter(|value| *value > 4)
//!     .map(|value| value * 10)
//!     .map(|value| value.to_string())
//!     .to_list();
//!
//! assert_eq!(values, vec!["60", "80", "100", "120", "140", "160", "180"]);
//! ```

use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::Hash;
use std::iter::{Chain, Enumerate, Filter, Flatten, Map, Once, Rev, Sum, Zip, once};
use std::ops::Add;

use crate::error::SequenceError;
use crate::sequence::{Unique, unique};

/// A chainable, lazily evaluated wrapper over a sequence source.
///
/// See the [module documentation](self) for the evaluation model.
#[derive(Debug, Clone)]
#[must_use = "streams are lazy and do nothing unless a terminal operation consumes them"]
pub struct Stream<I> {
    iter: I,
}

// =============================================================================
// Construction
// =============================================================================

impl<I: Iterator> Stream<I> {
    /// Creates a stream over any finite or infinite sequence source.
    ///
    /// Another `Stream` is itself a valid source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtools::stream::Stream;
    ///
    /// let total: i64 = Stream::new(vec![1, 2, 3]).sum();
    /// assert_eq!(total, 6);
    /// ```
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            iter: source.into_iter(),
        }
    }
}

impl<T, const N: usize> Stream<std::array::IntoIter<T, N>> {
    /// Creates a stream from an explicit argument list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtools::stream::Stream;
    ///
    /// let words = Stream::of(["foo", "bar", "baz"]).to_list();
    /// assert_eq!(words, vec!["foo", "bar", "baz"]);
    /// ```
    pub fn of(values: [T; N]) -> Self {
        Self {
            iter: values.into_iter(),
        }
    }
}

// =============================================================================
// Chainable stages
// =============================================================================

impl<I: Iterator> Stream<I> {
    /// Keeps only the elements satisfying the predicate.
    pub fn filter<P>(self, predicate: P) -> Stream<Filter<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        Stream {
            iter: self.iter.filter(predicate),
        }
    }

    /// Transforms each element with the given function.
    pub fn map<B, F>(self, function: F) -> Stream<Map<I, F>>
    where
        F: FnMut(I::Item) -> B,
    {
        Stream {
            iter: self.iter.map(function),
        }
    }

    /// Pairs each element with its zero-based index.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtools::stream::Stream;
    ///
    /// let indexed = Stream::of(["foo", "bar"]).enumerate().to_list();
    /// assert_eq!(indexed, vec![(0, "foo"), (1, "bar")]);
    /// ```
    pub fn enumerate(self) -> Stream<Enumerate<I>> {
        Stream {
            iter: self.iter.enumerate(),
        }
    }

    /// Pairs each element with its index, counting from `start`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtools::stream::Stream;
    ///
    /// let indexed = Stream::of(["foo", "bar"]).enumerate_from(10).to_list();
    /// assert_eq!(indexed, vec![(10, "foo"), (11, "bar")]);
    /// ```
    pub fn enumerate_from(self, start: usize) -> Stream<impl Iterator<Item = (usize, I::Item)>> {
        Stream {
            iter: self
                .iter
                .enumerate()
                .map(move |(index, item)| (index + start, item)),
        }
    }

    /// Keeps only the first occurrence of each element.
    ///
    /// Order of first occurrence is preserved; membership tracking
    /// requires `Eq + Hash + Clone` elements (see
    /// [`sequence::unique`](crate::sequence::unique)).
    pub fn unique(self) -> Stream<Unique<I>>
    where
        I::Item: Eq + Hash + Clone,
    {
        Stream {
            iter: unique(self.iter),
        }
    }

    /// Yields the elements in reverse order.
    ///
    /// Only available when the source can be walked from the end
    /// ([`DoubleEndedIterator`]); reversal of a forward-only or
    /// infinite source is not expressible.
    pub fn reversed(self) -> Stream<Rev<I>>
    where
        I: DoubleEndedIterator,
    {
        Stream {
            iter: self.iter.rev(),
        }
    }

    /// Yields the elements in ascending order.
    ///
    /// This is a deliberate eager exception within an otherwise lazy
    /// chain: the whole source is materialized and sorted at the point
    /// of the call.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtools::stream::Stream;
    ///
    /// let sorted = Stream::of([1, 0, 3, 2, 4]).sorted().to_list();
    /// assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
    /// ```
    pub fn sorted(self) -> Stream<std::vec::IntoIter<I::Item>>
    where
        I::Item: Ord,
    {
        let mut items: Vec<I::Item> = self.iter.collect();
        items.sort();
        Stream {
            iter: items.into_iter(),
        }
    }

    /// Yields the elements ordered by the given comparator.
    ///
    /// Eager, like [`sorted`](Self::sorted). A descending sort is a
    /// reversed comparator: `stream.sorted_by(|a, b| b.cmp(a))`.
    pub fn sorted_by<F>(self, mut compare: F) -> Stream<std::vec::IntoIter<I::Item>>
    where
        F: FnMut(&I::Item, &I::Item) -> Ordering,
    {
        let mut items: Vec<I::Item> = self.iter.collect();
        items.sort_by(&mut compare);
        Stream {
            iter: items.into_iter(),
        }
    }

    /// Yields the elements ordered by the given key function.
    ///
    /// Eager, like [`sorted`](Self::sorted).
    pub fn sorted_by_key<K, F>(self, key: F) -> Stream<std::vec::IntoIter<I::Item>>
    where
        K: Ord,
        F: FnMut(&I::Item) -> K,
    {
        let mut items: Vec<I::Item> = self.iter.collect();
        items.sort_by_key(key);
        Stream {
            iter: items.into_iter(),
        }
    }

    /// Pairs elements with another sequence by position, stopping at
    /// the shorter input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtools::stream::Stream;
    ///
    /// let pairs = Stream::new(0..3).zip(10..20).to_list();
    /// assert_eq!(pairs, vec![(0, 10), (1, 11), (2, 12)]);
    /// ```
    pub fn zip<J>(self, other: J) -> Stream<Zip<I, J::IntoIter>>
    where
        J: IntoIterator,
    {
        Stream {
            iter: self.iter.zip(other),
        }
    }

    /// Pairs elements with another sequence by position, requiring
    /// both inputs to have the same length.
    ///
    /// Items are yielded as `Ok` pairs. As soon as one input is
    /// exhausted while the other still has elements, a single
    /// [`SequenceError::InvalidArgument`] is yielded and the stream
    /// ends. Detecting the mismatch necessarily pulls one element from
    /// the longer side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtools::stream::Stream;
    ///
    /// let pairs = Stream::new(0..2).zip_strict(10..12).to_list();
    /// assert_eq!(pairs, vec![Ok((0, 10)), Ok((1, 11))]);
    ///
    /// let mismatched = Stream::new(0..2).zip_strict(10..13).to_list();
    /// assert!(mismatched[2].is_err());
    /// ```
    pub fn zip_strict<J>(self, other: J) -> Stream<ZipStrict<I, J::IntoIter>>
    where
        J: IntoIterator,
    {
        Stream {
            iter: ZipStrict {
                left: self.iter,
                right: other.into_iter(),
                done: false,
            },
        }
    }

    /// Yields the running additive total of the elements.
    ///
    /// This is a prefix scan, not a single final reduction: one output
    /// per input. The default combining function is addition
    /// (`std::ops::Add`); use
    /// [`accumulate_with`](Self::accumulate_with) to pass a different
    /// combiner explicitly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtools::stream::Stream;
    ///
    /// let totals = Stream::new(0..5).accumulate().to_list();
    /// assert_eq!(totals, vec![0, 1, 3, 6, 10]);
    /// ```
    pub fn accumulate(self) -> Stream<Accumulate<I, impl FnMut(I::Item, I::Item) -> I::Item>>
    where
        I::Item: Add<Output = I::Item> + Clone,
    {
        self.accumulate_with(|total, value| total + value)
    }

    /// Yields the running fold of the elements under the given
    /// combining function.
    pub fn accumulate_with<F>(self, function: F) -> Stream<Accumulate<I, F>>
    where
        I::Item: Clone,
        F: FnMut(I::Item, I::Item) -> I::Item,
    {
        Stream {
            iter: Accumulate {
                iter: self.iter,
                function,
                total: None,
            },
        }
    }

    /// Yields `initial` followed by the running fold seeded with it.
    ///
    /// Produces one more output than the input has elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtools::stream::Stream;
    ///
    /// let totals = Stream::new(1..4)
    ///     .accumulate_from(100, |total, value| total + value)
    ///     .to_list();
    /// assert_eq!(totals, vec![100, 101, 103, 106]);
    /// ```
    pub fn accumulate_from<F>(
        self,
        initial: I::Item,
        function: F,
    ) -> Stream<Accumulate<Chain<Once<I::Item>, I>, F>>
    where
        I::Item: Clone,
        F: FnMut(I::Item, I::Item) -> I::Item,
    {
        Stream {
            iter: Accumulate {
                iter: once(initial).chain(self.iter),
                function,
                total: None,
            },
        }
    }
}

impl<I: Iterator> Stream<I>
where
    I::Item: IntoIterator,
{
    /// Concatenates the inner sequences, preserving order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtools::stream::Stream;
    ///
    /// let flat = Stream::of([vec![1, 2, 3], vec![4, 5], vec![6]])
    ///     .flatten()
    ///     .to_list();
    /// assert_eq!(flat, vec![1, 2, 3, 4, 5, 6]);
    /// ```
    pub fn flatten(self) -> Stream<Flatten<I>> {
        Stream {
            iter: self.iter.flatten(),
        }
    }
}

impl<T, I: Iterator<Item = Option<T>>> Stream<I> {
    /// Removes `None` values, unwrapping the rest.
    ///
    /// Only the absent marker is removed; values such as `0` or an
    /// empty string pass through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtools::stream::Stream;
    ///
    /// let present = Stream::of([None, Some(1), None, Some(2)])
    ///     .filter_not_none()
    ///     .to_list();
    /// assert_eq!(present, vec![1, 2]);
    /// ```
    pub fn filter_not_none(self) -> Stream<Flatten<I>> {
        Stream {
            iter: self.iter.flatten(),
        }
    }
}

// =============================================================================
// Terminal operations
// =============================================================================

impl<I: Iterator> Stream<I> {
    /// Materializes the stream into a `Vec`.
    pub fn to_list(self) -> Vec<I::Item> {
        self.iter.collect()
    }

    /// Materializes the stream into a `HashSet`.
    pub fn to_set(self) -> HashSet<I::Item>
    where
        I::Item: Eq + Hash,
    {
        self.iter.collect()
    }

    /// Materializes the stream into a fixed-size immutable slice.
    pub fn to_boxed_slice(self) -> Box<[I::Item]> {
        self.iter.collect()
    }

    /// Returns the first element, or `None` if the stream is empty.
    pub fn first(mut self) -> Option<I::Item> {
        self.iter.next()
    }

    /// Returns the first element, or `default` if the stream is empty.
    pub fn first_or(self, default: I::Item) -> I::Item {
        self.first().unwrap_or(default)
    }

    /// Returns the last element, or `None` if the stream is empty.
    ///
    /// Forces full consumption: the last element of a one-directional
    /// lazy sequence cannot be known without reaching the end.
    pub fn last(self) -> Option<I::Item> {
        self.iter.last()
    }

    /// Returns the last element, or `default` if the stream is empty.
    pub fn last_or(self, default: I::Item) -> I::Item {
        self.last().unwrap_or(default)
    }

    /// Returns whether any element satisfies the predicate.
    ///
    /// Short-circuits at the first satisfying element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtools::stream::Stream;
    ///
    /// assert!(!Stream::of([0, 0, 0]).any(|value| value != 0));
    /// assert!(Stream::of([0, 1, 0]).any(|value| value != 0));
    /// ```
    pub fn any<P>(mut self, predicate: P) -> bool
    where
        P: FnMut(I::Item) -> bool,
    {
        self.iter.any(predicate)
    }

    /// Counts all elements, consuming the stream.
    pub fn count(self) -> usize {
        self.iter.count()
    }

    /// Returns the largest element.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptyCollection`] when the stream
    /// yields no elements.
    pub fn max(self) -> Result<I::Item, SequenceError>
    where
        I::Item: Ord,
    {
        self.iter
            .max()
            .ok_or_else(|| SequenceError::empty_collection("max"))
    }

    /// Returns the smallest element.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptyCollection`] when the stream
    /// yields no elements.
    pub fn min(self) -> Result<I::Item, SequenceError>
    where
        I::Item: Ord,
    {
        self.iter
            .min()
            .ok_or_else(|| SequenceError::empty_collection("min"))
    }

    /// Sums all elements, consuming the stream.
    pub fn sum(self) -> I::Item
    where
        I::Item: Sum<I::Item>,
    {
        self.iter.sum()
    }

    /// Reduces the stream with the default additive combining
    /// function.
    ///
    /// Equivalent to taking the last value of
    /// [`accumulate`](Self::accumulate). The default combiner is
    /// addition (`std::ops::Add`); use
    /// [`reduce_with`](Self::reduce_with) to pass a different one.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptyCollection`] when the stream
    /// yields no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtools::stream::Stream;
    ///
    /// assert_eq!(Stream::new(0..5).reduce(), Ok(10));
    /// ```
    pub fn reduce(self) -> Result<I::Item, SequenceError>
    where
        I::Item: Add<Output = I::Item>,
    {
        self.reduce_with(|total, value| total + value)
    }

    /// Reduces the stream with the given combining function.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptyCollection`] when the stream
    /// yields no elements.
    pub fn reduce_with<F>(mut self, function: F) -> Result<I::Item, SequenceError>
    where
        F: FnMut(I::Item, I::Item) -> I::Item,
    {
        self.iter
            .reduce(function)
            .ok_or_else(|| SequenceError::empty_collection("reduce"))
    }

    /// Reduces the stream with the given combining function, returning
    /// `default` if the stream yields nothing.
    pub fn reduce_or<F>(mut self, default: I::Item, function: F) -> I::Item
    where
        F: FnMut(I::Item, I::Item) -> I::Item,
    {
        self.iter.reduce(function).unwrap_or(default)
    }

    /// Folds the stream into an accumulator seeded with `initial`.
    pub fn fold<B, F>(self, initial: B, function: F) -> B
    where
        F: FnMut(B, I::Item) -> B,
    {
        self.iter.fold(initial, function)
    }
}

// A Stream is itself an iterator, so it can feed another Stream or a
// for loop directly.
impl<I: Iterator> Iterator for Stream<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

// =============================================================================
// Custom adapters
// =============================================================================

/// Iterator returned by [`Stream::zip_strict`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ZipStrict<L, R> {
    left: L,
    right: R,
    done: bool,
}

impl<L: Iterator, R: Iterator> Iterator for ZipStrict<L, R> {
    type Item = Result<(L::Item, R::Item), SequenceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match (self.left.next(), self.right.next()) {
            (Some(left), Some(right)) => Some(Ok((left, right))),
            (None, None) => {
                self.done = true;
                None
            }
            _ => {
                self.done = true;
                Some(Err(SequenceError::invalid_argument(
                    "zip_strict",
                    "sources have different lengths",
                )))
            }
        }
    }
}

impl<L: Iterator, R: Iterator> std::iter::FusedIterator for ZipStrict<L, R> {}

/// Iterator returned by the [`Stream::accumulate`] family: a running
/// fold yielding one output per input.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Accumulate<I: Iterator, F> {
    iter: I,
    function: F,
    total: Option<I::Item>,
}

impl<I, F> Iterator for Accumulate<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        let total = match self.total.take() {
            None => item,
            Some(total) => (self.function)(total, item),
        };
        self.total = Some(total.clone());
        Some(total)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_is_lazy_until_terminal() {
        use std::cell::Cell;

        let calls = Cell::new(0);
        let stream = Stream::new(0..10).map(|value| {
            calls.set(calls.get() + 1);
            value
        });

        assert_eq!(calls.get(), 0);
        assert_eq!(stream.first(), Some(0));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_stream_feeds_stream() {
        let inner = Stream::new(0..5).map(|value| value * 2);
        let values = Stream::new(inner).filter(|value| *value > 4).to_list();
        assert_eq!(values, vec![6, 8]);
    }

    #[test]
    fn test_clone_gives_restart_point() {
        let stream = Stream::new(0..3);
        let first_run = stream.clone().to_list();
        let second_run = stream.to_list();
        assert_eq!(first_run, second_run);
    }

    #[test]
    fn test_zip_strict_mismatch_position() {
        let items = Stream::new(0..1).zip_strict(0..3).to_list();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], Ok((0, 0)));
        assert!(items[1].is_err());
    }

    #[test]
    fn test_accumulate_with_custom_function() {
        let values = Stream::new(1..5)
            .accumulate_with(|total, value| total * value)
            .to_list();
        assert_eq!(values, vec![1, 2, 6, 24]);
    }

    #[test]
    fn test_reduce_or_on_empty() {
        let stream = Stream::new(std::iter::empty::<i64>());
        assert_eq!(stream.reduce_or(7, |total, value| total + value), 7);
    }
}
