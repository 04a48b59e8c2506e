//! Lazy multi-dimensional range generation.
//!
//! This module provides the [`ranges`] function (and the [`ranges!`]
//! macro for mixed spec literals), which enumerates every coordinate
//! tuple in an N-dimensional integer index space without materializing
//! intermediate collections.
//!
//! The generator is built by recursive composition: the product over
//! the first N−1 dimensions is itself computed lazily, and for each
//! resulting prefix the last dimension is iterated fully. Memory use is
//! O(N) — one partial coordinate under construction — which makes it
//! practical to walk Cartesian spaces far too large to collect.
//!
//! # Examples
//!
//! ```rust
//! use seqtools::ranges;
//!
//! let mut coordinates = ranges!(800, (0, 600, 2), 3).unwrap();
//!
//! let first = coordinates.next().unwrap();
//! assert_eq!(first.as_slice(), &[0, 0, 0]);
//! ```

use smallvec::{SmallVec, smallvec};

use crate::error::SequenceError;

/// One output element of the multi-range generator: a full assignment
/// of values across all dimensions, first-supplied dimension first.
///
/// Small dimension counts stay on the stack.
pub type Coordinate = SmallVec<[i64; 4]>;

// =============================================================================
// DimensionSpec
// =============================================================================

/// A single axis of iteration: a `(start, stop, step)` triple with
/// start-inclusive, stop-exclusive, signed-step semantics.
///
/// Bare integers and tuples convert into specs the way the generator's
/// callers usually write them:
///
/// ```rust
/// use seqtools::ranges::DimensionSpec;
///
/// assert_eq!(DimensionSpec::from(5), DimensionSpec::new(0, 5, 1));
/// assert_eq!(DimensionSpec::from((2, 5)), DimensionSpec::new(2, 5, 1));
/// assert_eq!(DimensionSpec::from((10, 3, -3)), DimensionSpec::new(10, 3, -3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DimensionSpec {
    /// First value of the axis (inclusive).
    pub start: i64,
    /// Bound of the axis (exclusive).
    pub stop: i64,
    /// Distance between consecutive values. Must not be zero; the
    /// [`ranges`] constructor rejects zero steps up front.
    pub step: i64,
}

impl DimensionSpec {
    /// Creates a spec from an explicit `(start, stop, step)` triple.
    #[must_use]
    pub const fn new(start: i64, stop: i64, step: i64) -> Self {
        Self { start, stop, step }
    }

    /// Creates a spec counting from zero up to `stop` in steps of one.
    #[must_use]
    pub const fn to(stop: i64) -> Self {
        Self::new(0, stop, 1)
    }

    /// Returns the number of values this axis enumerates.
    ///
    /// An axis whose stop bound lies on the wrong side of its start
    /// (for the sign of its step) is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtools::ranges::DimensionSpec;
    ///
    /// assert_eq!(DimensionSpec::to(5).len(), 5);
    /// assert_eq!(DimensionSpec::new(10, 3, -3).len(), 3);
    /// assert_eq!(DimensionSpec::new(5, 5, 1).len(), 0);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        let span = i128::from(self.stop) - i128::from(self.start);
        let step = i128::from(self.step);
        let count = if step > 0 && span > 0 {
            (span - 1) / step + 1
        } else if step < 0 && span < 0 {
            (span + 1) / step + 1
        } else {
            0
        };
        usize::try_from(count).unwrap_or(usize::MAX)
    }

    /// Returns whether this axis enumerates no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a fresh iterator over this axis's values.
    #[must_use]
    pub const fn values(&self) -> StepRange {
        StepRange {
            next: self.start,
            stop: self.stop,
            step: self.step,
        }
    }
}

impl From<i64> for DimensionSpec {
    fn from(stop: i64) -> Self {
        Self::to(stop)
    }
}

impl From<(i64, i64)> for DimensionSpec {
    fn from((start, stop): (i64, i64)) -> Self {
        Self::new(start, stop, 1)
    }
}

impl From<(i64, i64, i64)> for DimensionSpec {
    fn from((start, stop, step): (i64, i64, i64)) -> Self {
        Self::new(start, stop, step)
    }
}

// =============================================================================
// StepRange
// =============================================================================

/// A start-inclusive, stop-exclusive integer iterator with a signed
/// step.
///
/// Unlike `std::ops::Range`, a `StepRange` can count downwards:
///
/// ```rust
/// use seqtools::ranges::DimensionSpec;
///
/// let values: Vec<i64> = DimensionSpec::new(10, 3, -3).values().collect();
/// assert_eq!(values, vec![10, 7, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct StepRange {
    next: i64,
    stop: i64,
    step: i64,
}

impl StepRange {
    // An already-exhausted range, used to seed nested product state.
    const fn exhausted() -> Self {
        Self {
            next: 0,
            stop: 0,
            step: 1,
        }
    }
}

impl Iterator for StepRange {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let exhausted = if self.step > 0 {
            self.next >= self.stop
        } else {
            self.next <= self.stop
        };
        if exhausted {
            return None;
        }

        let value = self.next;
        // A wrapping advance would re-enter the range; pin to the stop
        // bound so the next call observes exhaustion.
        self.next = value.checked_add(self.step).unwrap_or(self.stop);
        Some(value)
    }
}

impl std::iter::FusedIterator for StepRange {}

// =============================================================================
// MultiRange
// =============================================================================

/// Recursive product state: either a single axis, or a lazy product
/// over the leading axes combined with the trailing axis.
#[derive(Debug, Clone)]
enum Product {
    Single(StepRange),
    Nested {
        prefixes: Box<Product>,
        current: Option<Coordinate>,
        last: DimensionSpec,
        suffix: StepRange,
    },
}

impl Product {
    fn build(specs: &[DimensionSpec]) -> Self {
        match specs {
            [] => unreachable!("ranges() rejects empty spec lists"),
            [single] => Self::Single(single.values()),
            [leading @ .., last] => Self::Nested {
                prefixes: Box::new(Self::build(leading)),
                current: None,
                last: *last,
                suffix: StepRange::exhausted(),
            },
        }
    }
}

impl Iterator for Product {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        match self {
            Self::Single(range) => range.next().map(|value| smallvec![value]),
            Self::Nested {
                prefixes,
                current,
                last,
                suffix,
            } => loop {
                match current {
                    None => {
                        let prefix = prefixes.next()?;
                        *suffix = last.values();
                        *current = Some(prefix);
                    }
                    Some(prefix) => match suffix.next() {
                        Some(value) => {
                            let mut coordinate = prefix.clone();
                            coordinate.push(value);
                            return Some(coordinate);
                        }
                        None => *current = None,
                    },
                }
            },
        }
    }
}

/// A lazy iterator over every [`Coordinate`] in an N-dimensional index
/// space, in lexicographic order: the first-supplied dimension varies
/// slowest, the last-supplied dimension varies fastest.
///
/// Produced by [`ranges`]. Each call to [`ranges`] yields a fresh
/// sequence starting from the beginning; a single `MultiRange` handle
/// is consumed as it is iterated (clone it before iterating to keep a
/// restart point).
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct MultiRange {
    product: Product,
    remaining: Option<usize>,
}

impl Iterator for MultiRange {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        let coordinate = self.product.next();
        if coordinate.is_some() {
            if let Some(remaining) = &mut self.remaining {
                *remaining = remaining.saturating_sub(1);
            }
        }
        coordinate
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(remaining) => (remaining, Some(remaining)),
            None => (0, None),
        }
    }
}

impl std::iter::FusedIterator for MultiRange {}

// =============================================================================
// ranges
// =============================================================================

/// Lazily enumerates the full Cartesian product of the given dimension
/// specs.
///
/// Dimension values follow start-inclusive, stop-exclusive, signed-step
/// range semantics. If any dimension is empty, the whole product is
/// empty — zero tuples, not an error.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidArgument`] when no specs are given,
/// or when any spec has a zero step. Both checks happen before any
/// lazy work begins.
///
/// # Examples
///
/// ```rust
/// use seqtools::ranges::{DimensionSpec, ranges};
///
/// let tuples: Vec<Vec<i64>> = ranges([DimensionSpec::to(2), DimensionSpec::to(2)])
///     .unwrap()
///     .map(|coordinate| coordinate.to_vec())
///     .collect();
///
/// assert_eq!(
///     tuples,
///     vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]],
/// );
/// ```
///
/// The product is never materialized, so spaces with billions of
/// combinations iterate in constant memory:
///
/// ```rust
/// use seqtools::ranges;
///
/// let huge = ranges!(1_000_000, 1_000_000, 1_000_000).unwrap();
/// assert_eq!(huge.take(2).count(), 2);
/// ```
pub fn ranges<S, I>(specs: I) -> Result<MultiRange, SequenceError>
where
    S: Into<DimensionSpec>,
    I: IntoIterator<Item = S>,
{
    let specs: Vec<DimensionSpec> = specs.into_iter().map(Into::into).collect();

    if specs.is_empty() {
        return Err(SequenceError::invalid_argument(
            "ranges",
            "at least one dimension spec is required",
        ));
    }
    if specs.iter().any(|spec| spec.step == 0) {
        return Err(SequenceError::invalid_argument(
            "ranges",
            "step must not be zero",
        ));
    }

    let remaining = specs
        .iter()
        .try_fold(1_usize, |product, spec| product.checked_mul(spec.len()));

    Ok(MultiRange {
        product: Product::build(&specs),
        remaining,
    })
}

/// Builds a [`MultiRange`](crate::ranges::MultiRange) from mixed spec
/// literals.
///
/// Each argument is anything convertible into a
/// [`DimensionSpec`](crate::ranges::DimensionSpec): a bare stop value,
/// a `(start, stop)` pair, or a `(start, stop, step)` triple.
///
/// # Examples
///
/// ```rust
/// use seqtools::ranges;
///
/// for coordinate in ranges!(3, (0, 600, 2), 3).unwrap() {
///     let [x, y, c] = coordinate.as_slice() else { unreachable!() };
///     let _ = (x, y, c);
/// }
/// ```
#[macro_export]
macro_rules! ranges {
    () => {
        $crate::ranges::ranges(::std::iter::empty::<$crate::ranges::DimensionSpec>())
    };
    ($($spec:expr),+ $(,)?) => {
        $crate::ranges::ranges([$($crate::ranges::DimensionSpec::from($spec)),+])
    };
}
