//! # seqtools
//!
//! Composable lazy sequence utilities: multi-dimensional ranges,
//! one-pass helpers, and a fluent `Stream` pipeline.
//!
//! ## Overview
//!
//! This library lets calling code express multi-step sequence
//! transformations declaratively instead of writing nested loops. It
//! includes:
//!
//! - **Multi-Range Generator**: lazy Cartesian-product iteration over
//!   `(start, stop, step)` dimension specs in O(dimensions) memory
//! - **One-Pass Helpers**: `maps`, `filters`, `flatten`, `unique`,
//!   `associate`, `group_by`, `count`, `find`, `find_last`
//! - **Function Composition**: the `pipe!` macro plus `identity` and
//!   `constant` combinators
//! - **Stream**: a chainable, lazily evaluated pipeline with terminal
//!   operations that force evaluation exactly once
//!
//! Everything is pure and single-threaded: no I/O, no background work,
//! no shared mutable state. Caller-supplied functions are invoked
//! exactly once per relevant element, in source order, and their
//! panics propagate immediately.
//!
//! ## Feature Flags
//!
//! - `compose`: function composition utilities
//! - `sequence`: one-pass sequence helpers
//! - `ranges`: the multi-dimensional range generator
//! - `stream`: the `Stream` pipeline
//!
//! All are enabled by default.
//!
//! ## Example
//!
//! ```rust
//! use seqtools::prelude::*;
//!
//! let values = Stream::new(0..20)
//!     .filter(|value| value % 2 == 0)
//!     .filter(|value| *value > 4)
//!     .map(|value| value * 10)
//!     .to_list();
//!
//! assert_eq!(values, vec![60, 80, 100, 120, 140, 160, 180]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use seqtools::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "ranges")]
    pub use crate::ranges::*;

    #[cfg(feature = "stream")]
    pub use crate::stream::*;
}

pub mod error;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "ranges")]
pub mod ranges;

#[cfg(feature = "stream")]
pub mod stream;
