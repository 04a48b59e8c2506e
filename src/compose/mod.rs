//! Function composition utilities.
//!
//! This module provides the [`pipe!`] macro for building left-to-right
//! function pipelines, together with the small combinators the rest of
//! the crate composes with:
//!
//! - [`identity`]: returns its argument unchanged
//! - [`constant`]: a function that always returns the same value
//!
//! # Examples
//!
//! ```
//! use seqtools::pipe;
//!
//! fn double(value: i32) -> i32 { value * 2 }
//! fn add_one(value: i32) -> i32 { value + 1 }
//!
//! // pipe!(f, g) builds |x| g(f(x))
//! let transform = pipe!(double, add_one);
//! assert_eq!(transform(5), 11);
//! ```

mod pipe_macro;
mod utils;

pub use utils::{constant, identity};

// The macro is exported at the crate root via #[macro_export].
pub use crate::pipe;
