//! One-pass sequence helpers.
//!
//! Every helper in this module operates in a single forward pass over
//! its input. Caller-supplied functions and predicates are invoked
//! exactly once per relevant element, in source order.
//!
//! The lazy helpers ([`maps`], [`filters`], [`flatten`], [`unique`],
//! [`filter_not_none`]) return iterator adapters that do no work until
//! pulled. The collecting helpers ([`associate`], [`group_by`],
//! [`count`], [`find`], ...) consume their input eagerly.
//!
//! # Examples
//!
//! ```rust
//! use seqtools::sequence::{filters, predicates::is_even};
//!
//! let predicates: Vec<fn(&i64) -> bool> = vec![|value| *value > 3, is_even];
//! let kept: Vec<i64> = filters(0..10, predicates).collect();
//! assert_eq!(kept, vec![4, 6, 8]);
//! ```

mod adapters;
mod associate;
mod find;
pub mod predicates;

pub use adapters::{Filters, Maps, Unique, filter_not_none, filters, flatten, maps, unique};
pub use associate::{associate, associate_by, associate_with, group_by, group_by_to};
pub use find::{count, find, find_last, find_last_back};
