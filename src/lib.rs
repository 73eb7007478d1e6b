//! A generic, hash-based set with the usual set algebra: union, intersection, difference and
//! subset tests, plus membership queries and bulk insertion and removal.
//!
//! # Purpose
//! [`Set`] tracks membership and nothing else. Every element is stored once, as a key of a
//! [`HashMap`](std::collections::HashMap) whose values are the unit type, so the uniqueness and
//! `O(1)` lookup come straight from the map rather than from any hashing done here.
//!
//! # Ordering
//! A Set has no order. Anything that walks its elements, such as [`Set::iter`] or
//! [`Set::to_vec`], may produce them in a different order from one call to the next. Sort the
//! output, or compare it as another Set, when the order matters.
//!
//! # Error Handling
//! None of the set operations can fail: inserting a duplicate or removing an absent element is
//! simply a no-op. The one fallible method is [`Set::try_reserve`], which reports a failed
//! allocation through the strongly typed [`ReserveError`](set::ReserveError) instead of aborting.
//!
//! # Concurrency
//! A Set does no locking of its own. Wrap it in a [`Mutex`](std::sync::Mutex) or
//! [`RwLock`](std::sync::RwLock) when it has to be shared, and hold the guard across any sequence
//! of calls that must appear atomic.
//!
//! # Dependencies
//! This crate depends on some derive macros because they're helpful and remove the need for some
//! very repetitive programming.

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod set;

pub(crate) mod util;

#[doc(inline)]
pub use set::Set;
