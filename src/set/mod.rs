//! A module containing [`Set`] and associated types.
//!
//! Some of these types provide owned and borrowed iteration over a set's elements while others are
//! lazy views over the result of set operations on two Sets. The owned set operations
//! ([`Set::union`], [`Set::intersection`], [`Set::difference`]) and the operator overloads are
//! built by collecting those views.
//!
//! As a note, there is no mutable iterator over the elements of a set because mutating the entries
//! in place would cause a logic error.
//!
//! [`Set`] is also re-exported at the crate root.

mod error;
mod iter;
mod ops;
mod set;

pub use error::*;
pub use iter::*;
pub use set::*;
