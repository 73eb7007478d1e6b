use std::collections::TryReserveError;

use derive_more::{Display, Error};

/// The error produced when a [`Set`](super::Set) is unable to allocate capacity for additional
/// elements, either because the new capacity would overflow or because the allocator failed.
///
/// See [`Set::try_reserve`](super::Set::try_reserve).
#[derive(Debug, Display, Error)]
#[display("unable to reserve capacity for {extra} more elements")]
pub struct ReserveError {
    pub extra: usize,
    /// The underlying failure, also available through [`Error::source`](std::error::Error::source).
    pub source: TryReserveError,
}
