//! Unified error type for the container.
//!
//! Every failure here is caller-recoverable and reported synchronously.
//! Duplicate insertion is deliberately NOT an error — `insert` declines with
//! a `false` return and leaves the structure untouched.

/// Failure conditions for queries against the skip list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The queried key is not in the list.
    #[error("key not found")]
    NotFound,
    /// The key exists but is extremal in the requested direction
    /// (no successor for the largest key, no predecessor for the smallest).
    #[error("no neighbor key in that direction")]
    NoSuchNeighbor,
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
