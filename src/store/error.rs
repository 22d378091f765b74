//! Store error types.

use thiserror::Error;

/// Errors raised by [`ItemStore`](super::ItemStore) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No held item has an id matching the requested key.
    #[error("no item matches id `{0}`")]
    NotFound(String),
}
