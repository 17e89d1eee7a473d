//! Unified error type for building a [`Shelf`](crate::Shelf).
//!
//! Favorites storage failures are absorbed inside the favorites store and
//! never show up here; only startup problems do.

use thiserror::Error;

use crate::catalog::CatalogError;

/// Errors that prevent a shelf from starting.
#[derive(Debug, Error)]
pub enum ShelfError {
    /// The product table could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Result type alias for `ShelfError`.
pub type Result<T> = std::result::Result<T, ShelfError>;
