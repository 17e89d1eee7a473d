//! Integration tests for Sneaker Shelf.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p sneaker-shelf-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `favorites_persistence` - Favorites written to and read back from disk
//! - `catalog_browsing` - Home, search, favorites and details views over the
//!   bundled dataset
//!
//! Nothing here needs a network or external services; file-backed stores
//! live in temporary directories.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;

use sneaker_shelf::{Catalog, CatalogError, FileStore, GridLayout, Shelf};
use sneaker_shelf_core::ProductId;
use tempfile::TempDir;

/// A shelf over the bundled catalog with favorites stored in `dir`.
///
/// # Errors
///
/// Returns an error if the bundled dataset fails to parse.
pub async fn file_shelf(dir: &Path) -> Result<Shelf<FileStore>, CatalogError> {
    let catalog = Catalog::bundled()?;
    Ok(Shelf::open(catalog, FileStore::new(dir), GridLayout::default()).await)
}

/// A fresh temporary data directory.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> std::io::Result<TempDir> {
    tempfile::tempdir()
}

/// IDs from string literals.
#[must_use]
pub fn ids(raw: &[&str]) -> Vec<ProductId> {
    raw.iter().copied().map(ProductId::from).collect()
}
