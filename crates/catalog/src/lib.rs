//! Sneaker Shelf - catalog browsing data layer.
//!
//! Lists products from a static dataset, filters them by brand, price range
//! and free-text search, keeps a persisted list of favorites and computes how
//! many grid columns a product list renders with.
//!
//! # Architecture
//!
//! - [`catalog`] - The read-only product table and lookups by ID
//! - [`filter`] - Brand/price/search criteria evaluated over the table
//! - [`search`] - Case- and accent-insensitive name matching
//! - [`favorites`] - Favorite IDs with asynchronous persistence
//! - [`storage`] - Key-value backends (file and in-memory)
//! - [`layout`] - Responsive grid column computation
//! - [`config`] - Environment-driven configuration
//! - [`state`] - [`Shelf`], the owned bundle handed to front ends
//!
//! Nothing here is global: a front end builds one [`Shelf`] and passes it
//! (or references into it) to whatever needs favorite state.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod favorites;
pub mod filter;
pub mod layout;
pub mod search;
pub mod state;
pub mod storage;

pub use catalog::{Catalog, CatalogError, Lookup};
pub use config::{ConfigError, ShelfConfig};
pub use error::ShelfError;
pub use favorites::{FAVORITES_KEY, FavoritesStore};
pub use filter::{FilterCriteria, FilterError, filter, parse_price_bound};
pub use layout::{GridLayout, columns};
pub use state::{Shelf, ToggleOutcome};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};

pub use sneaker_shelf_core::{ALL_BRANDS, BrandFilter, Price, Product, ProductId, StoreLink};
