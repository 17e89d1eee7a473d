//! Sneaker Shelf Core - Shared types library.
//!
//! This crate provides the domain types used across all Sneaker Shelf components:
//! - `sneaker-shelf` - Catalog, filtering, favorites and layout logic
//! - `cli` - The `shelf` command-line host
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no async
//! runtime. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product records, type-safe IDs, prices and brand filters

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
