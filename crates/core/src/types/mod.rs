//! Core types for Sneaker Shelf.
//!
//! This module provides type-safe wrappers for the catalog's domain concepts.

pub mod brand;
pub mod id;
#[doc(hidden)]
pub mod number;
pub mod price;
pub mod product;

pub use brand::{ALL_BRANDS, BrandFilter};
pub use id::*;
pub use price::Price;
pub use product::{Product, StoreLink};
