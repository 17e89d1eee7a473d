//! The static product table.
//!
//! Loaded once at startup, either from the dataset bundled into the binary
//! or from a JSON file, and never mutated afterwards.

use std::collections::HashSet;
use std::path::Path;

use sneaker_shelf_core::{Product, ProductId};
use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::filter::FilterCriteria;

const BUNDLED_DATASET: &str = include_str!("../data/sneakers.json");

/// Errors loading a product table.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed catalog: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),
}

/// Outcome of looking a product up by ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    Found(&'a Product),
    /// Shown to the user as "not found"; not an error.
    NotFound,
}

impl<'a> Lookup<'a> {
    #[must_use]
    pub const fn product(self) -> Option<&'a Product> {
        match self {
            Self::Found(product) => Some(product),
            Self::NotFound => None,
        }
    }
}

/// The read-only product table.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate IDs.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` for the first repeated ID.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(&product.id) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }
        Ok(Self { products })
    }

    /// Parse a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the JSON is malformed or repeats an ID.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// The dataset compiled into the crate.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the bundled dataset is invalid.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_DATASET)
    }

    /// Load a JSON dataset from disk.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read or parsed.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub async fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = tokio::fs::read_to_string(path).await?;
        let catalog = Self::from_json(&json)?;
        info!(products = catalog.len(), "Catalog loaded from file");
        Ok(catalog)
    }

    /// All products, in dataset order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product for the details view.
    #[must_use]
    pub fn find(&self, id: &ProductId) -> Lookup<'_> {
        self.products
            .iter()
            .find(|product| &product.id == id)
            .map_or_else(
                || {
                    warn!(%id, "Product not found");
                    Lookup::NotFound
                },
                Lookup::Found,
            )
    }

    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.products.iter().any(|product| &product.id == id)
    }

    /// Distinct brands, in order of first appearance.
    #[must_use]
    pub fn brands(&self) -> Vec<&str> {
        distinct_brands(self.products.iter())
    }

    /// Distinct brands among favorite products, in table order.
    #[must_use]
    pub fn favorite_brands(&self, favorites: &[ProductId]) -> Vec<&str> {
        distinct_brands(self.favorite_products(favorites).into_iter())
    }

    /// Favorite products in table order. IDs with no matching product are
    /// skipped.
    #[must_use]
    pub fn favorite_products(&self, favorites: &[ProductId]) -> Vec<&Product> {
        let wanted: HashSet<&ProductId> = favorites.iter().collect();
        self.products
            .iter()
            .filter(|product| wanted.contains(&product.id))
            .collect()
    }

    /// Favorite products narrowed by `criteria`, in table order.
    #[must_use]
    pub fn favorites_view(
        &self,
        favorites: &[ProductId],
        criteria: &FilterCriteria,
    ) -> Vec<&Product> {
        let evaluator = criteria.evaluator();
        self.favorite_products(favorites)
            .into_iter()
            .filter(|product| evaluator.matches(product))
            .collect()
    }
}

fn distinct_brands<'a>(products: impl Iterator<Item = &'a Product>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    products
        .map(|product| product.brand.as_str())
        .filter(|brand| seen.insert(*brand))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use sneaker_shelf_core::BrandFilter;

    use super::*;

    fn id(raw: &str) -> ProductId {
        ProductId::new(raw)
    }

    #[test]
    fn test_bundled_dataset_loads() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.products().iter().all(|p| !p.stores.is_empty()));
    }

    #[test]
    fn test_reserialized_dataset_keeps_prices() {
        let catalog = Catalog::bundled().unwrap();
        let json = serde_json::to_string(catalog.products()).unwrap();
        let reloaded = Catalog::from_json(&json).unwrap();

        assert_eq!(reloaded.products(), catalog.products());
        let ultraboost = reloaded.find(&id("3")).product().unwrap();
        assert_eq!(ultraboost.price.derived().to_string(), "1099.99");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"[
            {"id": 1, "name": "A", "brand": "X", "price": 1, "image": "a.png"},
            {"id": "1", "name": "B", "brand": "Y", "price": 2, "image": "b.png"}
        ]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::DuplicateId(dup)) if dup == id("1")
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Catalog::from_json("[{\"id\": 1}]"),
            Err(CatalogError::Malformed(_))
        ));
    }

    #[test]
    fn test_find() {
        let catalog = Catalog::bundled().unwrap();
        let found = catalog.find(&id("1")).product().unwrap();
        assert_eq!(found.name, "Nike Air Max 90");
        assert_eq!(catalog.find(&id("does-not-exist")), Lookup::NotFound);
    }

    #[test]
    fn test_brands_in_first_appearance_order() {
        let catalog = Catalog::bundled().unwrap();
        let brands = catalog.brands();
        assert_eq!(brands.first(), Some(&"Nike"));
        assert_eq!(brands.get(1), Some(&"Adidas"));
        assert_eq!(brands.iter().filter(|b| **b == "Nike").count(), 1);
    }

    #[test]
    fn test_favorite_products_use_table_order_and_skip_stale_ids() {
        let catalog = Catalog::bundled().unwrap();
        let favorites = vec![id("5"), id("gone"), id("2")];

        let found: Vec<&str> = catalog
            .favorite_products(&favorites)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(found, vec!["2", "5"]);
    }

    #[test]
    fn test_favorite_brands() {
        let catalog = Catalog::bundled().unwrap();
        let favorites = vec![id("5"), id("1"), id("9")];
        assert_eq!(catalog.favorite_brands(&favorites), vec!["Nike", "Puma"]);
    }

    #[test]
    fn test_favorites_view_applies_criteria() {
        let catalog = Catalog::bundled().unwrap();
        let favorites = vec![id("1"), id("3"), id("5")];
        let criteria = FilterCriteria::new().with_brand(BrandFilter::Only("Nike".into()));

        let view = catalog.favorites_view(&favorites, &criteria);
        assert_eq!(view.len(), 1);
        assert_eq!(view.first().unwrap().id, id("1"));
    }
}
