//! The shelf: catalog, favorites and layout owned together.

use sneaker_shelf_core::{Product, ProductId};
use tracing::{info, instrument};

use crate::catalog::{Catalog, Lookup};
use crate::config::ShelfConfig;
use crate::error::Result;
use crate::favorites::FavoritesStore;
use crate::filter::{FilterCriteria, filter};
use crate::layout::GridLayout;
use crate::storage::{FileStore, KeyValueStore};

/// Result of toggling a favorite through the shelf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// The ID is neither in the catalog nor already a favorite; nothing changed.
    UnknownProduct,
}

/// Everything a front end needs, owned in one place.
#[derive(Debug)]
pub struct Shelf<S> {
    catalog: Catalog,
    favorites: FavoritesStore<S>,
    layout: GridLayout,
}

impl Shelf<FileStore> {
    /// Build a shelf from configuration: catalog from the configured path or
    /// the bundled dataset, favorites from files under the data directory.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::Catalog` if the dataset cannot be loaded.
    #[instrument(skip_all, fields(data_dir = %config.data_dir.display()))]
    pub async fn from_config(config: &ShelfConfig) -> Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::from_path(path).await?,
            None => Catalog::bundled()?,
        };
        info!(products = catalog.len(), "Catalog ready");

        let storage = FileStore::new(&config.data_dir);
        Ok(Self::open(catalog, storage, GridLayout::default()).await)
    }
}

impl<S: KeyValueStore> Shelf<S> {
    /// Assemble a shelf and load favorites from `storage`.
    pub async fn open(catalog: Catalog, storage: S, layout: GridLayout) -> Self {
        Self {
            catalog,
            favorites: FavoritesStore::open(storage).await,
            layout,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn favorites(&self) -> &FavoritesStore<S> {
        &self.favorites
    }

    #[must_use]
    pub const fn layout(&self) -> GridLayout {
        self.layout
    }

    /// The home view: the whole table narrowed by `criteria`.
    #[must_use]
    pub fn browse(&self, criteria: &FilterCriteria) -> Vec<&Product> {
        filter(self.catalog.products(), criteria)
    }

    /// The search view. A blank term yields nothing.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&Product> {
        filter(
            self.catalog.products(),
            &FilterCriteria::new().with_search(term),
        )
    }

    /// The favorites view: favorite products narrowed by `criteria`.
    #[must_use]
    pub fn favorites_view(&self, criteria: &FilterCriteria) -> Vec<&Product> {
        self.catalog
            .favorites_view(self.favorites.ids(), criteria)
    }

    /// Brands offered by the favorites filter.
    #[must_use]
    pub fn favorite_brands(&self) -> Vec<&str> {
        self.catalog.favorite_brands(self.favorites.ids())
    }

    /// The details view for `id`.
    #[must_use]
    pub fn details(&self, id: &ProductId) -> Lookup<'_> {
        self.catalog.find(id)
    }

    #[must_use]
    pub fn is_favorite(&self, id: &ProductId) -> bool {
        self.favorites.is_favorite(id)
    }

    /// Toggle a favorite, refusing to add IDs the catalog does not know.
    ///
    /// Stale favorites (IDs no longer in the catalog) can still be removed.
    pub fn toggle_favorite(&mut self, id: &ProductId) -> ToggleOutcome {
        if !self.catalog.contains(id) && !self.favorites.is_favorite(id) {
            return ToggleOutcome::UnknownProduct;
        }
        if self.favorites.toggle(id) {
            ToggleOutcome::Added
        } else {
            ToggleOutcome::Removed
        }
    }

    /// Columns for a viewport `width` units wide.
    #[must_use]
    pub fn columns(&self, width: f64) -> u32 {
        self.layout.columns(width)
    }

    /// Wait for pending favorites writes.
    pub async fn flush(&self) {
        self.favorites.flush().await;
    }
}
