//! Product list views: home, search, favorites and brand choices.

use std::io::{self, Write};

use sneaker_shelf::{ALL_BRANDS, FilterCriteria, KeyValueStore, Product, Shelf};
use tracing::debug;

use crate::render;

/// Home view.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn list<S: KeyValueStore>(
    shelf: &Shelf<S>,
    criteria: &FilterCriteria,
    width: f64,
) -> io::Result<()> {
    let products = shelf.browse(criteria);
    debug!(count = products.len(), active = criteria.is_active(), "Home view");
    show_grid(shelf, &products, width, "No sneakers match these filters")
}

/// Search view. Nothing is listed until a term is given.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn search<S: KeyValueStore>(shelf: &Shelf<S>, term: &str, width: f64) -> io::Result<()> {
    if term.trim().is_empty() {
        let mut out = io::stdout().lock();
        return writeln!(out, "Type a sneaker name to search");
    }
    let products = shelf.search(term);
    show_grid(shelf, &products, width, "No sneakers found")
}

/// Favorites view.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn favorites<S: KeyValueStore>(
    shelf: &Shelf<S>,
    criteria: &FilterCriteria,
    width: f64,
) -> io::Result<()> {
    let empty_message = if shelf.favorites().is_empty() {
        "You have no favorites yet!"
    } else {
        "No favorites match these filters"
    };
    let products = shelf.favorites_view(criteria);
    show_grid(shelf, &products, width, empty_message)
}

/// Brands offered by the brand filter, starting with the "all" sentinel.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn brands<S: KeyValueStore>(shelf: &Shelf<S>, favorites_only: bool) -> io::Result<()> {
    let brands = if favorites_only {
        shelf.favorite_brands()
    } else {
        shelf.catalog().brands()
    };

    let mut out = io::stdout().lock();
    writeln!(out, "{ALL_BRANDS}")?;
    for brand in brands {
        writeln!(out, "{brand}")?;
    }
    Ok(())
}

fn show_grid<S: KeyValueStore>(
    shelf: &Shelf<S>,
    products: &[&Product],
    width: f64,
    empty_message: &str,
) -> io::Result<()> {
    let mut out = io::stdout().lock();
    if products.is_empty() {
        return writeln!(out, "{empty_message}");
    }
    let columns = shelf.columns(width);
    debug!(
        columns,
        rows = shelf.layout().rows(products.len(), width),
        "Rendering grid"
    );
    render::grid(&mut out, products, columns, |id| shelf.is_favorite(id))
}
