//! Favorite toggling.

use std::io::{self, Write};

use sneaker_shelf::{KeyValueStore, ProductId, Shelf, ToggleOutcome};
use tracing::warn;

/// Add `id` to favorites, or remove it if it is already there.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn toggle<S: KeyValueStore>(shelf: &mut Shelf<S>, id: &ProductId) -> io::Result<()> {
    let outcome = shelf.toggle_favorite(id);
    let mut out = io::stdout().lock();

    match outcome {
        ToggleOutcome::Added => writeln!(out, "Added {id} to favorites"),
        ToggleOutcome::Removed => writeln!(out, "Removed {id} from favorites"),
        ToggleOutcome::UnknownProduct => {
            warn!(product_id = %id, "Refusing to favorite unknown product");
            writeln!(out, "Product not found: {id}")
        }
    }
}
