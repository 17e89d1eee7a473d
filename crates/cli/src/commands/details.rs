//! Product details view.

use std::io::{self, Write};

use sneaker_shelf::{KeyValueStore, Lookup, ProductId, Shelf};

use crate::render;

/// Print a product's details and where to buy it.
///
/// Unknown IDs print a "not found" line rather than failing.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn show<S: KeyValueStore>(shelf: &Shelf<S>, id: &ProductId) -> io::Result<()> {
    write_details(&mut io::stdout().lock(), shelf, id)
}

fn write_details<W: Write, S: KeyValueStore>(
    out: &mut W,
    shelf: &Shelf<S>,
    id: &ProductId,
) -> io::Result<()> {
    let Lookup::Found(product) = shelf.details(id) else {
        return writeln!(out, "Product not found: {id}");
    };

    writeln!(out, "{}", product.name)?;
    writeln!(out, "Brand:    {}", product.brand)?;
    writeln!(out, "Price:    {}", render::price(product))?;
    writeln!(out, "Image:    {}", product.image)?;
    if shelf.is_favorite(&product.id) {
        writeln!(out, "Favorite: yes")?;
    } else {
        writeln!(out, "Favorite: no")?;
    }

    if let Some(description) = product.description.as_deref() {
        writeln!(out)?;
        writeln!(out, "{description}")?;
    }

    writeln!(out)?;
    if product.stores.is_empty() {
        writeln!(out, "No stores listed")?;
    } else {
        writeln!(out, "Available at:")?;
        for link in &product.stores {
            writeln!(out, "  {} - {}", link.store, link.url)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use sneaker_shelf::{Catalog, GridLayout, MemoryStore};

    use super::*;

    async fn shelf() -> Shelf<MemoryStore> {
        Shelf::open(
            Catalog::bundled().unwrap(),
            MemoryStore::with_entry("favorites", r#"["3"]"#),
            GridLayout::default(),
        )
        .await
    }

    fn details(shelf: &Shelf<MemoryStore>, id: &str) -> String {
        let mut out = Vec::new();
        write_details(&mut out, shelf, &id.into()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_unknown_product_prints_not_found() {
        let shelf = shelf().await;
        assert_eq!(details(&shelf, "999"), "Product not found: 999\n");
    }

    #[tokio::test]
    async fn test_known_product_lists_stores() {
        let shelf = shelf().await;
        let text = details(&shelf, "3");

        assert!(text.starts_with("Adidas Ultraboost Light\n"));
        assert!(text.contains("Price:    R$ 1.099,99"));
        assert!(text.contains("Favorite: yes"));
        assert!(text.contains("Available at:"));
        assert!(text.contains("https://www.adidas.com.br/ultraboost-light"));
    }

    #[tokio::test]
    async fn test_non_favorite_product() {
        let shelf = shelf().await;
        assert!(details(&shelf, "1").contains("Favorite: no"));
    }
}
