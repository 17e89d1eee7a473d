//! Plain-text rendering of product grids and details.

use std::io::{self, Write};

use sneaker_shelf::{Product, ProductId};

const NAME_WIDTH: usize = 26;
const PRICE_WIDTH: usize = 13;
const PRICE_UNAVAILABLE: &str = "price unavailable";

/// Write `products` as a grid `columns` cells wide, one row per line.
pub fn grid<W: Write>(
    out: &mut W,
    products: &[&Product],
    columns: u32,
    is_favorite: impl Fn(&ProductId) -> bool,
) -> io::Result<()> {
    let per_row = usize::try_from(columns).unwrap_or(1).max(1);
    for row in products.chunks(per_row) {
        let line = row
            .iter()
            .map(|product| cell(product, is_favorite(&product.id)))
            .collect::<Vec<_>>()
            .join("  |  ");
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}

/// Display price, or a placeholder when the dataset value is unusable.
pub fn price(product: &Product) -> String {
    product
        .price
        .display()
        .unwrap_or_else(|| PRICE_UNAVAILABLE.to_string())
}

fn cell(product: &Product, favorite: bool) -> String {
    let marker = if favorite { '*' } else { ' ' };
    let name = truncate(&product.name, NAME_WIDTH);
    format!(
        "{marker} {id:>3}  {name:<NAME_WIDTH$} {price:>PRICE_WIDTH$}",
        id = product.id,
        price = price(product),
    )
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut short: String = text.chars().take(max.saturating_sub(1)).collect();
    short.push('~');
    short
}
