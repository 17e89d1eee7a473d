//! Grid column computation.

use std::io::{self, Write};

use sneaker_shelf::GridLayout;

/// Print how many columns `layout` renders at `width`.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn columns(layout: &GridLayout, width: f64) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{}", layout.columns(width))
}
