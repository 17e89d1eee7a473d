//! Responsive grid sizing for product lists.

/// Horizontal gap between grid cells, in layout units.
pub const DEFAULT_GAP: u32 = 4;

/// Width of one product card, in layout units.
pub const DEFAULT_ITEM_WIDTH: u32 = 142;

/// Fixed card geometry used to fit a grid into a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub gap: u32,
    pub item_width: u32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::new(DEFAULT_GAP, DEFAULT_ITEM_WIDTH)
    }
}

impl GridLayout {
    #[must_use]
    pub const fn new(gap: u32, item_width: u32) -> Self {
        Self { gap, item_width }
    }

    /// Number of columns for a viewport `width` units wide. Always at least 1.
    ///
    /// Three or more fitting columns are reduced by one, trading density for
    /// wider margins on large screens.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn columns(&self, width: f64) -> u32 {
        let gap = f64::from(self.gap);
        let stride = f64::from(self.item_width) + gap;
        let raw = ((width + gap) / stride).floor();

        // non-finite widths and a zero stride land here
        if !raw.is_finite() || raw < 1.0 {
            return 1;
        }
        let fitted = raw.min(f64::from(u32::MAX)) as u32;
        if fitted >= 3 { fitted - 1 } else { fitted }
    }

    /// Number of rows `items` cards occupy at `width`.
    #[must_use]
    pub fn rows(&self, items: usize, width: f64) -> usize {
        let columns = usize::try_from(self.columns(width)).unwrap_or(usize::MAX);
        items.div_ceil(columns)
    }
}

/// Columns for `width` using the default card geometry.
#[must_use]
pub fn columns(width: f64) -> u32 {
    GridLayout::default().columns(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrow_phone_gets_two_columns() {
        // floor(304 / 146) = 2
        assert_eq!(columns(300.0), 2);
    }

    #[test]
    fn test_wide_screen_drops_one_column() {
        // floor(604 / 146) = 4, reduced to 3
        assert_eq!(columns(600.0), 3);
    }

    #[test]
    fn test_exactly_three_fitting_becomes_two() {
        // floor(442 / 146) = 3, reduced to 2
        assert_eq!(columns(438.0), 2);
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(columns(142.0), 1);
        assert_eq!(columns(287.9), 1);
        assert_eq!(columns(288.0), 2);
    }

    #[test]
    fn test_minimum_is_one() {
        assert_eq!(columns(0.0), 1);
        assert_eq!(columns(-500.0), 1);
        assert_eq!(columns(f64::NAN), 1);
    }

    #[test]
    fn test_degenerate_geometry() {
        assert_eq!(GridLayout::new(0, 0).columns(300.0), 1);
    }

    #[test]
    fn test_huge_width_saturates() {
        assert_eq!(columns(f64::INFINITY), 1);
        assert_eq!(columns(1e300), u32::MAX - 1);
    }

    #[test]
    fn test_rows() {
        let layout = GridLayout::default();
        assert_eq!(layout.rows(0, 300.0), 0);
        assert_eq!(layout.rows(5, 300.0), 3);
        assert_eq!(layout.rows(6, 600.0), 2);
    }
}
