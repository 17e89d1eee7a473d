//! Brand selection used by catalog filters.

use serde::{Deserialize, Serialize};

/// Sentinel accepted in place of a brand name to disable brand filtering.
pub const ALL_BRANDS: &str = "all";

/// Which brand a product list is narrowed to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrandFilter {
    /// Every brand passes.
    #[default]
    All,
    /// Only products whose brand equals this value exactly.
    Only(String),
}

impl BrandFilter {
    /// Whether a product with `brand` passes this filter.
    #[must_use]
    pub fn matches(&self, brand: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == brand,
        }
    }

    /// Whether this filter narrows anything.
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl std::fmt::Display for BrandFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "{ALL_BRANDS}"),
            Self::Only(brand) => write!(f, "{brand}"),
        }
    }
}

impl std::str::FromStr for BrandFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("brand cannot be empty".to_string());
        }
        if trimmed.eq_ignore_ascii_case(ALL_BRANDS) {
            Ok(Self::All)
        } else {
            Ok(Self::Only(trimmed.to_string()))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sentinel() {
        assert_eq!("all".parse::<BrandFilter>().unwrap(), BrandFilter::All);
        assert_eq!("ALL".parse::<BrandFilter>().unwrap(), BrandFilter::All);
    }

    #[test]
    fn test_parse_brand() {
        assert_eq!(
            " Nike ".parse::<BrandFilter>().unwrap(),
            BrandFilter::Only("Nike".to_string())
        );
    }

    #[test]
    fn test_parse_empty() {
        assert!("  ".parse::<BrandFilter>().is_err());
    }

    #[test]
    fn test_matches_is_exact() {
        let nike = BrandFilter::Only("Nike".to_string());
        assert!(nike.matches("Nike"));
        assert!(!nike.matches("nike"));
        assert!(!nike.matches("Adidas"));
        assert!(BrandFilter::All.matches("anything"));
    }
}
