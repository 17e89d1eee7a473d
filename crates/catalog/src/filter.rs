//! Brand, price and text criteria over the product table.
//!
//! Every active criterion must hold (logical AND). Results keep the table's
//! order.

use std::str::FromStr;

use rust_decimal::Decimal;
use sneaker_shelf_core::{BrandFilter, Product};
use thiserror::Error;

use crate::search::SearchTerm;

/// Errors building criteria from user input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("price bound must not be negative: {0}")]
    NegativePrice(Decimal),
    #[error("invalid price bound: {0:?}")]
    InvalidPrice(String),
}

/// The active constraints of a product list view.
///
/// The default value constrains nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub brand: BrandFilter,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    /// `Some("")` is a search with nothing typed yet and matches nothing.
    pub search: Option<String>,
}

impl FilterCriteria {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_brand(mut self, brand: BrandFilter) -> Self {
        self.brand = brand;
        self
    }

    /// Set the inclusive price range.
    ///
    /// An inverted range is accepted and matches nothing.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::NegativePrice` if either bound is below zero.
    pub fn with_price_range(
        mut self,
        min: Option<Decimal>,
        max: Option<Decimal>,
    ) -> Result<Self, FilterError> {
        for bound in [min, max].into_iter().flatten() {
            if bound.is_sign_negative() && !bound.is_zero() {
                return Err(FilterError::NegativePrice(bound));
            }
        }
        self.min_price = min;
        self.max_price = max;
        Ok(self)
    }

    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Whether any criterion narrows the table.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.brand.is_all()
            || self.min_price.is_some()
            || self.max_price.is_some()
            || self.search.is_some()
    }

    /// Reset every criterion.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether a single product satisfies every criterion.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        self.evaluator().matches(product)
    }

    pub(crate) fn evaluator(&self) -> Evaluator<'_> {
        Evaluator {
            brand: &self.brand,
            min: self.min_price.unwrap_or(Decimal::MIN),
            max: self.max_price.unwrap_or(Decimal::MAX),
            search: self.search.as_deref().map(SearchTerm::new),
        }
    }
}

/// Criteria with the search term folded once, for evaluating many products.
pub(crate) struct Evaluator<'c> {
    brand: &'c BrandFilter,
    min: Decimal,
    max: Decimal,
    search: Option<SearchTerm>,
}

impl Evaluator<'_> {
    pub(crate) fn matches(&self, product: &Product) -> bool {
        if !self.brand.matches(&product.brand) {
            return false;
        }
        let price = product.price.derived();
        if price < self.min || price > self.max {
            return false;
        }
        self.search
            .as_ref()
            .is_none_or(|term| term.matches(&product.name))
    }
}

/// Products satisfying `criteria`, in table order.
#[must_use]
pub fn filter<'a>(products: &'a [Product], criteria: &FilterCriteria) -> Vec<&'a Product> {
    let evaluator = criteria.evaluator();
    products.iter().filter(|p| evaluator.matches(p)).collect()
}

/// Parse a user-typed price bound. Blank input means "no bound".
///
/// # Errors
///
/// Returns `FilterError::InvalidPrice` for text that is not a number and
/// `FilterError::NegativePrice` for numbers below zero.
pub fn parse_price_bound(input: &str) -> Result<Option<Decimal>, FilterError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value = Decimal::from_str(trimmed)
        .map_err(|_| FilterError::InvalidPrice(trimmed.to_string()))?;
    if value.is_sign_negative() && !value.is_zero() {
        return Err(FilterError::NegativePrice(value));
    }
    Ok(Some(value))
}
