//! Product prices and the derived numeric value used for comparisons.
//!
//! The dataset stores prices either as plain numbers (`899.9`) or as
//! Brazilian-real display strings (`"R$ 1.299,90"`). Every comparison goes
//! through [`Price::derived`], which is the only price parser in the workspace.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::number::read_number_text;

/// Currency symbol stripped from localized prices and used when formatting.
pub const CURRENCY_SYMBOL: &str = "R$";

/// A product price as it appears in the dataset.
///
/// Serializes back to the JSON shape it was read from: amounts as exact JSON
/// numbers, localized prices as strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Price {
    /// A plain numeric amount in reais.
    Amount(Decimal),
    /// A localized currency string, e.g. `"R$ 1.299,90"`.
    Localized(String),
}

impl Price {
    /// The numeric value used for filtering.
    ///
    /// Localized strings that cannot be parsed degrade to zero.
    #[must_use]
    pub fn derived(&self) -> Decimal {
        match self {
            Self::Amount(amount) => *amount,
            Self::Localized(text) => parse_localized(text).unwrap_or(Decimal::ZERO),
        }
    }

    /// Format for display (e.g., `"R$ 1.299,90"`).
    ///
    /// Localized strings that already carry the currency symbol are shown
    /// verbatim. Returns `None` when the price cannot be understood at all.
    #[must_use]
    pub fn display(&self) -> Option<String> {
        match self {
            Self::Amount(amount) => Some(format_brl(*amount)),
            Self::Localized(text) if text.trim_start().starts_with(CURRENCY_SYMBOL) => {
                Some(text.clone())
            }
            Self::Localized(text) => parse_localized(text).map(format_brl),
        }
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self::Amount(amount)
    }
}

impl Serialize for Price {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Amount(amount) => {
                rust_decimal::serde::arbitrary_precision::serialize(amount, serializer)
            }
            Self::Localized(text) => serializer.serialize_str(text),
        }
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(PriceVisitor)
    }
}

struct PriceVisitor;

impl<'de> Visitor<'de> for PriceVisitor {
    type Value = Price;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or a localized price string")
    }

    fn visit_str<E: de::Error>(self, text: &str) -> Result<Price, E> {
        Ok(Price::Localized(text.to_string()))
    }

    fn visit_string<E: de::Error>(self, text: String) -> Result<Price, E> {
        Ok(Price::Localized(text))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Price, E> {
        Ok(Price::Amount(Decimal::from(value)))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Price, E> {
        Ok(Price::Amount(Decimal::from(value)))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Price, E> {
        // Display is the shortest round-trip form, so 899.9 stays 899.9
        Decimal::from_str(&value.to_string())
            .map(Price::Amount)
            .map_err(E::custom)
    }

    fn visit_map<A>(self, map: A) -> Result<Price, A::Error>
    where
        A: MapAccess<'de>,
    {
        let text = read_number_text(map)?;
        Decimal::from_str(&text)
            .or_else(|_| Decimal::from_scientific(&text))
            .map(Price::Amount)
            .map_err(de::Error::custom)
    }
}

/// Parse a pt-BR currency string into a decimal.
///
/// Strips the `R$` symbol and all whitespace, drops `.` thousands separators
/// and turns the `,` decimal separator into `.`.
#[must_use]
pub fn parse_localized(text: &str) -> Option<Decimal> {
    let normalized: String = text
        .replace(CURRENCY_SYMBOL, "")
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    if normalized.is_empty() {
        return None;
    }
    Decimal::from_str(&normalized).ok()
}

/// Format an amount as Brazilian reais with two decimal places.
#[must_use]
pub fn format_brl(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let plain = format!("{:.2}", rounded.abs());
    let (whole, cents) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    format!("{sign}{CURRENCY_SYMBOL} {grouped},{cents}")
}
