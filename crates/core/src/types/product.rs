//! Product records from the static catalog.

use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// A place where a product can be bought.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreLink {
    /// Store display name (e.g., "Netshoes").
    #[serde(alias = "name")]
    pub store: String,
    /// Purchase URL.
    #[serde(alias = "link")]
    pub url: String,
}

/// An immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub price: Price,
    /// Image reference (asset path or URL).
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Where to buy, in display order.
    #[serde(default)]
    pub stores: Vec<StoreLink>,
}
