// src/model.rs
//
// Shared data shapes: the persisted Product record and the UI-local filter query.
// Product serializes with camelCase keys so the stored array reads the same
// as the message protocol.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::price;

/// One collected listing.
///
/// `id` is assigned once by the store on add and never rewritten.
/// `price` is display text; use [`Product::numeric_price`] for arithmetic.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub url: String,
    /// Hostname of the originating site.
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_wishlist: Option<bool>,
}

impl Product {
    /// Missing or zero quantity counts as one.
    pub fn quantity(&self) -> u32 {
        self.quantity.filter(|q| *q > 0).unwrap_or(1)
    }

    pub fn in_wishlist(&self) -> bool {
        self.in_wishlist.unwrap_or(false)
    }

    pub fn numeric_price(&self) -> Option<f64> {
        price::parse_price(&self.price)
    }

    pub fn id_is(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }
}

/// Partial product as carried by `UPDATE_PRODUCT`.
///
/// Only keys present on the wire are `Some`; the store overwrites exactly
/// those and leaves the rest of the stored record alone. `id` selects the
/// record and is never written.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_wishlist: Option<bool>,
}

impl ProductPatch {
    /// Empty patch addressed at `id`.
    pub fn for_id(id: impl Into<String>) -> Self {
        Self { id: Some(id.into()), ..Self::default() }
    }
}

/// Whole record as a patch: every required field present, optionals as set.
impl From<Product> for ProductPatch {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: Some(p.name),
            price: Some(p.price),
            image: p.image,
            description: p.description,
            url: Some(p.url),
            source: Some(p.source),
            source_icon: p.source_icon,
            category: p.category,
            added_at: p.added_at,
            updated_at: p.updated_at,
            quantity: p.quantity,
            in_wishlist: p.in_wishlist,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    Price,
    Name,
    Date,
    Source,
}

impl SortBy {
    pub const ALL: [SortBy; 4] = [SortBy::Date, SortBy::Price, SortBy::Name, SortBy::Source];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Price => "price",
            SortBy::Name => "name",
            SortBy::Date => "date",
            SortBy::Source => "source",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "price" => Ok(SortBy::Price),
            "name" => Ok(SortBy::Name),
            "date" => Ok(SortBy::Date),
            "source" => Ok(SortBy::Source),
            other => Err(format!("Unknown sort key: {other}")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("Unknown sort order: {other}")),
        }
    }
}

/// UI-local query over the product array. Never persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterOptions {
    pub category: Option<String>,
    pub source: Option<String>,
    /// Inclusive `(min, max)` over the parsed price.
    pub price_range: Option<(f64, f64)>,
    pub search_query: Option<String>,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortOrder>,
    pub show_wishlist: Option<bool>,
}

impl FilterOptions {
    /// What the popup starts with (and returns to on "Clear all").
    pub fn popup_default() -> Self {
        Self {
            sort_by: Some(SortBy::Date),
            sort_order: Some(SortOrder::Desc),
            ..Self::default()
        }
    }

    /// Category, source, price range or search set.
    pub fn has_active_filters(&self) -> bool {
        let set = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
        set(&self.category) || set(&self.source) || self.price_range.is_some() || set(&self.search_query)
    }
}

/// The two popup tabs: mutually exclusive partitions of the product set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CartTab {
    #[default]
    Cart,
    Wishlist,
}

impl CartTab {
    pub fn shows_wishlist(&self) -> bool {
        matches!(self, CartTab::Wishlist)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CartTab::Cart => "cart",
            CartTab::Wishlist => "wishlist",
        }
    }
}

impl FromStr for CartTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cart" => Ok(CartTab::Cart),
            "wishlist" => Ok(CartTab::Wishlist),
            other => Err(format!("Unknown tab: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_serializes_only_present_keys() {
        let patch = ProductPatch { in_wishlist: Some(true), ..ProductPatch::for_id("abc") };
        let v = serde_json::to_value(&patch).unwrap_or_default();
        assert_eq!(v, serde_json::json!({"id": "abc", "inWishlist": true}));

        let parsed: ProductPatch =
            serde_json::from_str(r#"{"id":"abc","quantity":2}"#).unwrap_or_default();
        assert_eq!(parsed.quantity, Some(2));
        assert!(parsed.name.is_none());
    }

    #[test]
    fn full_product_patch_carries_required_fields() {
        let p = Product {
            id: Some(s!("abc")),
            name: s!("Lamp"),
            price: s!("$2"),
            ..Product::default()
        };
        let patch = ProductPatch::from(p);
        assert_eq!(patch.name.as_deref(), Some("Lamp"));
        assert_eq!(patch.url.as_deref(), Some(""));
        assert!(patch.category.is_none());
    }

    #[test]
    fn camel_case_and_sparse_json() {
        let p = Product {
            name: s!("Widget"),
            price: s!("$19.99"),
            source_icon: Some(s!("https://shop.test/favicon.ico")),
            ..Product::default()
        };
        let v = serde_json::to_value(&p).unwrap_or_default();
        assert!(v.get("sourceIcon").is_some());
        assert!(v.get("inWishlist").is_none());
        assert!(v.get("id").is_none());
    }
}
