// src/cart/filter.rs
//
// Pure functions over a product slice: filter + sort, facet lists, totals.
// Nothing here mutates its input.
//
// Filter steps run in this order and are all conjunctive:
//   wishlist partition → category → source → price range → search → sort

use std::cmp::Ordering;

use chrono::DateTime;

use crate::core::price::{format_amount, parse_price};
use crate::model::{FilterOptions, Product, SortBy, SortOrder};

pub fn filter_products(products: &[Product], options: &FilterOptions) -> Vec<Product> {
    let category = non_empty(&options.category);
    let source = non_empty(&options.source);
    let query = non_empty(&options.search_query).map(str::to_lowercase);

    let mut out: Vec<Product> = products
        .iter()
        .filter(|p| options.show_wishlist.is_none_or(|w| p.in_wishlist() == w))
        .filter(|p| category.is_none_or(|c| p.category.as_deref() == Some(c)))
        .filter(|p| source.is_none_or(|s| p.source == s))
        .filter(|p| match options.price_range {
            // Unparseable prices never fall inside a range.
            Some((lo, hi)) => p.numeric_price().is_some_and(|v| v >= lo && v <= hi),
            None => true,
        })
        .filter(|p| match &query {
            Some(q) => {
                p.name.to_lowercase().contains(q.as_str())
                    || p.description.as_deref().is_some_and(|d| d.to_lowercase().contains(q.as_str()))
            }
            None => true,
        })
        .cloned()
        .collect();

    if let Some(key) = options.sort_by {
        let asc = options.sort_order == Some(SortOrder::Asc);
        // sort_by is stable: equal keys keep their stored order.
        out.sort_by(|a, b| {
            let ord = compare(key, a, b);
            if asc { ord } else { ord.reverse() }
        });
    }
    out
}

fn compare(key: SortBy, a: &Product, b: &Product) -> Ordering {
    match key {
        // Unreadable prices rank below every readable one, keeping the order total.
        SortBy::Price => match (a.numeric_price(), b.numeric_price()) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortBy::Name => text_cmp(&a.name, &b.name),
        SortBy::Date => added_millis(a).cmp(&added_millis(b)),
        SortBy::Source => text_cmp(&a.source, &b.source),
    }
}

/// Case-insensitive first, raw text as tie-break.
fn text_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

/// `addedAt` in epoch millis; missing or unparseable is 0.
pub fn added_millis(p: &Product) -> i64 {
    p.added_at
        .as_deref()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.timestamp_millis())
        .unwrap_or(0)
}

fn non_empty(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}

/* ---------------- facets ---------------- */

/// Distinct categories in first-seen order.
pub fn categories(products: &[Product]) -> Vec<String> {
    distinct(products.iter().filter_map(|p| p.category.as_deref()))
}

/// Distinct source hostnames in first-seen order.
pub fn sources(products: &[Product]) -> Vec<String> {
    distinct(products.iter().map(|p| p.source.as_str()))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for v in values {
        if !v.is_empty() && !out.iter().any(|o| o == v) {
            out.push(v.to_string());
        }
    }
    out
}

/* ---------------- totals ---------------- */

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartTotals {
    pub cart_count: usize,
    pub wishlist_count: usize,
    /// Two decimals, no currency symbol ("25.00").
    pub total_price: String,
}

/// Counts per tab and the cart's price × quantity sum.
/// Wishlist items and unparseable prices don't contribute to the sum.
pub fn cart_totals(products: &[Product]) -> CartTotals {
    let (wish, cart): (Vec<&Product>, Vec<&Product>) = products.iter().partition(|p| p.in_wishlist());

    let sum: f64 = cart
        .iter()
        .filter_map(|p| p.numeric_price().map(|v| v * f64::from(p.quantity())))
        .sum();

    CartTotals {
        cart_count: cart.len(),
        wishlist_count: wish.len(),
        total_price: format_amount(sum),
    }
}

/// Card text: "$" + price × quantity, or the raw price if it can't be read.
pub fn line_total(p: &Product) -> String {
    match parse_price(&p.price) {
        Some(v) => join!("$", &format_amount(v * f64::from(p.quantity()))),
        None => p.price.clone(),
    }
}

/// Card date: "Oct 18, 2026". Empty when `addedAt` is missing or unreadable.
pub fn added_label(p: &Product) -> String {
    p.added_at
        .as_deref()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.format("%b %-d, %Y").to_string())
        .unwrap_or_default()
}
