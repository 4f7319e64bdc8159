// src/content/extract.rs
//! Product extraction from the current page.
//!
//! Each field has a fixed priority list of selectors. For every selector the
//! *first* matching element is looked at; if its text content is non-empty
//! the trimmed text is taken and the chain stops. Whitespace-only text still
//! stops the chain (it trims to ""), which is what makes such a page fail the
//! name/price check below.
//!
//! The image chain reads text content too, not `src`. `<img>` has no text, so
//! `image` comes back empty on nearly every page.

use url::Url;

use crate::core::Document;
use crate::model::Product;

pub const NAME_SELECTORS: &[&str] = &[
    r#"[itemprop="name"]"#,
    "h1",
    ".product-title",
    ".product-name",
    "#product-title",
];

pub const PRICE_SELECTORS: &[&str] = &[
    r#"[itemprop="price"]"#,
    "price",
    ".product-price",
    ".current-price",
    "#product-price",
];

pub const IMAGE_SELECTORS: &[&str] = &[
    r#"[itemprop="image"]"#,
    ".product-image img",
    ".gallery img",
    "#product-image",
    "img.product",
];

pub const DESCRIPTION_SELECTORS: &[&str] = &[
    r#"[itemprop = "description"]"#,
    ".product-description",
    ".description",
    "#product-description",
];

/// Walk one selector chain.
pub fn first_text_of(doc: &Document, selectors: &[&str]) -> String {
    for sel in selectors {
        if let Some(text) = doc.first_text(sel) {
            if !text.is_empty() {
                return text.trim().to_string();
            }
        }
    }
    s!()
}

/// Candidate product for the page at `location`, or None if name or price is missing.
/// `id`, `addedAt` and friends are left for the store to fill in.
pub fn extract_product(doc: &Document, location: &Url) -> Option<Product> {
    let name = first_text_of(doc, NAME_SELECTORS);
    let price = first_text_of(doc, PRICE_SELECTORS);
    let image = first_text_of(doc, IMAGE_SELECTORS);
    let description = first_text_of(doc, DESCRIPTION_SELECTORS);

    if name.is_empty() || price.is_empty() {
        logd!(
            "Content: Extract gave up on {} (name={}, price={})",
            location,
            !name.is_empty(),
            !price.is_empty()
        );
        return None;
    }

    Some(Product {
        name,
        price,
        image: Some(image),
        description: Some(description),
        url: location.to_string(),
        source: location.host_str().unwrap_or_default().to_string(),
        source_icon: Some(join!(&location.origin().ascii_serialization(), "/favicon.ico")),
        ..Product::default()
    })
}
