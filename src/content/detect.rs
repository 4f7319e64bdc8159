// src/content/detect.rs
//
// Product-page heuristic: a price AND any one of (add-to-cart button, title, image).
// Each predicate is a selector list checked for existence only.

use crate::core::Document;

pub const PRICE: &str = r#"[itemprop="price"], .price, .product-price"#;
pub const ADD_TO_CART: &str =
    r#"button[name*="add"], button[id*="add-to-cart"], button[class*="add-to-cart"]"#;
pub const TITLE: &str = r#"[itemprop="name"], .product-title, h1"#;
pub const IMAGE: &str = r#"[itemprop="image"], .product-image, .gallery img "#;

/// Which predicates matched; handy for logging and the CLI `detect` output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Signals {
    pub price: bool,
    pub add_to_cart: bool,
    pub title: bool,
    pub image: bool,
}

impl Signals {
    pub fn probe(doc: &Document) -> Self {
        Self {
            price: doc.exists(PRICE),
            add_to_cart: doc.exists(ADD_TO_CART),
            title: doc.exists(TITLE),
            image: doc.exists(IMAGE),
        }
    }

    pub fn is_product_page(&self) -> bool {
        self.price && (self.add_to_cart || self.title || self.image)
    }
}

pub fn is_product_page(doc: &Document) -> bool {
    Signals::probe(doc).is_product_page()
}
