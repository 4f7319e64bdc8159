// src/content/mod.rs
//! # Content side: what runs "inside" a shop page
//!
//! - `detect`: is this document a product page?
//! - `extract`: pull name/price/image/description via selector fallback chains.
//! - `button`: the injected "Add to Universal Cart" button and its state cycle.
//! - `session`: one open page; ties the three together and talks to the port.
//!
//! Nothing here persists anything. Adding a product is a message through
//! [`crate::port::CartPort`]; the storage side decides ids and timestamps.

pub mod button;
pub mod detect;
pub mod extract;
pub mod session;

pub use button::{ButtonState, CartButton};
pub use detect::is_product_page;
pub use extract::extract_product;
pub use session::PageSession;
