// src/cart/mod.rs
//! # Popup-side cart state
//!
//! - `state`: `CartState` plus the reducer that is its only mutator.
//! - `filter`: pure filter/sort/aggregate functions over a product slice.
//! - `controller`: `Cart<P>`, which talks to the store through a port and
//!   feeds the replies into the reducer.

pub mod controller;
pub mod filter;
pub mod state;

pub use controller::Cart;
pub use filter::{added_label, cart_totals, categories, filter_products, line_total, sources, CartTotals};
pub use state::{reduce, CartAction, CartState};
