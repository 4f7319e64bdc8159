// src/core/mod.rs

pub mod dom;
pub mod price;
pub mod sanitize;

pub use dom::Document;
