// src/gui/components/mod.rs
pub mod empty_state;
pub mod header;
pub mod product_card;
pub mod product_list;
