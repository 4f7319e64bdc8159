// src/storage/mod.rs
//! # Storage side (the extension's background worker)
//!
//! - `kv`: where bytes live (`FileStore` on disk, `MemoryStore` for tests).
//! - `message`: the four request/response shapes.
//! - `service`: the handlers; every call rewrites the whole `products` array.
//! - `id`: product id generation.
//!
//! Callers never touch a `KvStore` for products directly; they go through a
//! [`crate::port::CartPort`], which ends up in [`StorageService::handle`].

pub mod id;
pub mod kv;
pub mod message;
pub mod service;

pub use kv::{FileStore, KvStore, MemoryStore};
pub use message::{Request, Response};
pub use service::StorageService;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("store JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unexpected store contents: {0}")]
    Shape(String),
}
