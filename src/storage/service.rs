// src/storage/service.rs
//
// Handlers for the four product messages.
//
// Every handler reads the full `products` array, changes it in memory, and
// writes the full array back. Elements are kept as raw JSON between read and
// write, so a record this build cannot parse is skipped by GET_PRODUCTS but
// never dropped by a later write. Reads never fail outward: a missing or
// unreadable record is an empty cart (logged). Writes do fail outward.

use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};

use super::id::generate_unique_id;
use super::kv::kind_of;
use super::{KvStore, Request, Response, StoreError};
use crate::config::consts::PRODUCTS_KEY;
use crate::model::{Product, ProductPatch};

pub const NOT_FOUND: &str = "Product not found";

/// `2026-10-18T09:15:02.123Z`
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub struct StorageService<S> {
    store: S,
}

impl<S: KvStore> StorageService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Message entry point.
    pub fn handle(&self, req: Request) -> Result<Response, StoreError> {
        logd!("Store: {}", req.kind());
        match req {
            Request::AddProduct { product } => self.add_product(product),
            Request::GetProducts => Ok(Response::Products { products: self.get_products() }),
            Request::RemoveProduct { product_id } => self.remove_product(&product_id),
            Request::UpdateProduct { product } => self.update_product(product),
        }
    }

    /// Append with a fresh id (unless one was supplied) and `addedAt` = now.
    pub fn add_product(&self, mut product: Product) -> Result<Response, StoreError> {
        let mut records = self.load_raw();

        if product.id.as_deref().is_none_or(str::is_empty) {
            product.id = Some(generate_unique_id());
        }
        product.added_at = Some(now_iso());

        records.push(serde_json::to_value(&product)?);
        self.save(records.as_slice())?;

        logf!(
            "Store: Added id={} from {} ({} total)",
            product.id.as_deref().unwrap_or_default(),
            product.source,
            records.len()
        );
        Ok(Response::ok_with(product))
    }

    /// Every element that parses as a product, in stored order.
    pub fn get_products(&self) -> Vec<Product> {
        self.load_raw()
            .into_iter()
            .enumerate()
            .filter_map(|(i, v)| match serde_json::from_value::<Product>(v) {
                Ok(p) => Some(p),
                Err(e) => {
                    loge!("Store: Skipping `{}`[{}]: {}", PRODUCTS_KEY, i, e);
                    None
                }
            })
            .collect()
    }

    /// Always succeeds when the write does, whether or not `id` was present.
    pub fn remove_product(&self, id: &str) -> Result<Response, StoreError> {
        let mut records = self.load_raw();
        let before = records.len();
        records.retain(|v| id_of(v) != Some(id));
        self.save(records.as_slice())?;

        logf!("Store: Removed id={} ({} → {})", id, before, records.len());
        Ok(Response::ok())
    }

    /// Overwrite the keys the patch carries on the stored record with the
    /// same id, then stamp `updatedAt`. Keys absent from the patch are kept.
    pub fn update_product(&self, patch: ProductPatch) -> Result<Response, StoreError> {
        let Some(id) = patch.id.clone().filter(|id| !id.is_empty()) else {
            logd!("Store: Update without id");
            return Ok(Response::failed(NOT_FOUND));
        };

        let mut records = self.load_raw();
        let Some(slot) = records.iter_mut().find_map(|v| match v {
            Value::Object(map) if map.get("id").and_then(Value::as_str) == Some(id.as_str()) => {
                Some(map)
            }
            _ => None,
        }) else {
            logd!("Store: Update miss id={}", id);
            return Ok(Response::failed(NOT_FOUND));
        };

        merge_present(slot, serde_json::to_value(&patch)?);
        slot.insert(s!("updatedAt"), Value::String(now_iso()));
        let merged = Value::Object(slot.clone());

        self.save(records.as_slice())?;
        logf!("Store: Updated id={}", id);

        match serde_json::from_value::<Product>(merged) {
            Ok(updated) => Ok(Response::ok_with(updated)),
            Err(e) => {
                loge!("Store: Updated id={} no longer reads as a product: {}", id, e);
                Ok(Response::ok())
            }
        }
    }

    /// Raw `products` elements. Missing, unreadable or non-array records are empty.
    fn load_raw(&self) -> Vec<Value> {
        match self.store.get(PRODUCTS_KEY) {
            Ok(Some(Value::Array(items))) => items,
            Ok(Some(other)) => {
                loge!("Store: `{}` holds {}, reading as empty", PRODUCTS_KEY, kind_of(&other));
                Vec::new()
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                loge!("Store: Read failed: {}", e);
                Vec::new()
            }
        }
    }

    fn save(&self, records: &[Value]) -> Result<(), StoreError> {
        self.store.set(PRODUCTS_KEY, Value::Array(records.to_vec())).inspect_err(|e| {
            loge!("Store: Write failed: {}", e);
        })
    }
}

fn id_of(v: &Value) -> Option<&str> {
    v.get("id").and_then(Value::as_str)
}

/// Shallow merge of a serialized patch. Only keys present in `patch` are
/// written; `id` is never rewritten.
fn merge_present(slot: &mut Map<String, Value>, patch: Value) {
    let Value::Object(fields) = patch else { return };
    for (key, value) in fields {
        if key != "id" {
            slot.insert(key, value);
        }
    }
}
