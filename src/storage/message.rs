// src/storage/message.rs
//
// Request/response pairs spoken between the page, the popup and the store.
// On the wire a request is `{"type": "ADD_PRODUCT", "product": {...}}`;
// a response is the bare object (`{"success": true, "product": {...}}`).

use serde::{Deserialize, Serialize};

use crate::model::{Product, ProductPatch};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Request {
    AddProduct { product: Product },
    GetProducts,
    RemoveProduct {
        #[serde(rename = "productId")]
        product_id: String,
    },
    /// Only the keys present in `product` are written.
    UpdateProduct { product: ProductPatch },
}

impl Request {
    pub fn kind(&self) -> &'static str {
        match self {
            Request::AddProduct { .. } => "ADD_PRODUCT",
            Request::GetProducts => "GET_PRODUCTS",
            Request::RemoveProduct { .. } => "REMOVE_PRODUCT",
            Request::UpdateProduct { .. } => "UPDATE_PRODUCT",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    Products {
        products: Vec<Product>,
    },
    /// Add, remove and update all answer with this shape; fields are
    /// present as the operation warrants.
    Ack {
        success: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        product: Option<Product>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
}

impl Response {
    pub fn ok() -> Self {
        Response::Ack { success: true, product: None, error: None }
    }

    pub fn ok_with(product: Product) -> Self {
        Response::Ack { success: true, product: Some(product), error: None }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Response::Ack { success: false, product: None, error: Some(error.into()) }
    }

    /// `success: true`. A product listing counts as success.
    pub fn is_success(&self) -> bool {
        match self {
            Response::Products { .. } => true,
            Response::Ack { success, .. } => *success,
        }
    }

    pub fn product(&self) -> Option<&Product> {
        match self {
            Response::Ack { product, .. } => product.as_ref(),
            Response::Products { .. } => None,
        }
    }

    pub fn into_product(self) -> Option<Product> {
        match self {
            Response::Ack { product, .. } => product,
            Response::Products { .. } => None,
        }
    }

    /// Listing payload; anything else reads as an empty list.
    pub fn into_products(self) -> Vec<Product> {
        match self {
            Response::Products { products } => products,
            Response::Ack { .. } => Vec::new(),
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Response::Ack { error, .. } => error.as_deref(),
            Response::Products { .. } => None,
        }
    }
}
