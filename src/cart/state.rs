// src/cart/state.rs
//
// Reducer-driven snapshot of the stored product array.
// `reduce` is the only way the popup's copy of the products changes.

use crate::model::Product;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartState {
    pub products: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CartAction {
    GetProductsRequest,
    GetProductsSuccess(Vec<Product>),
    GetProductsFailure(String),
    AddProductSuccess(Product),
    AddProductFailure(String),
    /// Payload: removed id.
    RemoveProductSuccess(String),
    RemoveProductFailure(String),
    /// Payload: the product as the store returned it.
    UpdateProductSuccess(Product),
    UpdateProductFailure(String),
    MoveToWishlist(String),
    MoveToCart(String),
}

pub fn reduce(state: CartState, action: CartAction) -> CartState {
    use CartAction::*;

    match action {
        GetProductsRequest => CartState { loading: true, error: None, ..state },
        GetProductsSuccess(products) => CartState { products, loading: false, ..state },
        GetProductsFailure(msg) => CartState { loading: false, error: Some(msg), ..state },

        AddProductSuccess(product) => {
            let mut products = state.products;
            products.push(product);
            CartState { products, ..state }
        }
        RemoveProductSuccess(id) => {
            let products = state.products.into_iter().filter(|p| !p.id_is(&id)).collect();
            CartState { products, ..state }
        }
        UpdateProductSuccess(updated) => {
            let products = state
                .products
                .into_iter()
                .map(|p| if p.id.is_some() && p.id == updated.id { updated.clone() } else { p })
                .collect();
            CartState { products, ..state }
        }
        MoveToWishlist(id) => set_wishlist(state, &id, true),
        MoveToCart(id) => set_wishlist(state, &id, false),

        // Failures of single mutations are reported by the caller's return value only.
        AddProductFailure(_) | RemoveProductFailure(_) | UpdateProductFailure(_) => state,
    }
}

fn set_wishlist(state: CartState, id: &str, flag: bool) -> CartState {
    let products = state
        .products
        .into_iter()
        .map(|mut p| {
            if p.id_is(id) {
                p.in_wishlist = Some(flag);
            }
            p
        })
        .collect();
    CartState { products, ..state }
}
