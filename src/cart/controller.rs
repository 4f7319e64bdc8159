// src/cart/controller.rs
//
// `Cart<P>`: the popup's handle on the store.
//
// Each mutation is a round trip through the port; only a successful reply is
// fed into the reducer, so `state()` never runs ahead of what was persisted.
// With no host (`PortError::Unavailable`) a fetch reads as an empty cart and
// mutations report `false`.

use super::filter::{self, CartTotals};
use super::state::{reduce, CartAction, CartState};
use crate::model::{FilterOptions, Product, ProductPatch};
use crate::port::{CartPort, PortError};
use crate::storage::{Request, Response};

pub struct Cart<P> {
    port: P,
    state: CartState,
}

impl<P: CartPort> Cart<P> {
    pub fn new(port: P) -> Self {
        Self { port, state: CartState::default() }
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    pub fn products(&self) -> &[Product] {
        &self.state.products
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    fn dispatch(&mut self, action: CartAction) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
    }

    fn find(&self, id: &str) -> Option<Product> {
        self.state.products.iter().find(|p| p.id_is(id)).cloned()
    }

    /* ---------------- round trips ---------------- */

    pub fn fetch_products(&mut self) -> bool {
        self.dispatch(CartAction::GetProductsRequest);
        match self.port.send(Request::GetProducts) {
            Ok(resp) => {
                self.dispatch(CartAction::GetProductsSuccess(resp.into_products()));
                true
            }
            Err(PortError::Unavailable) => {
                logd!("Cart: No host, showing an empty cart");
                self.dispatch(CartAction::GetProductsSuccess(Vec::new()));
                true
            }
            Err(e) => {
                loge!("Cart: Fetch failed: {}", e);
                self.dispatch(CartAction::GetProductsFailure(s!("Failed to fetch products")));
                false
            }
        }
    }

    pub fn add_product(&mut self, product: Product) -> bool {
        match self.port.send(Request::AddProduct { product }) {
            Ok(resp) => self.accept(resp, CartAction::AddProductSuccess),
            Err(e) => {
                self.report("add", &e);
                self.dispatch(CartAction::AddProductFailure(s!("Failed to add product")));
                false
            }
        }
    }

    pub fn remove_product(&mut self, id: &str) -> bool {
        match self.port.send(Request::RemoveProduct { product_id: id.to_string() }) {
            Ok(resp) if resp.is_success() => {
                self.dispatch(CartAction::RemoveProductSuccess(id.to_string()));
                true
            }
            Ok(_) => false,
            Err(e) => {
                self.report("remove", &e);
                self.dispatch(CartAction::RemoveProductFailure(s!("Failed to remove product")));
                false
            }
        }
    }

    /// Sends only what `patch` carries; a full `Product` converts into a
    /// patch with every field set.
    pub fn update_product(&mut self, patch: impl Into<ProductPatch>) -> bool {
        match self.port.send(Request::UpdateProduct { product: patch.into() }) {
            Ok(resp) => self.accept(resp, CartAction::UpdateProductSuccess),
            Err(e) => {
                self.report("update", &e);
                self.dispatch(CartAction::UpdateProductFailure(s!("Failed to update product")));
                false
            }
        }
    }

    /// Success replies carrying a product go into the reducer; anything else
    /// (including `{success: false}`) is a quiet `false`.
    fn accept(&mut self, resp: Response, action: fn(Product) -> CartAction) -> bool {
        if !resp.is_success() {
            logd!("Cart: Store refused ({:?})", resp.error());
            return false;
        }
        match resp.into_product() {
            Some(p) => {
                self.dispatch(action(p));
                true
            }
            None => false,
        }
    }

    fn report(&self, op: &str, e: &PortError) {
        match e {
            PortError::Unavailable => logd!("Cart: No host for {}", op),
            _ => loge!("Cart: Failed to {} product: {}", op, e),
        }
    }

    /* ---------------- convenience mutations ---------------- */

    pub fn move_to_wishlist(&mut self, id: &str) -> bool {
        self.set_wishlist(id, true)
    }

    pub fn move_to_cart(&mut self, id: &str) -> bool {
        self.set_wishlist(id, false)
    }

    fn set_wishlist(&mut self, id: &str, flag: bool) -> bool {
        if self.find(id).is_none() {
            return false;
        }
        let patch = ProductPatch { in_wishlist: Some(flag), ..ProductPatch::for_id(id) };
        if !self.update_product(patch) {
            return false;
        }
        let action = if flag {
            CartAction::MoveToWishlist(id.to_string())
        } else {
            CartAction::MoveToCart(id.to_string())
        };
        self.dispatch(action);
        true
    }

    /// Quantities below one are stored as one.
    pub fn update_quantity(&mut self, id: &str, quantity: u32) -> bool {
        if self.find(id).is_none() {
            return false;
        }
        let patch = ProductPatch { quantity: Some(quantity.max(1)), ..ProductPatch::for_id(id) };
        self.update_product(patch)
    }

    /* ---------------- derived views ---------------- */

    pub fn filter_products(&self, options: &FilterOptions) -> Vec<Product> {
        filter::filter_products(&self.state.products, options)
    }

    pub fn categories(&self) -> Vec<String> {
        filter::categories(&self.state.products)
    }

    pub fn sources(&self) -> Vec<String> {
        filter::sources(&self.state.products)
    }

    pub fn cart_totals(&self) -> CartTotals {
        filter::cart_totals(&self.state.products)
    }
}
