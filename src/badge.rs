// src/badge.rs
//
// Toolbar badge: the number of cart (non-wishlist) items.
//
// Recomputed once on startup and again whenever the store's revision moves.
// A count of zero shows a single blank, with no colour change.

use crate::config::consts::{BADGE_BLANK, BADGE_COLOR};
use crate::model::Product;
use crate::port::CartPort;
use crate::storage::{KvStore, Request};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Badge {
    pub text: String,
    /// Only set when there is something to count.
    pub color: Option<&'static str>,
}

impl Badge {
    pub fn from_products(products: &[Product]) -> Self {
        let count = products.iter().filter(|p| !p.in_wishlist()).count();
        if count > 0 {
            Badge { text: count.to_string(), color: Some(BADGE_COLOR) }
        } else {
            Badge { text: s!(BADGE_BLANK), color: None }
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text == BADGE_BLANK
    }
}

/// Ask the store for the products and build a badge from them.
/// Any port failure skips the update (`None`).
pub fn refresh(port: &dyn CartPort) -> Option<Badge> {
    match port.send(Request::GetProducts) {
        Ok(resp) => Some(Badge::from_products(&resp.into_products())),
        Err(e) => {
            logd!("Badge: Update skipped ({})", e);
            None
        }
    }
}

/// Storage-change listener: remembers the last revision it saw.
#[derive(Debug, Default)]
pub struct BadgeWatch {
    seen: Option<u64>,
}

impl BadgeWatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// New badge if this is the first poll or the store changed since the last one.
    pub fn poll<S: KvStore + ?Sized>(&mut self, store: &S, port: &dyn CartPort) -> Option<Badge> {
        let rev = store.revision();
        if self.seen == Some(rev) {
            return None;
        }
        self.seen = Some(rev);
        refresh(port)
    }
}
