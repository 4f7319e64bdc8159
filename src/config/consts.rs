// src/config/consts.rs

// Local store
pub const STORE_DIR: &str = ".store";
pub const STORE_FILE: &str = "storage.json";
pub const CONFIG_FILE: &str = "config.txt";
pub const LOG_FILE: &str = "debug.log";

/// The single record holding the whole product array.
pub const PRODUCTS_KEY: &str = "products";

// Injected button
pub const BUTTON_ID: &str = "Universal-cart-button";
pub const BUTTON_LABEL: &str = "Add to Universal Cart";
pub const BUTTON_LABEL_SENDING: &str = "Adding...";
pub const BUTTON_LABEL_ADDED: &str = "Added to Cart ✓";
pub const BUTTON_LABEL_FAILED: &str = "Failed to Add";
pub const BUTTON_LABEL_ERROR: &str = "Error";

pub const COLOR_BASE: &str = "#3B82F6";
pub const COLOR_HOVER: &str = "#2563EB";
pub const COLOR_SUCCESS: &str = "#10B981";
pub const COLOR_FAILURE: &str = "#EF4444";

pub const RESET_DELAY_MS: u64 = 2_000;

// Badge
pub const BADGE_COLOR: &str = "#3B82F6";
pub const BADGE_BLANK: &str = " ";

// Popup
pub const APP_TITLE: &str = "UniCart";
pub const POPUP_W: f32 = 400.0;
pub const POPUP_H: f32 = 500.0;
pub const STORE_POLL_MS: u64 = 1_000;
