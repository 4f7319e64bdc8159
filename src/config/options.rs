// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;
use crate::model::{CartTab, SortBy, SortOrder};

#[derive(Clone, Debug, PartialEq, Default)]
pub struct AppOptions {
    pub store: StoreOptions,
    pub view: ViewOptions,
    pub button: ButtonOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreOptions {
    pub dir: PathBuf,
    pub file: String,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(STORE_DIR),
            file: s!(STORE_FILE),
        }
    }
}

impl StoreOptions {
    /// `<dir>/<file>`
    pub fn store_path(&self) -> PathBuf {
        self.dir.join(&self.file)
    }

    pub fn log_path(&self) -> PathBuf {
        self.dir.join(LOG_FILE)
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }
}

/// What the popup opens with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewOptions {
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
    pub default_tab: CartTab,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            sort_by: SortBy::Date,
            sort_order: SortOrder::Desc,
            default_tab: CartTab::Cart,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonOptions {
    pub reset_delay_ms: u64,
}

impl Default for ButtonOptions {
    fn default() -> Self {
        Self { reset_delay_ms: RESET_DELAY_MS }
    }
}

impl ButtonOptions {
    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }
}
