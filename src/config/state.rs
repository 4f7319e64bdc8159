// src/config/state.rs
use super::options::AppOptions;
use crate::model::{CartTab, FilterOptions};

/// Popup view state. Lives as long as the window; only `options` is saved.
#[derive(Clone, Debug)]
pub struct GuiState {
    pub active_tab: CartTab,

    /// Applied query (search only lands here on Enter).
    pub filters: FilterOptions,

    /// Search box contents while typing.
    pub search_text: String,

    pub show_filters: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            active_tab: CartTab::Cart,
            filters: FilterOptions::popup_default(),
            search_text: s!(),
            show_filters: false,
        }
    }
}

impl GuiState {
    pub fn from_options(options: &AppOptions) -> Self {
        let mut gui = Self { active_tab: options.view.default_tab, ..Self::default() };
        gui.filters.sort_by = Some(options.view.sort_by);
        gui.filters.sort_order = Some(options.view.sort_order);
        gui
    }

    /// The filter set for the current tab.
    pub fn query(&self) -> FilterOptions {
        FilterOptions {
            show_wishlist: Some(self.active_tab.shows_wishlist()),
            ..self.filters.clone()
        }
    }

    /// Enter in the search box.
    pub fn apply_search(&mut self) {
        let text = self.search_text.trim();
        self.filters.search_query = if text.is_empty() { None } else { Some(text.to_string()) };
    }

    /// "Clear all": drop category, source, price range and search; keep sort.
    pub fn clear_filters(&mut self) {
        self.filters.category = None;
        self.filters.source = None;
        self.filters.price_range = None;
        self.filters.search_query = None;
        self.search_text.clear();
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        let gui = GuiState::from_options(&options);
        Self { options, gui }
    }

    /// Copy the current tab and sort into `options.view`, so the next launch
    /// opens where this one left off. Returns true if anything changed.
    pub fn remember_view(&mut self) -> bool {
        let view = &mut self.options.view;
        let before = view.clone();
        view.default_tab = self.gui.active_tab;
        if let Some(by) = self.gui.filters.sort_by {
            view.sort_by = by;
        }
        if let Some(order) = self.gui.filters.sort_order {
            view.sort_order = order;
        }
        *view != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_follows_tab() {
        let mut gui = GuiState::default();
        assert_eq!(gui.query().show_wishlist, Some(false));
        gui.active_tab = CartTab::Wishlist;
        assert_eq!(gui.query().show_wishlist, Some(true));
    }

    #[test]
    fn search_only_lands_on_apply() {
        let mut gui = GuiState::default();
        gui.search_text = s!("  lamp ");
        assert!(gui.filters.search_query.is_none());
        gui.apply_search();
        assert_eq!(gui.filters.search_query.as_deref(), Some("lamp"));
        gui.clear_filters();
        assert!(!gui.filters.has_active_filters());
        assert!(gui.filters.sort_by.is_some());
    }
}
