// src/gui/components/empty_state.rs

use eframe::egui::{self, RichText};

use crate::model::{CartTab, FilterOptions};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EmptyKind {
    Cart,
    Wishlist,
    Search(String),
}

impl EmptyKind {
    /// An applied search wins over the tab.
    pub fn for_view(query: &FilterOptions, tab: CartTab) -> Self {
        match query.search_query.as_deref().filter(|q| !q.is_empty()) {
            Some(q) => EmptyKind::Search(q.to_string()),
            None if tab.shows_wishlist() => EmptyKind::Wishlist,
            None => EmptyKind::Cart,
        }
    }

    pub fn title(&self) -> String {
        match self {
            EmptyKind::Cart => s!("Your cart is empty"),
            EmptyKind::Wishlist => s!("Your wishlist is empty"),
            EmptyKind::Search(q) => format!("No results found for \"{q}\""),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EmptyKind::Cart => {
                "Browse your favorite online stores and click 'Add to Universal Cart' to add items."
            }
            EmptyKind::Wishlist => "Save items for later by clicking the heart icon on any product.",
            EmptyKind::Search(_) => {
                "Try using different keywords or filters to find what you're looking for."
            }
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            EmptyKind::Cart => "🛒",
            EmptyKind::Wishlist => "♡",
            EmptyKind::Search(_) => "🔍",
        }
    }
}

pub fn draw(ui: &mut egui::Ui, kind: &EmptyKind) {
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.label(RichText::new(kind.icon()).size(32.0));
        ui.add_space(8.0);
        ui.label(RichText::new(kind.title()).strong().size(16.0));
        ui.add_space(4.0);
        ui.label(RichText::new(kind.description()).weak());
    });
}
