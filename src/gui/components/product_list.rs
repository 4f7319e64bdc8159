// src/gui/components/product_list.rs
//
// Scrollable list of cards for the active tab, or the matching empty state.

use eframe::egui;

use super::empty_state::{self, EmptyKind};
use super::product_card::{self, CardAction};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let query = app.state.gui.query();
    let products = app.cart.filter_products(&query);

    if products.is_empty() {
        empty_state::draw(ui, &EmptyKind::for_view(&query, app.state.gui.active_tab));
        return;
    }

    // Keep the bar from floating over the cards.
    ui.style_mut().spacing.scroll.floating = false;

    let mut clicked: Option<CardAction> = None;
    egui::ScrollArea::vertical()
        .id_salt("product_list_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for p in &products {
                if let Some(a) = product_card::draw(ui, p) {
                    clicked = Some(a);
                }
                ui.add_space(6.0);
            }
        });

    if let Some(a) = clicked {
        app.apply(a);
    }
}
