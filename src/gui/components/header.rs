// src/gui/components/header.rs
//
// Title + cart total, search box, filter drawer and the Cart/Wishlist tabs.
// Writes straight into `app.state.gui`; the list below reads from it.

use eframe::egui::{self, Align, Layout, RichText};

use crate::config::consts::APP_TITLE;
use crate::config::state::GuiState;
use crate::gui::app::App;
use crate::model::{CartTab, SortBy, SortOrder};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let totals = app.cart.cart_totals();
    let categories = app.cart.categories();
    let sources = app.cart.sources();
    let gui = &mut app.state.gui;

    ui.horizontal(|ui| {
        ui.heading(APP_TITLE);
        if gui.active_tab == CartTab::Cart && totals.cart_count > 0 {
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(RichText::new(join!("$", &totals.total_price)).strong());
            });
        }
    });

    ui.horizontal(|ui| {
        let width = ui.available_width() - 36.0;
        let search = ui.add(
            egui::TextEdit::singleline(&mut gui.search_text)
                .hint_text("Search products...")
                .desired_width(width),
        );
        if search.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            gui.apply_search();
            logd!("UI: Search → {:?}", gui.filters.search_query);
        }
        if ui
            .selectable_label(gui.show_filters, "⛭")
            .on_hover_text("Show filters")
            .clicked()
        {
            gui.show_filters = !gui.show_filters;
        }
    });

    if gui.show_filters {
        ui.separator();
        filter_drawer(ui, gui, &categories, &sources);
    }

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        let tabs = [
            (CartTab::Cart, format!("Cart ({})", totals.cart_count)),
            (CartTab::Wishlist, format!("Wishlist ({})", totals.wishlist_count)),
        ];
        for (tab, label) in tabs {
            let selected = gui.active_tab == tab;
            if ui.selectable_label(selected, label).clicked() && !selected {
                logf!("UI: Tab switch {} → {}", gui.active_tab.as_str(), tab.as_str());
                gui.active_tab = tab;
            }
        }
    });
}

fn filter_drawer(ui: &mut egui::Ui, gui: &mut GuiState, categories: &[String], sources: &[String]) {
    ui.horizontal(|ui| {
        ui.strong("Filters");
        let active = gui.filters.has_active_filters() || !gui.search_text.is_empty();
        if active {
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.small_button("Clear all").clicked() {
                    gui.clear_filters();
                    logf!("UI: Filters cleared");
                }
            });
        }
    });

    ui.horizontal(|ui| {
        choice(ui, "filter_category", "All Categories", &mut gui.filters.category, categories);
        choice(ui, "filter_source", "All Websites", &mut gui.filters.source, sources);
    });

    ui.horizontal(|ui| {
        ui.label("Sort:");
        let key = gui.filters.sort_by.unwrap_or(SortBy::Date);
        egui::ComboBox::from_id_salt("sort_by")
            .selected_text(key.as_str())
            .show_ui(ui, |ui| {
                for k in SortBy::ALL {
                    ui.selectable_value(&mut gui.filters.sort_by, Some(k), k.as_str());
                }
            });

        let order = gui.filters.sort_order.unwrap_or(SortOrder::Desc);
        egui::ComboBox::from_id_salt("sort_order")
            .selected_text(order.as_str())
            .show_ui(ui, |ui| {
                for o in [SortOrder::Desc, SortOrder::Asc] {
                    ui.selectable_value(&mut gui.filters.sort_order, Some(o), o.as_str());
                }
            });
    });
}

/// "All …" plus one entry per value; picking "All …" clears the filter.
fn choice(ui: &mut egui::Ui, id: &str, all: &str, slot: &mut Option<String>, values: &[String]) {
    let shown = slot.clone().unwrap_or_else(|| s!(all));
    egui::ComboBox::from_id_salt(id)
        .selected_text(shown)
        .width(150.0)
        .show_ui(ui, |ui| {
            ui.selectable_value(slot, None, all);
            for v in values {
                ui.selectable_value(slot, Some(v.clone()), v.as_str());
            }
        });
}
