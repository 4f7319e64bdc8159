// src/gui/components/product_card.rs
//
// One product as a fixed-height card: details on the left, controls on the
// right. The card never touches the store; it returns what was clicked and
// the list applies it once the frame's borrows are released.

use eframe::egui::{self, Align, Layout, RichText};
use egui_extras::{Size, StripBuilder};

use crate::cart::{added_label, line_total};
use crate::core::sanitize::{ellipsize, normalize_ws};
use crate::model::Product;

const CARD_H: f32 = 96.0;
const CONTROLS_W: f32 = 112.0;
const NAME_MAX: usize = 60;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardAction {
    Remove(String),
    ToWishlist(String),
    ToCart(String),
    Quantity(String, u32),
}

pub fn draw(ui: &mut egui::Ui, p: &Product) -> Option<CardAction> {
    let mut action = None;

    egui::Frame::group(ui.style()).show(ui, |ui| {
        let w = ui.available_width();
        ui.allocate_ui(egui::vec2(w, CARD_H), |ui| {
            StripBuilder::new(ui)
                .size(Size::remainder())
                .size(Size::exact(CONTROLS_W))
                .horizontal(|mut strip| {
                    strip.cell(|ui| details(ui, p));
                    strip.cell(|ui| action = controls(ui, p));
                });
        });
    });

    action
}

fn details(ui: &mut egui::Ui, p: &Product) {
    ui.vertical(|ui| {
        ui.small(p.source.as_str());
        ui.label(RichText::new(ellipsize(&normalize_ws(&p.name), NAME_MAX)).strong())
            .on_hover_text(p.name.as_str());
        ui.label(RichText::new(line_total(p)).size(15.0));

        let added = added_label(p);
        if !added.is_empty() {
            ui.small(join!("Added ", &added));
        }
        if ui.link("Visit Product").clicked() {
            logd!("UI: Open {}", p.url);
            ui.ctx().open_url(egui::OpenUrl::new_tab(&p.url));
        }
    });
}

fn controls(ui: &mut egui::Ui, p: &Product) -> Option<CardAction> {
    // Without an id there is nothing the store could act on.
    let id = p.id.as_deref()?;
    let mut action = None;

    ui.with_layout(Layout::top_down(Align::Max), |ui| {
        ui.horizontal(|ui| {
            if ui.small_button("🗑").on_hover_text("Remove product").clicked() {
                action = Some(CardAction::Remove(id.to_string()));
            }
            if p.in_wishlist() {
                if ui.small_button("🛒").on_hover_text("Move to cart").clicked() {
                    action = Some(CardAction::ToCart(id.to_string()));
                }
            } else if ui.small_button("♡").on_hover_text("Save for later").clicked() {
                action = Some(CardAction::ToWishlist(id.to_string()));
            }
        });

        if !p.in_wishlist() {
            let qty = p.quantity();
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.add_enabled(qty > 1, egui::Button::new("−")).clicked() {
                    action = Some(CardAction::Quantity(id.to_string(), qty - 1));
                }
                ui.label(qty.to_string());
                if ui.button("+").clicked() {
                    action = Some(CardAction::Quantity(id.to_string(), qty + 1));
                }
            });
        }
    });

    action
}
