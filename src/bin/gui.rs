// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use universal_cart::config::consts::{APP_TITLE, POPUP_H, POPUP_W};
use universal_cart::gui;

fn main() {
    let options = eframe::NativeOptions {
        // Fixed popup size
        viewport: ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([POPUP_W, POPUP_H])
            .with_resizable(false),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
