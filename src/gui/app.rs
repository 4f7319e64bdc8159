// src/gui/app.rs
use std::{error::Error, sync::Arc, time::Duration};

use eframe::egui;

use crate::{
    background::{self, BackgroundPort},
    badge::{Badge, BadgeWatch},
    cart::Cart,
    config::{
        consts::{APP_TITLE, STORE_POLL_MS},
        file,
        options::StoreOptions,
        state::AppState,
    },
    storage::{FileStore, StorageService},
};

use super::components::{self, product_card::CardAction};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let opts = file::load(&StoreOptions::default().config_path());
    crate::log::set_log_path(opts.store.log_path());

    let store = Arc::new(FileStore::open(opts.store.store_path())?);
    let (port, _worker) = background::spawn(StorageService::new(store.clone()))?;
    logf!("Init: store={}", store.path().display());

    let state = AppState::new(opts);
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(state, store, port)))),
    )?;
    Ok(())
}

pub struct App {
    // UI thread only
    pub state: AppState,
    pub cart: Cart<BackgroundPort>,

    // watched for outside writes (CLI, another window)
    store: Arc<FileStore>,
    watch: BadgeWatch,
    pub badge: Option<Badge>,

    pub status: String,
}

impl App {
    pub fn new(state: AppState, store: Arc<FileStore>, port: BackgroundPort) -> Self {
        let mut cart = Cart::new(port);
        cart.fetch_products();
        logf!(
            "Init: {} product(s), tab={}",
            cart.products().len(),
            state.gui.active_tab.as_str()
        );

        Self {
            state,
            cart,
            store,
            watch: BadgeWatch::new(),
            badge: None,
            status: s!("Ready"),
        }
    }

    /// Storage-change hook: refetch the cart and repaint the badge.
    fn sync_with_store(&mut self, ctx: &egui::Context) {
        let Some(badge) = self.watch.poll(self.store.as_ref(), self.cart.port()) else {
            return;
        };
        self.cart.fetch_products();
        if self.cart.state().error.is_some() {
            self.status = s!("Failed to fetch products");
        }

        if self.badge.as_ref() != Some(&badge) {
            logd!("UI: Badge → {:?}", badge.text);
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(window_title(&badge)));
            self.badge = Some(badge);
        }
    }

    /// Write tab and sort back to the config file when they change.
    fn save_view(&mut self) {
        if !self.state.remember_view() {
            return;
        }
        let path = StoreOptions::default().config_path();
        match file::save(&path, &self.state.options) {
            Ok(()) => logd!("UI: View saved to {}", path.display()),
            Err(e) => loge!("UI: Failed to save {}: {}", path.display(), e),
        }
    }

    /// Run a card button against the store and report the outcome.
    pub fn apply(&mut self, action: CardAction) {
        let (ok, done) = match &action {
            CardAction::Remove(id) => (self.cart.remove_product(id), "Removed"),
            CardAction::ToWishlist(id) => (self.cart.move_to_wishlist(id), "Saved for later"),
            CardAction::ToCart(id) => (self.cart.move_to_cart(id), "Moved to cart"),
            CardAction::Quantity(id, n) => (self.cart.update_quantity(id, *n), "Quantity updated"),
        };
        logf!("UI: {:?} ok={}", action, ok);
        self.status = if ok { s!(done) } else { s!("Couldn't update the cart") };
    }
}

/// "UniCart (3)", or just "UniCart" while the badge is blank.
pub fn window_title(badge: &Badge) -> String {
    if badge.is_blank() {
        s!(APP_TITLE)
    } else {
        format!("{} ({})", APP_TITLE, badge.text)
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_with_store(ctx);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            components::header::draw(ui, self);
        });
        self.save_view();

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.small(self.status.as_str());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::product_list::draw(ui, self);
        });

        ctx.request_repaint_after(Duration::from_millis(STORE_POLL_MS));
    }
}
