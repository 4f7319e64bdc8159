// src/content/session.rs
//
// One open shop page, as the content script sees it.
//
// Detection runs once on load and again on every mutation. A positive result
// makes sure the button exists (once). A page that later stops looking like a
// product page keeps its button.

use std::time::{Duration, Instant};

use url::Url;

use super::button::{ButtonState, CartButton};
use super::detect::Signals;
use super::extract::extract_product;
use crate::config::consts::{BUTTON_ID, RESET_DELAY_MS};
use crate::config::options::ButtonOptions;
use crate::core::Document;
use crate::model::Product;
use crate::port::CartPort;
use crate::storage::Request;

pub struct PageSession {
    location: Url,
    doc: Document,
    signals: Signals,
    button: Option<CartButton>,
    reset_delay: Duration,
}

impl PageSession {
    pub fn load(url: &str, html: &str) -> Result<Self, url::ParseError> {
        Self::load_with_delay(url, html, Duration::from_millis(RESET_DELAY_MS))
    }

    /// Button timing from the user's config.
    pub fn load_with_options(
        url: &str,
        html: &str,
        options: &ButtonOptions,
    ) -> Result<Self, url::ParseError> {
        Self::load_with_delay(url, html, options.reset_delay())
    }

    pub fn load_with_delay(
        url: &str,
        html: &str,
        reset_delay: Duration,
    ) -> Result<Self, url::ParseError> {
        let location = Url::parse(url)?;
        let mut session = Self {
            location,
            doc: Document::parse(html),
            signals: Signals::default(),
            button: None,
            reset_delay,
        };
        session.detect();
        Ok(session)
    }

    /// The page changed; swap in the new snapshot and detect again.
    pub fn on_mutation(&mut self, html: &str) {
        self.doc = Document::parse(html);
        self.detect();
    }

    fn detect(&mut self) {
        self.signals = Signals::probe(&self.doc);
        if self.signals.is_product_page() {
            self.ensure_button();
        }
    }

    fn ensure_button(&mut self) {
        if self.button.is_some() {
            return;
        }
        if self.doc.has_id(BUTTON_ID) {
            logd!("Content: #{} already in page, not injecting", BUTTON_ID);
            return;
        }
        logf!("Content: Product page detected at {}", self.location);
        self.button = Some(CartButton::new(self.reset_delay));
    }

    pub fn location(&self) -> &Url { &self.location }
    pub fn document(&self) -> &Document { &self.doc }
    pub fn signals(&self) -> Signals { self.signals }
    pub fn is_product_page(&self) -> bool { self.signals.is_product_page() }
    pub fn button(&self) -> Option<&CartButton> { self.button.as_ref() }
    pub fn button_mut(&mut self) -> Option<&mut CartButton> { self.button.as_mut() }

    /// What a click would send right now.
    pub fn extract(&self) -> Option<Product> {
        extract_product(&self.doc, &self.location)
    }

    /// Button click: extract, send ADD_PRODUCT, show the outcome.
    /// Returns None when there is no button or nothing could be extracted;
    /// the button is left untouched in that case.
    pub fn click(&mut self, port: &dyn CartPort, now: Instant) -> Option<ButtonState> {
        self.button.as_ref()?;
        let product = self.extract()?;
        let button = self.button.as_mut()?;

        button.begin_send();
        let outcome = match port.send(Request::AddProduct { product }) {
            Ok(resp) if resp.is_success() => ButtonState::Added,
            Ok(resp) => {
                logd!("Content: Add refused ({:?})", resp.error());
                ButtonState::Failed
            }
            Err(e) => {
                loge!("Content: Failed to add product to Universal Cart: {}", e);
                ButtonState::Error
            }
        };
        button.settle(outcome, now);
        Some(outcome)
    }

    /// Drive the button's reset timer.
    pub fn tick(&mut self, now: Instant) {
        if let Some(b) = self.button.as_mut() {
            b.tick(now);
        }
    }
}
