// src/content/button.rs
//
// The injected "Add to Universal Cart" button.
//
// Its label and background colour are the only feedback the user gets:
//   Idle ──click──▶ Sending ──▶ Added | Failed | Error ──(2 s)──▶ Idle
// Hover swaps the background between base and hover colour and does not
// touch the label, so hovering a green "Added" button turns it blue.

use std::time::{Duration, Instant};

use crate::config::consts::{
    BUTTON_ID, BUTTON_LABEL, BUTTON_LABEL_ADDED, BUTTON_LABEL_ERROR, BUTTON_LABEL_FAILED,
    BUTTON_LABEL_SENDING, COLOR_BASE, COLOR_FAILURE, COLOR_HOVER, COLOR_SUCCESS, RESET_DELAY_MS,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonState {
    Idle,
    Sending,
    /// Store answered `success: true`.
    Added,
    /// Store answered, but not with success.
    Failed,
    /// No answer at all (port error).
    Error,
}

#[derive(Clone, Debug)]
pub struct CartButton {
    state: ButtonState,
    label: &'static str,
    background: &'static str,
    reset_at: Option<Instant>,
    reset_delay: Duration,
}

impl Default for CartButton {
    fn default() -> Self {
        Self::new(Duration::from_millis(RESET_DELAY_MS))
    }
}

impl CartButton {
    pub fn new(reset_delay: Duration) -> Self {
        Self {
            state: ButtonState::Idle,
            label: BUTTON_LABEL,
            background: COLOR_BASE,
            reset_at: None,
            reset_delay,
        }
    }

    pub fn id(&self) -> &'static str { BUTTON_ID }
    pub fn state(&self) -> ButtonState { self.state }
    pub fn label(&self) -> &'static str { self.label }
    pub fn background(&self) -> &'static str { self.background }
    pub fn reset_at(&self) -> Option<Instant> { self.reset_at }

    pub fn mouse_enter(&mut self) {
        self.background = COLOR_HOVER;
    }

    pub fn mouse_leave(&mut self) {
        self.background = COLOR_BASE;
    }

    /// Request is about to go out. Background is left alone.
    pub fn begin_send(&mut self) {
        self.state = ButtonState::Sending;
        self.label = BUTTON_LABEL_SENDING;
        self.reset_at = None;
    }

    /// Show the outcome and schedule the return to idle.
    pub fn settle(&mut self, outcome: ButtonState, now: Instant) {
        let (label, background) = match outcome {
            ButtonState::Added => (BUTTON_LABEL_ADDED, COLOR_SUCCESS),
            ButtonState::Failed => (BUTTON_LABEL_FAILED, COLOR_FAILURE),
            ButtonState::Error => (BUTTON_LABEL_ERROR, COLOR_FAILURE),
            ButtonState::Idle | ButtonState::Sending => {
                logd!("Content: settle({:?}) ignored", outcome);
                return;
            }
        };
        self.state = outcome;
        self.label = label;
        self.background = background;
        self.reset_at = Some(now + self.reset_delay);
    }

    /// Advance the reset timer. Returns true if the button just went back to idle.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.reset_at {
            Some(due) if now >= due => {
                self.state = ButtonState::Idle;
                self.label = BUTTON_LABEL;
                self.background = COLOR_BASE;
                self.reset_at = None;
                true
            }
            _ => false,
        }
    }

    /// Markup as it would sit at the end of `<body>`.
    pub fn to_html(&self) -> String {
        format!(
            concat!(
                r#"<button id="{id}" style="position: fixed; bottom: 20px; right: 20px; "#,
                r#"z-index: 9999; padding: 10px 16px; background-color: {bg}; color: white; "#,
                r#"border: none; border-radius: 8px; font-weight: bold; "#,
                r#"box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); cursor: pointer; "#,
                r#"transition: all 0.2s ease;">{label}</button>"#
            ),
            id = BUTTON_ID,
            bg = self.background,
            label = self.label,
        )
    }
}
