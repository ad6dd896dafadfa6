//! # Tip Presentation
//!
//! How a field tells the user that validation failed. Five modes,
//! selected at construction time and fixed afterwards. The strategy
//! talks to the host through [`TipSurface`], so the same logic drives
//! the egui widget and the recording mocks in tests.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default message shown when a required field is empty.
pub const DEFAULT_TIP_EMPTY: &str = "input must not be empty";

/// Default message for pattern mismatches. Accepted in configuration for
/// compatibility; pattern validation is not enforced.
pub const DEFAULT_TIP_PATTERN: &str = "input format is invalid";

/// Delay between dismissing an alert tip and refocusing the field.
pub const ALERT_REFOCUS_DELAY: Duration = Duration::from_millis(300);

/// Tip presentation mode for a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipMode {
    /// No visible side effect.
    #[default]
    Normal,
    /// Inline error annotation under the field.
    Error,
    /// Swap the placeholder text for the message, error-colored.
    Hint,
    /// Transient auto-dismissing notification.
    Toast,
    /// Modal dialog; refocuses the field after dismissal.
    Alert,
}

/// Host collaborator that a tip strategy renders through.
///
/// The egui widget implements this with retained per-frame state; tests
/// implement it with a recording mock. All methods complete synchronously
/// within the calling event.
pub trait TipSurface {
    /// Show (`Some`) or remove (`None`) the inline error annotation.
    fn set_inline_error(&mut self, message: Option<&str>);

    /// Swap (`Some`) or restore (`None`) the field's placeholder text.
    fn set_hint_override(&mut self, message: Option<&str>);

    /// Show a transient auto-dismissing notification.
    fn show_toast(&mut self, message: &str);

    /// Show a modal dialog with the message.
    fn show_modal(&mut self, message: &str);

    /// Move input focus to the field.
    fn request_focus(&mut self);

    /// Ask the platform to display its soft keyboard, where one exists.
    fn show_soft_keyboard(&mut self);

    /// Arm a one-shot timer on the owning event loop; the host calls
    /// [`crate::core::field::InputField::refocus`] when it fires.
    fn schedule_refocus(&mut self, delay: Duration);
}

/// Mode dispatch for showing and clearing tips.
///
/// Immutable after construction, mirroring the field configuration it is
/// built from.
#[derive(Debug, Clone, Copy)]
pub struct TipStrategy {
    mode: TipMode,
    show_soft_input_on_error: bool,
}

impl TipStrategy {
    pub fn new(mode: TipMode, show_soft_input_on_error: bool) -> Self {
        Self {
            mode,
            show_soft_input_on_error,
        }
    }

    pub fn mode(&self) -> TipMode {
        self.mode
    }

    /// Present `message` according to the configured mode.
    ///
    /// Alert defers focus handling to dismissal; every other visible mode
    /// requests focus immediately and conditionally shows the keyboard.
    pub fn show(&self, surface: &mut dyn TipSurface, message: &str) {
        match self.mode {
            TipMode::Normal => {}
            TipMode::Error => {
                surface.set_inline_error(Some(message));
                surface.request_focus();
                self.soft_input(surface);
            }
            TipMode::Hint => {
                surface.set_hint_override(Some(message));
                surface.request_focus();
                self.soft_input(surface);
            }
            TipMode::Toast => {
                surface.show_toast(message);
                surface.request_focus();
                self.soft_input(surface);
            }
            TipMode::Alert => {
                surface.show_modal(message);
            }
        }
    }

    /// Reverse the mode-specific visible effect and refocus the field.
    pub fn clear(&self, surface: &mut dyn TipSurface) {
        match self.mode {
            TipMode::Normal => {}
            TipMode::Error => {
                surface.set_inline_error(None);
                surface.request_focus();
            }
            TipMode::Hint => {
                surface.set_hint_override(None);
                surface.request_focus();
            }
            TipMode::Toast | TipMode::Alert => {
                surface.request_focus();
            }
        }
    }

    /// Alert dialog was dismissed: arm the delayed refocus.
    pub fn on_modal_dismissed(&self, surface: &mut dyn TipSurface) {
        surface.schedule_refocus(ALERT_REFOCUS_DELAY);
    }

    /// Delayed refocus fired: focus plus the conditional keyboard show.
    pub fn refocus(&self, surface: &mut dyn TipSurface) {
        surface.request_focus();
        self.soft_input(surface);
    }

    fn soft_input(&self, surface: &mut dyn TipSurface) {
        if self.show_soft_input_on_error {
            surface.show_soft_keyboard();
        }
    }
}
