//! # Composite Input Widget
//!
//! Icon + label + single-line edit + clear button, rendered per-frame,
//! with an [`InputField`] underneath driving empty-state edges and tip
//! presentation. The widget's retained effect state ([`TipFx`]) is the
//! [`TipSurface`] the core strategy renders through.

use std::time::{Duration, Instant};

use egui::{Align2, RichText, TextEdit, Ui, Vec2};

use crate::core::field::InputField;
use crate::core::gate::GatedField;
use crate::core::tip::TipSurface;
use crate::core::InputConfig;
use crate::ui::theme::Theme;
use crate::ui::widgets::notifications::NotificationManager;

/// Retained tip effects, mutated by the core strategy and consumed while
/// rendering. One per widget.
#[derive(Default)]
struct TipFx {
    inline_error: Option<String>,
    hint_override: Option<String>,
    pending_toasts: Vec<String>,
    modal: Option<String>,
    wants_focus: bool,
    wants_soft_keyboard: bool,
    refocus_at: Option<Instant>,
}

impl TipSurface for TipFx {
    fn set_inline_error(&mut self, message: Option<&str>) {
        self.inline_error = message.map(str::to_owned);
    }

    fn set_hint_override(&mut self, message: Option<&str>) {
        self.hint_override = message.map(str::to_owned);
    }

    fn show_toast(&mut self, message: &str) {
        self.pending_toasts.push(message.to_owned());
    }

    fn show_modal(&mut self, message: &str) {
        self.modal = Some(message.to_owned());
    }

    fn request_focus(&mut self) {
        self.wants_focus = true;
    }

    fn show_soft_keyboard(&mut self) {
        // No soft keyboard on desktop; surface the request to the host
        tracing::debug!("soft keyboard show requested");
        self.wants_soft_keyboard = true;
    }

    fn schedule_refocus(&mut self, delay: Duration) {
        self.refocus_at = Some(Instant::now() + delay);
    }
}

/// The composite input widget. Owns its [`InputField`]; all text
/// mutation funnels through it so observers and tips stay consistent.
pub struct Input {
    field: InputField,
    fx: TipFx,
    enabled: bool,
    id: egui::Id,
}

impl Input {
    /// `id` must be unique among widgets in the same window; it anchors
    /// focus requests and the modal window across frames.
    pub fn new(id: impl std::hash::Hash, config: InputConfig) -> Self {
        Self {
            field: InputField::new(config),
            fx: TipFx::default(),
            enabled: true,
            id: egui::Id::new(id),
        }
    }

    pub fn field(&self) -> &InputField {
        &self.field
    }

    /// Mutable core access, e.g. for [`crate::core::gate::FormGate::register`].
    pub fn field_mut(&mut self) -> &mut InputField {
        &mut self.field
    }

    pub fn text(&self) -> &str {
        self.field.text()
    }

    pub fn set_text(&mut self, text: &str) {
        self.field.set_text(text, &mut self.fx);
    }

    /// Reset content and tip, refocus the edit.
    pub fn clear(&mut self) {
        self.field.clear(&mut self.fx);
    }

    /// Present a tip with an arbitrary message through the configured mode.
    pub fn tip(&mut self, message: &str) {
        self.field.tip(&mut self.fx, message);
    }

    pub fn clear_tip(&mut self) {
        self.field.clear_tip(&mut self.fx);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Disabled widgets hide the clear button and reject edits.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Currently shown inline error annotation, if any.
    pub fn inline_error(&self) -> Option<&str> {
        self.fx.inline_error.as_deref()
    }

    /// Take the pending soft-keyboard request, if the platform has one
    /// to show.
    pub fn take_soft_keyboard_request(&mut self) -> bool {
        std::mem::take(&mut self.fx.wants_soft_keyboard)
    }

    /// Render the widget. Toast-mode tips are drained into `notifier`.
    pub fn show(
        &mut self,
        ui: &mut Ui,
        theme: &Theme,
        notifier: &mut NotificationManager,
    ) -> egui::Response {
        self.poll_refocus(ui.ctx());

        let config = self.field.config().clone();
        let response = ui
            .horizontal(|ui| {
                if let Some(icon) = &config.icon {
                    ui.label(RichText::new(icon).color(theme.dim));
                }
                if let Some(label) = &config.label {
                    ui.label(RichText::new(label).color(theme.normal));
                }

                let hint = match &self.fx.hint_override {
                    Some(tip) => RichText::new(tip.as_str()).color(theme.hint_error),
                    None => RichText::new(config.hint.as_str()).color(theme.dim),
                };

                let mut buffer = self.field.text().to_owned();
                let mut edit = TextEdit::singleline(&mut buffer).id(self.id).hint_text(hint);
                if config.password {
                    edit = edit.password(true);
                }
                let response = ui
                    .add_enabled_ui(self.enabled, |ui| {
                        ui.add_sized(Vec2::from(config.size), edit)
                    })
                    .inner;

                if response.changed() {
                    self.field.set_text(&buffer, &mut self.fx);
                }
                if self.fx.wants_focus {
                    response.request_focus();
                    self.fx.wants_focus = false;
                }

                // Clear affordance tracks the raw (untrimmed) content
                if self.enabled && !self.field.text().is_empty() && ui.small_button("✕").clicked()
                {
                    self.field.clear(&mut self.fx);
                }

                response
            })
            .inner;

        if let Some(error) = &self.fx.inline_error {
            ui.label(RichText::new(error.as_str()).color(theme.error));
        }

        self.show_modal(ui, theme);

        for toast in self.fx.pending_toasts.drain(..) {
            notifier.error(toast);
        }

        response
    }

    /// Fire the one-shot post-alert refocus once its deadline passes.
    fn poll_refocus(&mut self, ctx: &egui::Context) {
        let Some(at) = self.fx.refocus_at else { return };
        let now = Instant::now();
        if now >= at {
            self.fx.refocus_at = None;
            self.field.refocus(&mut self.fx);
        } else {
            ctx.request_repaint_after(at - now);
        }
    }

    fn show_modal(&mut self, ui: &mut Ui, theme: &Theme) {
        let Some(message) = self.fx.modal.clone() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new("Error")
            .id(self.id.with("alert"))
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ui.ctx(), |ui| {
                ui.label(RichText::new(message.as_str()).color(theme.normal));
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });

        if dismissed {
            self.fx.modal = None;
            self.field.on_modal_dismissed(&mut self.fx);
        }
    }
}

impl GatedField for Input {
    fn is_input_error(&mut self) -> bool {
        self.field.is_input_error(&mut self.fx)
    }

    fn trimmed(&self) -> String {
        self.field.trimmed().to_owned()
    }
}
