//! # Input Field
//!
//! The validated text value behind a widget: current content, derived
//! empty state, the single empty-changed observer slot, and the tip
//! state machine.
//!
//! Per-field states are `{Empty, NonEmpty} x {TipInactive, TipActive}`.
//! A keystroke that crosses the empty/non-empty edge fires the observer;
//! [`InputField::is_input_error`] on an empty field activates the tip;
//! the edge back to non-empty clears it. Initial state: empty, no tip.

use crate::core::config::InputConfig;
use crate::core::tip::{TipMode, TipStrategy, TipSurface};

type EmptyChangedFn = Box<dyn FnMut(bool) + Send>;

/// One validated text field.
///
/// Created at form-construction time and owned by the widget (or, in
/// tests, directly by the harness) for the lifetime of the form. All
/// mutation goes through a [`TipSurface`] so presentation side effects
/// stay observable.
pub struct InputField {
    text: String,
    is_empty: bool,
    tip_active: bool,
    config: InputConfig,
    strategy: TipStrategy,
    on_empty_changed: Option<EmptyChangedFn>,
}

impl InputField {
    pub fn new(config: InputConfig) -> Self {
        let strategy = TipStrategy::new(config.tip_mode, config.show_soft_input_on_error);
        Self {
            text: String::new(),
            is_empty: true,
            tip_active: false,
            config,
            strategy,
            on_empty_changed: None,
        }
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Current content, exactly as typed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Content with surrounding whitespace removed; what `submit` hands on.
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    /// Whether the trimmed content is empty. Consistent with [`Self::text`]
    /// immediately after any mutation.
    pub fn is_empty(&self) -> bool {
        self.is_empty
    }

    pub fn tip_active(&self) -> bool {
        self.tip_active
    }

    /// Install the empty-changed observer. At most one; the last
    /// registration wins. The callback receives the new *non-empty*
    /// boolean and fires only on edges.
    pub fn set_on_empty_changed(&mut self, callback: impl FnMut(bool) + Send + 'static) {
        self.on_empty_changed = Some(Box::new(callback));
    }

    /// Replace the content and recompute the empty state.
    ///
    /// Fires the observer exactly once if the empty/non-empty state
    /// changed. Repopulating a field with an active tip clears the tip;
    /// emptying a field never shows one by itself.
    pub fn set_text(&mut self, text: &str, surface: &mut dyn TipSurface) {
        let was_empty = self.is_empty;
        self.text.clear();
        self.text.push_str(text);
        self.is_empty = self.text.trim().is_empty();

        if self.is_empty == was_empty {
            return;
        }

        if !self.is_empty && self.tip_active {
            self.clear_tip(surface);
        }

        tracing::trace!(not_empty = !self.is_empty, "empty state edge");
        if let Some(callback) = self.on_empty_changed.as_mut() {
            callback(!self.is_empty);
        }
    }

    /// Validate the field: `true` means the input is in error (empty).
    ///
    /// The polarity follows the widget this replaces; do not invert it.
    /// An empty field presents `tip_empty` through the strategy as a side
    /// effect. A non-empty field has no presentation side effect.
    pub fn is_input_error(&mut self, surface: &mut dyn TipSurface) -> bool {
        if self.trimmed().is_empty() {
            tracing::debug!(mode = ?self.strategy.mode(), "empty input, presenting tip");
            let message = self.config.tip_empty.clone();
            self.tip(surface, &message);
            return true;
        }

        false
    }

    /// Present `message` through the configured tip mode.
    ///
    /// Hint mode replaces the placeholder, so any actual content (for
    /// example whitespace) is dropped first; that pass through
    /// [`Self::set_text`] fires the observer if it crosses an edge.
    pub fn tip(&mut self, surface: &mut dyn TipSurface, message: &str) {
        if message.is_empty() {
            return;
        }

        if self.strategy.mode() == TipMode::Hint {
            self.set_text("", surface);
        }

        self.strategy.show(surface, message);
        self.tip_active = true;
    }

    /// Reverse the visible tip effect and deactivate the tip.
    pub fn clear_tip(&mut self, surface: &mut dyn TipSurface) {
        self.strategy.clear(surface);
        self.tip_active = false;
    }

    /// Reset the field: empty content, no tip, focus back on the edit.
    ///
    /// Observer notification follows the normal [`Self::set_text`] edge
    /// contract; nothing is suppressed.
    pub fn clear(&mut self, surface: &mut dyn TipSurface) {
        self.set_text("", surface);
        if self.tip_active {
            self.clear_tip(surface);
        }
        // The clear affordance always drops a stale inline annotation,
        // even when no tip is tracked as active.
        surface.set_inline_error(None);
        surface.request_focus();
    }

    /// The alert tip's dialog was dismissed; arm the delayed refocus.
    pub fn on_modal_dismissed(&self, surface: &mut dyn TipSurface) {
        self.strategy.on_modal_dismissed(surface);
    }

    /// The delayed refocus fired; focus the field and reapply the
    /// conditional soft-keyboard show.
    pub fn refocus(&self, surface: &mut dyn TipSurface) {
        self.strategy.refocus(surface);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use parking_lot::Mutex;

    use super::*;
    use crate::core::tip::{TipMode, ALERT_REFOCUS_DELAY};

    /// Records every tip side effect for assertions.
    #[derive(Default)]
    struct MockSurface {
        inline_error: Option<String>,
        hint_override: Option<String>,
        toasts: Vec<String>,
        modal: Option<String>,
        focus_requests: usize,
        keyboard_requests: usize,
        scheduled_refocus: Option<Duration>,
    }

    impl TipSurface for MockSurface {
        fn set_inline_error(&mut self, message: Option<&str>) {
            self.inline_error = message.map(str::to_owned);
        }

        fn set_hint_override(&mut self, message: Option<&str>) {
            self.hint_override = message.map(str::to_owned);
        }

        fn show_toast(&mut self, message: &str) {
            self.toasts.push(message.to_owned());
        }

        fn show_modal(&mut self, message: &str) {
            self.modal = Some(message.to_owned());
        }

        fn request_focus(&mut self) {
            self.focus_requests += 1;
        }

        fn show_soft_keyboard(&mut self) {
            self.keyboard_requests += 1;
        }

        fn schedule_refocus(&mut self, delay: Duration) {
            self.scheduled_refocus = Some(delay);
        }
    }

    fn field_with_mode(mode: TipMode) -> InputField {
        InputField::new(InputConfig::default().tip_mode(mode))
    }

    fn observed(field: &mut InputField) -> Arc<Mutex<Vec<bool>>> {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        field.set_on_empty_changed(move |not_empty| sink.lock().push(not_empty));
        events
    }

    #[test]
    fn test_empty_state_tracks_trimmed_text() {
        let mut surface = MockSurface::default();
        let mut field = field_with_mode(TipMode::Normal);
        assert!(field.is_empty());

        field.set_text("   ", &mut surface);
        assert!(field.is_empty());

        field.set_text(" a ", &mut surface);
        assert!(!field.is_empty());
        assert_eq!(field.trimmed(), "a");
    }

    #[test]
    fn test_observer_fires_on_edges_only() {
        let mut surface = MockSurface::default();
        let mut field = field_with_mode(TipMode::Normal);
        let events = observed(&mut field);

        field.set_text("a", &mut surface);
        field.set_text("ab", &mut surface); // still non-empty, no edge
        field.set_text("", &mut surface);
        field.set_text("", &mut surface); // still empty, no edge
        field.set_text("  ", &mut surface); // trim-empty, no edge

        assert_eq!(*events.lock(), vec![true, false]);
    }

    #[test]
    fn test_validate_empty_shows_inline_error() {
        let mut surface = MockSurface::default();
        let mut field = field_with_mode(TipMode::Error);

        assert!(field.is_input_error(&mut surface));
        assert!(field.tip_active());
        assert_eq!(surface.inline_error.as_deref(), Some("input must not be empty"));
        assert_eq!(surface.focus_requests, 1);
        // show_soft_input_on_error defaults to false
        assert_eq!(surface.keyboard_requests, 0);
    }

    #[test]
    fn test_validate_non_empty_has_no_side_effect() {
        let mut surface = MockSurface::default();
        let mut field = field_with_mode(TipMode::Error);
        field.set_text("hello", &mut surface);

        assert!(!field.is_input_error(&mut surface));
        assert!(!field.tip_active());
        assert!(surface.inline_error.is_none());
        assert_eq!(surface.focus_requests, 0);
    }

    #[test]
    fn test_repopulating_clears_active_tip() {
        let mut surface = MockSurface::default();
        let mut field = field_with_mode(TipMode::Error);

        assert!(field.is_input_error(&mut surface));
        field.set_text("x", &mut surface);
        assert!(!field.tip_active());
        assert!(surface.inline_error.is_none());

        // Going back to empty does not re-show the tip by itself
        field.set_text("", &mut surface);
        assert!(!field.tip_active());
        assert!(surface.inline_error.is_none());
    }

    #[test]
    fn test_hint_mode_swaps_and_restores_placeholder() {
        let mut surface = MockSurface::default();
        let mut field = field_with_mode(TipMode::Hint);

        assert!(field.is_input_error(&mut surface));
        assert_eq!(surface.hint_override.as_deref(), Some("input must not be empty"));

        field.set_text("x", &mut surface);
        assert!(surface.hint_override.is_none());
        assert!(!field.tip_active());
    }

    #[test]
    fn test_hint_mode_drops_whitespace_content() {
        let mut surface = MockSurface::default();
        let mut field = field_with_mode(TipMode::Hint);

        field.set_text("   ", &mut surface);
        assert!(field.is_input_error(&mut surface));
        assert_eq!(field.text(), "");
    }

    #[test]
    fn test_toast_mode() {
        let mut surface = MockSurface::default();
        let mut field = field_with_mode(TipMode::Toast);

        assert!(field.is_input_error(&mut surface));
        assert_eq!(surface.toasts, vec!["input must not be empty"]);
        assert_eq!(surface.focus_requests, 1);
    }

    #[test]
    fn test_alert_mode_defers_focus_to_dismissal() {
        let mut surface = MockSurface::default();
        let mut field = field_with_mode(TipMode::Alert);

        assert!(field.is_input_error(&mut surface));
        assert_eq!(surface.modal.as_deref(), Some("input must not be empty"));
        assert_eq!(surface.focus_requests, 0);

        field.on_modal_dismissed(&mut surface);
        assert_eq!(surface.scheduled_refocus, Some(ALERT_REFOCUS_DELAY));

        field.refocus(&mut surface);
        assert_eq!(surface.focus_requests, 1);
    }

    #[test]
    fn test_soft_keyboard_gated_by_config() {
        let mut surface = MockSurface::default();
        let mut field = InputField::new(
            InputConfig::default()
                .tip_mode(TipMode::Error)
                .show_soft_input_on_error(true),
        );

        assert!(field.is_input_error(&mut surface));
        assert_eq!(surface.keyboard_requests, 1);

        field.refocus(&mut surface);
        assert_eq!(surface.keyboard_requests, 2);
    }

    #[test]
    fn test_custom_empty_message() {
        let mut surface = MockSurface::default();
        let mut field = InputField::new(
            InputConfig::default()
                .tip_mode(TipMode::Toast)
                .tip_empty("user name is required"),
        );

        assert!(field.is_input_error(&mut surface));
        assert_eq!(surface.toasts, vec!["user name is required"]);
    }

    #[test]
    fn test_clear_resets_field_and_notifies() {
        let mut surface = MockSurface::default();
        let mut field = field_with_mode(TipMode::Error);
        let events = observed(&mut field);

        field.set_text("abc", &mut surface);
        field.clear(&mut surface);

        assert_eq!(field.text(), "");
        assert!(field.is_empty());
        assert!(surface.inline_error.is_none());
        assert!(surface.focus_requests >= 1);
        assert_eq!(*events.lock(), vec![true, false]);
    }

    #[test]
    fn test_empty_tip_message_is_ignored() {
        let mut surface = MockSurface::default();
        let mut field = field_with_mode(TipMode::Error);

        field.tip(&mut surface, "");
        assert!(!field.tip_active());
        assert!(surface.inline_error.is_none());
    }
}
