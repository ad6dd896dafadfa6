//! # Notifications Widget
//!
//! Toast notification system using egui-notify. Toast-mode validation
//! tips and host status messages both land here.

use egui_notify::Toasts;

/// Notification manager for the application.
pub struct NotificationManager {
    /// Toast notification system
    pub toasts: Toasts,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self {
            toasts: Toasts::default(),
        }
    }
}

impl NotificationManager {
    /// Create a new notification manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a success notification.
    pub fn success(&mut self, message: String) {
        self.toasts.success(message);
    }

    /// Show an error notification (validation tips use this).
    pub fn error(&mut self, message: String) {
        self.toasts.error(message);
    }

    /// Show an informational notification.
    pub fn info(&mut self, message: String) {
        self.toasts.info(message);
    }

    /// Render pending notifications into the UI context.
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}
