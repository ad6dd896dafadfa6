//! # Demo Application
//!
//! Wires two inputs (user name + password) into a [`FormGate`]. The
//! verify button enables once both fields are non-empty and submits the
//! trimmed credentials. The user field presents tips inline, the
//! password field as toasts, so both presentation paths are visible.

use std::sync::Arc;

use egui_material_icons::icons::{ICON_LOCK, ICON_PERSON};
use parking_lot::RwLock;

use formgate::{FormGate, Input, InputConfig, NotificationManager, Theme, TipMode};

pub struct DemoApp {
    user: Input,
    password: Input,
    gate: FormGate,
    verify_enabled: Arc<RwLock<bool>>,
    notifications: NotificationManager,
    theme: Theme,
}

impl DemoApp {
    pub fn new() -> Self {
        let mut user = Input::new(
            "in_user",
            InputConfig::default()
                .icon(ICON_PERSON)
                .label("User")
                .hint("user name")
                .tip_mode(TipMode::Error),
        );
        let mut password = Input::new(
            "in_pwd",
            InputConfig::default()
                .icon(ICON_LOCK)
                .label("Password")
                .hint("password")
                .password(true)
                .tip_mode(TipMode::Toast),
        );

        let gate = FormGate::new();
        gate.register(user.field_mut());
        gate.register(password.field_mut());

        let verify_enabled = Arc::new(RwLock::new(gate.is_open()));
        let flag = Arc::clone(&verify_enabled);
        gate.set_on_gate_changed(move |open| {
            tracing::info!(open, "verify gate changed");
            *flag.write() = open;
        });

        Self {
            user,
            password,
            gate,
            verify_enabled,
            notifications: NotificationManager::new(),
            theme: Theme::default(),
        }
    }

    fn verify(&mut self) {
        let Some(values) = self
            .gate
            .submit(&mut [&mut self.user, &mut self.password])
        else {
            return;
        };

        if let [user, _password] = values.as_slice() {
            tracing::info!(user = %user, "credentials verified");
            self.notifications.success(format!("Welcome, {user}"));
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.heading("Sign In");
                ui.add_space(16.0);

                self.user.show(ui, &self.theme, &mut self.notifications);
                ui.add_space(8.0);
                self.password.show(ui, &self.theme, &mut self.notifications);
                ui.add_space(16.0);

                let enabled = *self.verify_enabled.read();
                let button = egui::Button::new("Verify").min_size(egui::vec2(100.0, 32.0));
                if ui.add_enabled(enabled, button).clicked() {
                    self.verify();
                }
            });
        });

        self.notifications.show(ctx);
    }
}
