//! # Formgate - Validated Input Widgets
//!
//! A small component library for egui: a composite text-input widget
//! (icon + label + edit field + clear button) with configurable
//! validation-tip presentation, and a form gate that enables a submit
//! action once every registered field is non-empty.
//!
//! ## Module Structure
//!
//! - **core**: Presentation-independent contract
//!   - `field`: [`InputField`] - text value, empty-state edges, observer
//!   - `gate`: [`FormGate`] - aggregate "all fields non-empty" boolean
//!   - `tip`: [`TipMode`], [`TipStrategy`], [`TipSurface`] - tip presentation
//!   - `config`: [`InputConfig`] - widget configuration (serde)
//!   - `error`: [`InputError`] - library error type
//!
//! - **ui**: egui glue
//!   - `widgets::input`: the composite [`Input`] widget
//!   - `widgets::notifications`: toast manager over egui-notify
//!   - `theme`: color palette for error and hint presentation
//!
//! ## Data Flow
//!
//! ```text
//! keystroke -> InputField::set_text -> empty/non-empty edge
//!           -> observer callback    -> FormGate flag update
//!           -> all-non-empty recompute -> on_gate_changed (edge-triggered)
//! ```
//!
//! The core contract is fully testable without a GUI: tip presentation
//! goes through the [`TipSurface`] trait, implemented by the egui widget
//! and by recording mocks in tests.

pub mod core;
pub mod ui;

// Re-export the types most consumers need
pub use crate::core::config::InputConfig;
pub use crate::core::error::{InputError, Result};
pub use crate::core::field::InputField;
pub use crate::core::gate::{FormGate, GatedField};
pub use crate::core::tip::{TipMode, TipStrategy, TipSurface};
pub use crate::ui::theme::Theme;
pub use crate::ui::widgets::input::Input;
pub use crate::ui::widgets::notifications::NotificationManager;
