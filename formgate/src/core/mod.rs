//! # Core Contract
//!
//! Presentation-independent input validation: field state, tip strategy,
//! and the form gate. Nothing in this module depends on egui.

pub mod config;
pub mod error;
pub mod field;
pub mod gate;
pub mod tip;

pub use config::InputConfig;
pub use error::{InputError, Result};
pub use field::InputField;
pub use gate::{FormGate, GatedField};
pub use tip::{TipMode, TipStrategy, TipSurface};
