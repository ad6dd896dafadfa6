//! # UI Layer
//!
//! egui rendering for the core contract: the composite input widget,
//! toast notifications, and the color theme.

pub mod theme;
pub mod widgets;
