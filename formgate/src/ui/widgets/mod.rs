//! # Widgets
//!
//! Reusable UI components.

pub mod input;
pub mod notifications;
