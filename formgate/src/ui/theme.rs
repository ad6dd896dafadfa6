//! # Theme
//!
//! Color palette for input widgets. The hint-error color matches the
//! rose tone conventionally used for error placeholders; the dim color
//! is the usual placeholder gray.

use egui::Color32;

/// Colors used by the input widget.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Normal label text.
    pub normal: Color32,
    /// Placeholder and secondary text.
    pub dim: Color32,
    /// Inline error annotations.
    pub error: Color32,
    /// Placeholder text while a hint tip is active.
    pub hint_error: Color32,
    /// Widget borders.
    pub border: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            normal: Color32::from_rgb(255, 255, 255),
            dim: Color32::from_rgb(153, 153, 153),
            error: Color32::from_rgb(255, 0, 0),
            hint_error: Color32::from_rgb(255, 172, 172),
            border: Color32::from_rgb(51, 51, 51),
        }
    }
}
