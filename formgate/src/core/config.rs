//! # Widget Configuration
//!
//! Construction-time configuration for an input widget, loadable from a
//! JSON file. Unknown emptiness messages fall back to the defaults in
//! [`crate::core::tip`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::tip::{TipMode, DEFAULT_TIP_EMPTY, DEFAULT_TIP_PATTERN};

/// Configuration for one input widget. Immutable after the field is
/// constructed.
///
/// `pattern` and `tip_pattern` are accepted for compatibility with older
/// configuration files but are never enforced as active validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Label text rendered before the edit field.
    pub label: Option<String>,
    /// Icon glyph rendered before the label.
    pub icon: Option<String>,
    /// Placeholder text shown while the field is empty.
    pub hint: String,
    /// Mask the entered text.
    pub password: bool,
    /// Edit field size in points.
    pub size: [f32; 2],
    /// How validation tips are presented.
    pub tip_mode: TipMode,
    /// Message shown when the field is empty.
    pub tip_empty: String,
    /// Message for pattern mismatches. Accepted but unused.
    pub tip_pattern: String,
    /// Validation regex. Accepted but unused.
    pub pattern: Option<String>,
    /// Show the soft keyboard as a side effect of presenting a tip.
    pub show_soft_input_on_error: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            label: None,
            icon: None,
            hint: String::new(),
            password: false,
            size: [250.0, 30.0],
            tip_mode: TipMode::default(),
            tip_empty: DEFAULT_TIP_EMPTY.to_string(),
            tip_pattern: DEFAULT_TIP_PATTERN.to_string(),
            pattern: None,
            show_soft_input_on_error: false,
        }
    }
}

impl InputConfig {
    /// Load configuration from a JSON file, falling back to defaults when
    /// the file does not exist.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: InputConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    pub fn password(mut self, password: bool) -> Self {
        self.password = password;
        self
    }

    pub fn tip_mode(mut self, tip_mode: TipMode) -> Self {
        self.tip_mode = tip_mode;
        self
    }

    pub fn tip_empty(mut self, tip_empty: impl Into<String>) -> Self {
        self.tip_empty = tip_empty.into();
        self
    }

    pub fn show_soft_input_on_error(mut self, show: bool) -> Self {
        self.show_soft_input_on_error = show;
        self
    }

    pub fn size(mut self, size: [f32; 2]) -> Self {
        self.size = size;
        self
    }
}
