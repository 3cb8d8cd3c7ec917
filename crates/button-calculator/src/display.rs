//! Display sink seam
//!
//! The engine hands its entry string to a [`DisplaySink`] after every event.
//! Sinks own presentation: the only rule the calculator cares about is that
//! long entries switch to a compact font.

use serde::{Deserialize, Serialize};

use crate::config::DisplayConfig;

/// A text surface the calculator renders to
pub trait DisplaySink {
    /// Shows the given entry text
    fn render(&mut self, text: &str);
}

/// Font size selected for an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontSize {
    /// Regular size for short entries
    #[default]
    Normal,
    /// Reduced size so long entries stay visible
    Compact,
}

impl DisplayConfig {
    /// Chooses the font size for an entry
    #[must_use]
    pub fn font_size_for(&self, text: &str) -> FontSize {
        if text.chars().count() > self.compact_threshold {
            FontSize::Compact
        } else {
            FontSize::Normal
        }
    }

    /// Returns the CSS font-size value for a font size
    #[must_use]
    pub fn css_font_size(&self, size: FontSize) -> &str {
        match size {
            FontSize::Normal => &self.normal_font_size,
            FontSize::Compact => &self.compact_font_size,
        }
    }
}

/// Display sink that keeps every rendered frame
#[derive(Debug, Clone, Default)]
pub struct RecordingDisplay {
    config: DisplayConfig,
    frames: Vec<String>,
    font_size: FontSize,
}

impl RecordingDisplay {
    /// Creates an empty recording display with default config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty recording display with the given config
    #[must_use]
    pub fn with_config(config: DisplayConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// All frames rendered so far, oldest first
    #[must_use]
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// The most recent frame
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }

    /// Font size chosen for the most recent frame
    #[must_use]
    pub fn font_size(&self) -> FontSize {
        self.font_size
    }

    /// Drops all recorded frames
    pub fn clear(&mut self) {
        self.frames.clear();
        self.font_size = FontSize::Normal;
    }
}

impl DisplaySink for RecordingDisplay {
    fn render(&mut self, text: &str) {
        self.font_size = self.config.font_size_for(text);
        self.frames.push(text.to_string());
    }
}
