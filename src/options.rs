//! Style options describing a template generation request

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Scheme;
use crate::layout;
use crate::rng::SeededRng;
use crate::typography::FONT_PAIRINGS;

/// Errors that can occur when loading options from a file
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("failed to read options file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse options TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// The overall visual register of a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStyle {
    Corporate,
    Creative,
    Minimal,
    Abstract,
}

impl DocumentStyle {
    pub const ALL: [DocumentStyle; 4] = [
        DocumentStyle::Corporate,
        DocumentStyle::Creative,
        DocumentStyle::Minimal,
        DocumentStyle::Abstract,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DocumentStyle::Corporate => "corporate",
            DocumentStyle::Creative => "creative",
            DocumentStyle::Minimal => "minimal",
            DocumentStyle::Abstract => "abstract",
        }
    }

    pub fn from_name(name: &str) -> Option<DocumentStyle> {
        match name {
            "corporate" => Some(DocumentStyle::Corporate),
            "creative" => Some(DocumentStyle::Creative),
            "minimal" => Some(DocumentStyle::Minimal),
            "abstract" => Some(DocumentStyle::Abstract),
            _ => None,
        }
    }
}

impl std::fmt::Display for DocumentStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The immutable parameter set one template is generated from.
///
/// Missing fields in an options file take the defaults, so a file may name
/// only the parameters it cares about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleOptions {
    pub style: DocumentStyle,
    pub base_hue: i32,
    pub color_scheme: Scheme,
    pub typography: String,
    pub layout: String,
    pub seed: f64,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            style: DocumentStyle::Minimal,
            base_hue: 210,
            color_scheme: Scheme::Monochromatic,
            typography: "Modern Sans".to_string(),
            layout: "classic-document".to_string(),
            seed: 0.5,
        }
    }
}

impl StyleOptions {
    /// Load options from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, OptionsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load options from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, OptionsError> {
        Ok(toml::from_str(content)?)
    }

    /// Derive a full option set from a seed alone.
    ///
    /// Every field comes from the seeded generator, so the same seed names
    /// the same style, hue, scheme and presets.
    pub fn randomized(seed: f64) -> Self {
        let mut rng = SeededRng::new(seed);
        let style = *rng.pick(&DocumentStyle::ALL);
        let base_hue = (rng.next() * 360.0) as i32;
        let color_scheme = *rng.pick(&Scheme::ALL);
        let typography = rng.pick(FONT_PAIRINGS).name.to_string();
        let layout = rng.pick(&layout::preset_names()).clone();
        Self {
            style,
            base_hue,
            color_scheme,
            typography,
            layout,
            seed: rng.next(),
        }
    }
}
