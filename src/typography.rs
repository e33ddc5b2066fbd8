//! Typography system generation from named font pairings
//!
//! A pairing supplies the heading/body font stacks; the sizes come from a
//! modular scale selected by the pairing's character (compact pairings get a
//! minor-third ratio, dramatic ones a perfect fifth).

use serde::{Deserialize, Serialize};

/// A named heading/body font pairing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontPairing {
    pub name: &'static str,
    pub heading: &'static str,
    pub body: &'static str,
    pub characterization: &'static str,
}

/// The fixed pairing table. The first entry is the fallback for unknown names.
pub const FONT_PAIRINGS: &[FontPairing] = &[
    FontPairing {
        name: "Classic Serif/Sans",
        heading: "'Georgia', serif",
        body: "'Arial', sans-serif",
        characterization: "Traditional, balanced contrast",
    },
    FontPairing {
        name: "Modern Sans",
        heading: "'Montserrat', sans-serif",
        body: "'Open Sans', sans-serif",
        characterization: "Clean, contemporary",
    },
    FontPairing {
        name: "Corporate Professional",
        heading: "'Helvetica Neue', sans-serif",
        body: "'Roboto', sans-serif",
        characterization: "Sleek, professional, reliable",
    },
    FontPairing {
        name: "Elegant Contrast",
        heading: "'Playfair Display', serif",
        body: "'Source Sans Pro', sans-serif",
        characterization: "Sophisticated, dramatic contrast",
    },
    FontPairing {
        name: "Creative Modern",
        heading: "'Poppins', sans-serif",
        body: "'Work Sans', sans-serif",
        characterization: "Fresh, contemporary, innovative",
    },
    FontPairing {
        name: "Technical Clarity",
        heading: "'IBM Plex Sans', sans-serif",
        body: "'IBM Plex Serif', serif",
        characterization: "Precise, logical, technical",
    },
    FontPairing {
        name: "Friendly Professional",
        heading: "'Nunito', sans-serif",
        body: "'Lato', sans-serif",
        characterization: "Approachable, warm, trustworthy",
    },
];

/// A modular scale: base size in pixels and the step ratio
#[derive(Debug, Clone, Copy, PartialEq)]
struct ScalePreset {
    base: f64,
    ratio: f64,
}

const SCALE_DEFAULT: ScalePreset = ScalePreset { base: 16.0, ratio: 1.25 };
const SCALE_COMPACT: ScalePreset = ScalePreset { base: 14.0, ratio: 1.2 };
const SCALE_DRAMATIC: ScalePreset = ScalePreset { base: 16.0, ratio: 1.5 };

fn scale_for(pairing_name: &str) -> ScalePreset {
    if pairing_name.contains("Compact") || pairing_name.contains("Technical") {
        SCALE_COMPACT
    } else if pairing_name.contains("Elegant") || pairing_name.contains("Creative") {
        SCALE_DRAMATIC
    } else {
        SCALE_DEFAULT
    }
}

/// Heading and body font stacks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontFamily {
    pub heading: String,
    pub body: String,
}

/// Named steps of the modular scale, integer pixel sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSizes {
    pub xs: u32,
    pub sm: u32,
    pub base: u32,
    pub lg: u32,
    pub xl: u32,
    #[serde(rename = "2xl")]
    pub xxl: u32,
    #[serde(rename = "3xl")]
    pub xxxl: u32,
}

impl FontSizes {
    /// The steps from smallest to largest
    pub fn steps(&self) -> [u32; 7] {
        [self.xs, self.sm, self.base, self.lg, self.xl, self.xxl, self.xxxl]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontWeights {
    pub normal: u32,
    pub medium: u32,
    pub semibold: u32,
    pub bold: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineHeights {
    pub tight: f64,
    pub normal: f64,
    pub relaxed: f64,
}

/// A complete typographic system for one template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographySystem {
    pub font_family: FontFamily,
    pub font_sizes: FontSizes,
    pub font_weight: FontWeights,
    pub line_height: LineHeights,
    pub characterization: String,
}

/// Generate a typography system for a named pairing.
///
/// Unknown names fall back to the first pairing in the table.
pub fn generate_typography_system(pairing_name: &str) -> TypographySystem {
    let pairing = FONT_PAIRINGS
        .iter()
        .find(|p| p.name == pairing_name)
        .unwrap_or(&FONT_PAIRINGS[0]);

    let scale = scale_for(pairing_name);
    let ScalePreset { base, ratio } = scale;

    let font_sizes = FontSizes {
        xs: (base / ratio).round() as u32,
        sm: (base / ratio.sqrt()).round() as u32,
        base: base.round() as u32,
        lg: (base * ratio.sqrt()).round() as u32,
        xl: (base * ratio).round() as u32,
        xxl: (base * ratio * ratio).round() as u32,
        xxxl: (base * ratio * ratio * ratio).round() as u32,
    };

    TypographySystem {
        font_family: FontFamily {
            heading: pairing.heading.to_string(),
            body: pairing.body.to_string(),
        },
        font_sizes,
        font_weight: FontWeights {
            normal: 400,
            medium: 500,
            semibold: 600,
            bold: 700,
        },
        line_height: LineHeights {
            tight: 1.2,
            normal: 1.5,
            relaxed: 1.75,
        },
        characterization: pairing.characterization.to_string(),
    }
}

/// Pick the typography conventionally suited to a document style
pub fn style_typography(style: &str) -> TypographySystem {
    match style {
        "corporate" => generate_typography_system("Corporate Professional"),
        "creative" => generate_typography_system("Creative Modern"),
        "minimal" => generate_typography_system("Modern Sans"),
        "abstract" => generate_typography_system("Elegant Contrast"),
        _ => generate_typography_system("Modern Sans"),
    }
}
