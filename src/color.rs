//! Color palette generation from a base hue and a color-theory scheme
//!
//! Palettes are ordered: [primary, secondary, accent, background, text].
//! Consumers index by position, so the slot order is part of the contract.

use serde::{Deserialize, Serialize};

/// A color-theory scheme used to derive a palette from a base hue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scheme {
    Monochromatic,
    Complementary,
    Analogous,
    Triadic,
    SplitComplementary,
}

impl Scheme {
    /// All schemes, in presentation order
    pub const ALL: [Scheme; 5] = [
        Scheme::Monochromatic,
        Scheme::Complementary,
        Scheme::Analogous,
        Scheme::Triadic,
        Scheme::SplitComplementary,
    ];

    /// Resolve a scheme name. Unrecognized names fall back to monochromatic.
    pub fn from_name(name: &str) -> Scheme {
        match name {
            "monochromatic" => Scheme::Monochromatic,
            "complementary" => Scheme::Complementary,
            "analogous" => Scheme::Analogous,
            "triadic" => Scheme::Triadic,
            "split-complementary" => Scheme::SplitComplementary,
            _ => Scheme::Monochromatic,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Scheme::Monochromatic => "monochromatic",
            Scheme::Complementary => "complementary",
            Scheme::Analogous => "analogous",
            Scheme::Triadic => "triadic",
            Scheme::SplitComplementary => "split-complementary",
        }
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An ordered five-color palette with fixed slot semantics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette([String; 5]);

impl Palette {
    pub fn new(colors: [String; 5]) -> Self {
        Self(colors)
    }

    pub fn primary(&self) -> &str {
        &self.0[0]
    }

    pub fn secondary(&self) -> &str {
        &self.0[1]
    }

    pub fn accent(&self) -> &str {
        &self.0[2]
    }

    pub fn background(&self) -> &str {
        &self.0[3]
    }

    pub fn text(&self) -> &str {
        &self.0[4]
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// Convert HSL (hue in degrees, saturation/lightness in percent) to RGB
/// channels using the standard six-sector piecewise formula.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let s = s / 100.0;
    let l = l / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    )
}

/// Format RGB channels as a `#rrggbb` hex string
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    let packed = (1u32 << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32;
    format!("#{:06x}", packed & 0x00ff_ffff)
}

/// Normalize a hue into [0, 360)
fn normalize_hue(h: i32) -> f64 {
    (((h % 360) + 360) % 360) as f64
}

/// Normalize a hue expressed in degrees after scheme arithmetic
fn wrap_degrees(h: f64) -> f64 {
    ((h % 360.0) + 360.0) % 360.0
}

fn hex(h: f64, s: f64, l: f64) -> String {
    let (r, g, b) = hsl_to_rgb(wrap_degrees(h), s, l);
    rgb_to_hex(r, g, b)
}

/// Generate a five-color palette from a base hue and scheme.
///
/// The hue may be any integer; it is normalized into [0, 360) first, so the
/// result is invariant under full rotations of the color wheel.
pub fn generate_palette(base_hue: i32, scheme: Scheme) -> Palette {
    let hue = normalize_hue(base_hue);

    match scheme {
        Scheme::Monochromatic => monochromatic(hue),
        Scheme::Complementary => complementary(hue),
        Scheme::Analogous => analogous(hue),
        Scheme::Triadic => triadic(hue),
        Scheme::SplitComplementary => split_complementary(hue),
    }
}

/// Single hue, lightness stepping down from 95% to 25%, with the final
/// step desaturated to read as a text color.
fn monochromatic(hue: f64) -> Palette {
    let mut colors: Vec<String> = Vec::with_capacity(5);
    for i in 0..5 {
        let lightness = 95.0 - i as f64 * 17.5;
        let saturation = if i == 4 { 25.0 } else { 70.0 };
        colors.push(hex(hue, saturation, lightness));
    }
    Palette::new(into_array(colors))
}

fn complementary(hue: f64) -> Palette {
    let complement = hue + 180.0;
    Palette::new([
        hex(hue, 70.0, 60.0),
        hex(hue, 60.0, 75.0),
        hex(complement, 70.0, 60.0),
        // Near-white background and near-black text, both tinted by the base hue
        hex(hue, 15.0, 96.0),
        hex(hue, 25.0, 15.0),
    ])
}

fn analogous(hue: f64) -> Palette {
    Palette::new([
        hex(hue, 70.0, 60.0),
        hex(hue - 30.0, 60.0, 55.0),
        hex(hue + 30.0, 60.0, 55.0),
        hex(hue, 20.0, 95.0),
        hex(hue, 25.0, 20.0),
    ])
}

fn triadic(hue: f64) -> Palette {
    Palette::new([
        hex(hue, 70.0, 60.0),
        hex(hue + 120.0, 70.0, 60.0),
        hex(hue + 240.0, 70.0, 60.0),
        hex(hue, 30.0, 95.0),
        hex(hue, 30.0, 15.0),
    ])
}

fn split_complementary(hue: f64) -> Palette {
    let complement = hue + 180.0;
    Palette::new([
        hex(hue, 70.0, 60.0),
        hex(complement - 30.0, 70.0, 60.0),
        hex(complement + 30.0, 70.0, 60.0),
        hex(hue, 20.0, 95.0),
        hex(hue, 25.0, 15.0),
    ])
}

fn into_array(colors: Vec<String>) -> [String; 5] {
    match <[String; 5]>::try_from(colors) {
        Ok(arr) => arr,
        Err(_) => unreachable!("palette builders always produce five colors"),
    }
}

/// Generate a palette for a document style, rotating corporate palettes
/// toward the blue range the way print templates conventionally do.
pub fn style_palette(style: &str, base_hue: i32) -> Palette {
    match style {
        "corporate" => generate_palette((base_hue + 210) % 360, Scheme::Monochromatic),
        "creative" => generate_palette(base_hue, Scheme::Triadic),
        "minimal" => generate_palette(base_hue, Scheme::Analogous),
        "abstract" => generate_palette(base_hue, Scheme::SplitComplementary),
        _ => generate_palette(base_hue, Scheme::Monochromatic),
    }
}
