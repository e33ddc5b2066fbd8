//! Template Studio - deterministic document template generation
//!
//! This library turns a compact parameter set (style, base hue, color
//! scheme, typography and layout preset names, and a seed) into a complete
//! visual template: a five-color palette, a modular typographic scale, a
//! perturbed page layout grid, and a set of decorative vector elements.
//!
//! Generation is pure: the same options always produce the same template,
//! and the pipeline never fails - unknown preset names resolve to defaults
//! and degenerate inputs degrade to a minimal fallback template.
//!
//! # Example
//!
//! ```rust
//! use template_studio::{generate_template, StyleOptions};
//!
//! let template = generate_template(&StyleOptions::default());
//! assert_eq!(template.colors.as_slice().len(), 5);
//! assert!(template.layout.sections.len() >= 3);
//! ```

pub mod color;
pub mod graphics;
pub mod layout;
pub mod options;
pub mod preview;
pub mod rng;
pub mod template;
pub mod typography;

pub use color::{generate_palette, Palette, Scheme};
pub use graphics::{generate_decorative_elements, DecorativeElement, ShapeKind};
pub use layout::{
    find_preset, generate_layout_variation, grid_presets, style_layout, LayoutGrid, Section,
    SectionKind,
};
pub use options::{DocumentStyle, OptionsError, StyleOptions};
pub use preview::{render_preview, PreviewConfig};
pub use rng::SeededRng;
pub use template::{generate_template, Template, LAYOUT_VARIATION};
pub use typography::{generate_typography_system, TypographySystem, FONT_PAIRINGS};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_template_default_options() {
        let template = generate_template(&StyleOptions::default());
        assert_eq!(template.colors.as_slice().len(), 5);
        assert!(template.layout.sections.len() >= 3);
        assert_eq!(template.seed, 0.5);
    }

    #[test]
    fn test_public_api_round_trip() {
        let options = StyleOptions::randomized(7.0);
        let template = generate_template(&options);
        let json = serde_json::to_string(&template).expect("serializes");
        let back: Template = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(back, template);
    }
}
