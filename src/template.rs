//! Template assembly: the orchestration layer over the four generators
//!
//! The assembler never fails. Unknown preset names resolve to first-table
//! fallbacks inside the generators, and anything that would poison the
//! pipeline (a non-finite seed) degrades the whole output to a hard-coded
//! minimal template.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::{self, Palette};
use crate::graphics::{self, DecorativeElement};
use crate::layout::{self, LayoutGrid};
use crate::options::{DocumentStyle, StyleOptions};
use crate::rng::SeededRng;
use crate::typography::{self, TypographySystem};

/// Magnitude of the layout perturbation applied to the chosen preset
pub const LAYOUT_VARIATION: f64 = 0.1;

/// A complete generated document template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub style: DocumentStyle,
    pub colors: Palette,
    pub typography: TypographySystem,
    pub layout: LayoutGrid,
    pub decorative_elements: Vec<DecorativeElement>,
    pub seed: f64,
}

#[derive(Debug, Error)]
enum TemplateError {
    #[error("seed is not a finite number: {0}")]
    NonFiniteSeed(f64),
}

/// Generate a template from a parameter set.
///
/// Always returns a usable `Template`: internal failure substitutes the
/// minimal fallback instead of propagating.
pub fn generate_template(options: &StyleOptions) -> Template {
    assemble(options).unwrap_or_else(|_| fallback_template(options))
}

fn assemble(options: &StyleOptions) -> Result<Template, TemplateError> {
    if !options.seed.is_finite() {
        return Err(TemplateError::NonFiniteSeed(options.seed));
    }

    let colors = color::generate_palette(options.base_hue, options.color_scheme);
    let typography = typography::generate_typography_system(&options.typography);

    let base = layout::find_preset(&options.layout);
    let mut rng = SeededRng::new(options.seed);
    let layout = layout::generate_layout_variation(&base, LAYOUT_VARIATION, &mut rng);

    // The palette is computed once and shared with the graphics pass
    let decorative_elements =
        graphics::generate_decorative_elements(options.style.name(), &colors, options.seed);

    Ok(Template {
        style: options.style,
        colors,
        typography,
        layout,
        decorative_elements,
        seed: options.seed,
    })
}

/// The minimal template substituted on whole-pipeline failure: a fixed
/// neutral palette, the first layout preset untouched, no decoration.
fn fallback_template(options: &StyleOptions) -> Template {
    let colors = Palette::new([
        "#4a5568".to_string(),
        "#718096".to_string(),
        "#2b6cb0".to_string(),
        "#ffffff".to_string(),
        "#1a202c".to_string(),
    ]);

    Template {
        style: options.style,
        colors,
        typography: typography::generate_typography_system(""),
        layout: layout::grid_presets().remove(0),
        decorative_elements: Vec::new(),
        seed: options.seed,
    }
}
