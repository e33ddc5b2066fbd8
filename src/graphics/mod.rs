//! Seeded synthesis of decorative vector elements
//!
//! Each document style maps to a shape vocabulary, an element count range
//! and a size range. The same (style, palette, seed) triple always produces
//! the same element sequence, and generation never fails: a shape
//! constructor rejecting its parameters degrades that one element to a
//! plain circle.

pub mod shapes;

use serde::{Deserialize, Serialize};

use crate::color::Palette;
use crate::rng::SeededRng;

pub use shapes::{GraphicsError, ShapeKind};

/// A self-contained decorative vector shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecorativeElement {
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    pub svg: String,
}

/// Shape vocabulary and ranges for one document style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleParams {
    pub shapes: &'static [ShapeKind],
    pub count_min: usize,
    pub count_spread: usize,
    pub min_size: f64,
    pub max_size: f64,
}

const CORPORATE_SHAPES: &[ShapeKind] = &[
    ShapeKind::Square,
    ShapeKind::Line,
    ShapeKind::Grid,
    ShapeKind::Corner,
];

const CREATIVE_SHAPES: &[ShapeKind] = &[
    ShapeKind::Circle,
    ShapeKind::Triangle,
    ShapeKind::Wave,
    ShapeKind::Zigzag,
];

const MINIMAL_SHAPES: &[ShapeKind] = &[
    ShapeKind::Circle,
    ShapeKind::Line,
    ShapeKind::Dot,
    ShapeKind::Diamond,
];

const ABSTRACT_SHAPES: &[ShapeKind] = &[
    ShapeKind::Triangle,
    ShapeKind::Cross,
    ShapeKind::Zigzag,
    ShapeKind::Diamond,
];

const DEFAULT_SHAPES: &[ShapeKind] = &[ShapeKind::Circle, ShapeKind::Square];

impl StyleParams {
    /// Resolve generation parameters for a style name.
    ///
    /// Unrecognized names get a small neutral vocabulary.
    pub fn for_style(style: &str) -> StyleParams {
        match style {
            "corporate" => StyleParams {
                shapes: CORPORATE_SHAPES,
                count_min: 3,
                count_spread: 2,
                min_size: 30.0,
                max_size: 60.0,
            },
            "creative" => StyleParams {
                shapes: CREATIVE_SHAPES,
                count_min: 5,
                count_spread: 3,
                min_size: 40.0,
                max_size: 80.0,
            },
            "minimal" => StyleParams {
                shapes: MINIMAL_SHAPES,
                count_min: 2,
                count_spread: 2,
                min_size: 20.0,
                max_size: 50.0,
            },
            "abstract" => StyleParams {
                shapes: ABSTRACT_SHAPES,
                count_min: 4,
                count_spread: 4,
                min_size: 50.0,
                max_size: 90.0,
            },
            _ => StyleParams {
                shapes: DEFAULT_SHAPES,
                count_min: 3,
                count_spread: 0,
                min_size: 30.0,
                max_size: 60.0,
            },
        }
    }
}

/// Build one shape, drawing any shape-specific extras from the generator
fn synthesize(
    kind: ShapeKind,
    size: f64,
    color: &str,
    rng: &mut SeededRng,
) -> Result<String, GraphicsError> {
    match kind {
        ShapeKind::Circle => shapes::circle(size, color),
        ShapeKind::Square => shapes::square(size, color),
        ShapeKind::Triangle => shapes::triangle(size, color),
        ShapeKind::Line => {
            let rotation = rng.range(0.0, 360.0);
            shapes::line(size, color, rotation)
        }
        ShapeKind::Wave => shapes::wave(size, color),
        ShapeKind::Dot => {
            let count = 3 + (rng.next() * 5.0) as usize;
            let gap = rng.range(10.0, 20.0);
            shapes::dot_row(size, color, count, gap)
        }
        ShapeKind::Cross => shapes::cross(size, color),
        ShapeKind::Zigzag => shapes::zigzag(size, color),
        ShapeKind::Diamond => shapes::diamond(size, color),
        ShapeKind::Grid => shapes::grid_lines(size, color),
        ShapeKind::Corner => shapes::corner_arc(size, color),
    }
}

/// The element substituted when a constructor rejects its parameters
fn fallback_circle(color: &str) -> DecorativeElement {
    DecorativeElement {
        kind: ShapeKind::Circle,
        svg: format!(
            r#"<svg viewBox="0 0 100 100" xmlns="http://www.w3.org/2000/svg"><circle cx="50" cy="50" r="20" fill="{color}"/></svg>"#
        ),
    }
}

/// Generate the decorative element list for a style and palette.
///
/// Deterministic in (style, palette, seed); never fails.
pub fn generate_decorative_elements(
    style: &str,
    palette: &Palette,
    seed: f64,
) -> Vec<DecorativeElement> {
    let mut rng = SeededRng::new(seed);
    let params = StyleParams::for_style(style);
    let count = params.count_min + (rng.next() * params.count_spread as f64) as usize;

    let mut elements = Vec::with_capacity(count);
    for _ in 0..count {
        let color = rng.pick(palette.as_slice()).clone();
        let kind = *rng.pick(params.shapes);
        let size = rng.range(params.min_size, params.max_size);

        let element = match synthesize(kind, size, &color, &mut rng) {
            Ok(svg) => DecorativeElement { kind, svg },
            Err(_) => fallback_circle(&color),
        };
        elements.push(element);
    }

    elements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{generate_palette, Scheme};
    use pretty_assertions::assert_eq;

    fn palette() -> Palette {
        generate_palette(210, Scheme::Triadic)
    }

    #[test]
    fn test_deterministic_for_same_inputs() {
        let a = generate_decorative_elements("creative", &palette(), 0.5);
        let b = generate_decorative_elements("creative", &palette(), 0.5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = generate_decorative_elements("abstract", &palette(), 0.1);
        let b = generate_decorative_elements("abstract", &palette(), 17.3);
        assert_ne!(a, b);
    }

    #[test]
    fn test_counts_stay_in_style_range() {
        for (style, min, max) in [
            ("corporate", 3, 4),
            ("creative", 5, 7),
            ("minimal", 2, 3),
            ("abstract", 4, 7),
        ] {
            for seed in [0.0, 0.5, 3.7, 99.9] {
                let elements = generate_decorative_elements(style, &palette(), seed);
                assert!(
                    elements.len() >= min && elements.len() <= max,
                    "{style} produced {} elements",
                    elements.len()
                );
            }
        }
    }

    #[test]
    fn test_shapes_come_from_style_vocabulary() {
        let elements = generate_decorative_elements("minimal", &palette(), 2.5);
        for e in &elements {
            assert!(
                MINIMAL_SHAPES.contains(&e.kind),
                "{} is not a minimal shape",
                e.kind
            );
        }
    }

    #[test]
    fn test_unknown_style_uses_default_vocabulary() {
        let elements = generate_decorative_elements("bauhaus", &palette(), 0.5);
        assert_eq!(elements.len(), 3);
        for e in &elements {
            assert!(DEFAULT_SHAPES.contains(&e.kind));
        }
    }

    #[test]
    fn test_colors_come_from_palette() {
        let palette = palette();
        let elements = generate_decorative_elements("creative", &palette, 1.25);
        for e in &elements {
            assert!(
                palette.as_slice().iter().any(|c| e.svg.contains(c.as_str())),
                "element svg uses a color outside the palette: {}",
                e.svg
            );
        }
    }

    #[test]
    fn test_never_fails_even_for_hostile_seed() {
        for style in ["corporate", "creative", "minimal", "abstract", ""] {
            let elements = generate_decorative_elements(style, &palette(), f64::NAN);
            for e in &elements {
                assert!(e.svg.contains("<svg"));
            }
        }
    }

    #[test]
    fn test_elements_round_trip_through_json() {
        let elements = generate_decorative_elements("minimal", &palette(), 0.5);
        let json = serde_json::to_string(&elements).expect("serializes");
        let back: Vec<DecorativeElement> = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(back, elements);
    }
}
