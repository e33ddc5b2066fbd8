//! Seeded perturbation of grid presets and pairwise overlap relaxation

use crate::rng::SeededRng;

use super::types::{LayoutGrid, Section};

/// Maximum number of overlap-resolution passes.
///
/// The relaxation is a bounded heuristic: it reduces overlap but does not
/// promise an exact packing once the pass limit is hit.
pub const OVERLAP_PASS_LIMIT: usize = 10;

/// Page margin sections are kept inside, in percent
const MARGIN: f64 = 5.0;

/// Gap inserted between sections when resolving an overlap
const SEPARATION_BUFFER: f64 = 1.0;

/// Produce a perturbed copy of a grid.
///
/// Positions move by up to `±variation_factor` of their value, sizes by half
/// that. Sections are kept inside the page margins, then run through the
/// overlap relaxation.
pub fn generate_layout_variation(
    base: &LayoutGrid,
    variation_factor: f64,
    rng: &mut SeededRng,
) -> LayoutGrid {
    let mut grid = base.clone();

    for section in &mut grid.sections {
        section.width = perturb(section.width, variation_factor * 0.5, 10.0, 90.0, rng);
        section.height = perturb(section.height, variation_factor * 0.5, 5.0, 80.0, rng);
        section.x = perturb(section.x, variation_factor, MARGIN, 95.0 - section.width, rng);
        section.y = perturb(section.y, variation_factor, MARGIN, 95.0 - section.height, rng);
    }

    resolve_overlaps(&mut grid.sections);
    grid
}

/// Shift a value by up to `±factor * value`, clamped into [min, max]
fn perturb(value: f64, factor: f64, min: f64, max: f64, rng: &mut SeededRng) -> f64 {
    let spread = value * factor;
    let shifted = value + (rng.next() * 2.0 - 1.0) * spread;
    shifted.min(max).max(min)
}

/// Reduce pairwise overlap by nudging the later of each intersecting pair.
///
/// Each pass scans pairs in top-to-bottom order and shifts the later section
/// along whichever axis has the smaller overlap, plus a one-unit buffer.
/// Stops early once a full pass finds no intersection.
pub fn resolve_overlaps(sections: &mut [Section]) {
    for _ in 0..OVERLAP_PASS_LIMIT {
        let mut order: Vec<usize> = (0..sections.len()).collect();
        order.sort_by(|&a, &b| sections[a].y.total_cmp(&sections[b].y));

        let mut moved = false;
        for i in 0..order.len() {
            for j in (i + 1)..order.len() {
                let (a, b) = (order[i], order[j]);
                if !sections[a].intersects(&sections[b]) {
                    continue;
                }

                let overlap_x = sections[a].right().min(sections[b].right())
                    - sections[a].x.max(sections[b].x);
                let overlap_y = sections[a].bottom().min(sections[b].bottom())
                    - sections[a].y.max(sections[b].y);

                let later = &mut sections[b];
                if overlap_x < overlap_y {
                    later.x = clamp_position(later.x + overlap_x + SEPARATION_BUFFER, later.width);
                } else {
                    later.y = clamp_position(later.y + overlap_y + SEPARATION_BUFFER, later.height);
                }
                moved = true;
            }
        }

        if !moved {
            break;
        }
    }

    for section in sections.iter_mut() {
        section.x = clamp_position(section.x, section.width);
        section.y = clamp_position(section.y, section.height);
    }
}

fn clamp_position(value: f64, size: f64) -> f64 {
    value.min(95.0 - size).max(MARGIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::presets::grid_presets;
    use crate::layout::types::SectionKind;

    fn section(id: &str, x: f64, y: f64, w: f64, h: f64) -> Section {
        Section::new(id, SectionKind::Content, x, y, w, h)
    }

    #[test]
    fn test_variation_keeps_sections_on_page() {
        for grid in grid_presets() {
            for seed in [0.0, 0.5, 1.5, 42.0, 1234.5] {
                let mut rng = SeededRng::new(seed);
                let varied = generate_layout_variation(&grid, 0.1, &mut rng);
                for s in &varied.sections {
                    assert!(s.x >= 0.0 && s.y >= 0.0, "{}/{} escaped page", grid.name, s.id);
                    assert!(s.right() <= 100.0, "{}/{} right edge {}", grid.name, s.id, s.right());
                    assert!(s.bottom() <= 100.0, "{}/{} bottom {}", grid.name, s.id, s.bottom());
                }
            }
        }
    }

    #[test]
    fn test_variation_preserves_structure() {
        let base = grid_presets().remove(1);
        let mut rng = SeededRng::new(0.7);
        let varied = generate_layout_variation(&base, 0.1, &mut rng);
        assert_eq!(varied.name, base.name);
        assert_eq!(varied.sections.len(), base.sections.len());
        for (a, b) in varied.sections.iter().zip(&base.sections) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.kind, b.kind);
        }
    }

    #[test]
    fn test_variation_is_deterministic() {
        let base = grid_presets().remove(2);
        let mut rng_a = SeededRng::new(9.25);
        let mut rng_b = SeededRng::new(9.25);
        let a = generate_layout_variation(&base, 0.1, &mut rng_a);
        let b = generate_layout_variation(&base, 0.1, &mut rng_b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_factor_is_identity_within_margins() {
        let base = grid_presets().remove(0);
        let mut rng = SeededRng::new(0.3);
        let varied = generate_layout_variation(&base, 0.0, &mut rng);
        for (a, b) in varied.sections.iter().zip(&base.sections) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, b.y);
            assert_eq!(a.width, b.width);
            assert_eq!(a.height, b.height);
        }
    }

    #[test]
    fn test_resolve_separates_stacked_pair() {
        let mut sections = vec![
            section("a", 10.0, 10.0, 40.0, 30.0),
            section("b", 15.0, 20.0, 40.0, 30.0),
        ];
        resolve_overlaps(&mut sections);
        assert!(!sections[0].intersects(&sections[1]));
    }

    #[test]
    fn test_resolve_prefers_cheaper_axis() {
        // Thin horizontal sliver of overlap: pushing down is cheaper
        let mut sections = vec![
            section("a", 10.0, 10.0, 60.0, 20.0),
            section("b", 10.0, 28.0, 60.0, 20.0),
        ];
        resolve_overlaps(&mut sections);
        assert!(!sections[0].intersects(&sections[1]));
        // The later section moved down, not sideways
        assert_eq!(sections[1].x, 10.0);
        assert!(sections[1].y > 28.0);
    }

    #[test]
    fn test_resolve_reduces_overlap_in_dense_grid() {
        let mut sections = vec![
            section("a", 20.0, 20.0, 50.0, 50.0),
            section("b", 25.0, 25.0, 50.0, 50.0),
            section("c", 30.0, 30.0, 50.0, 50.0),
            section("d", 35.0, 35.0, 50.0, 50.0),
        ];
        let before = LayoutGrid::new("dense", sections.clone()).overlap_count();
        resolve_overlaps(&mut sections);
        let after = LayoutGrid::new("dense", sections.clone()).overlap_count();
        assert!(after <= before, "overlap grew from {before} to {after}");
        for s in &sections {
            assert!(s.x >= MARGIN && s.right() <= 95.0);
            assert!(s.y >= MARGIN && s.bottom() <= 95.0);
        }
    }
}
