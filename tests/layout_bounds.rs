//! Layout invariants: varied grids stay on the page and overlap shrinks

use template_studio::{
    generate_layout_variation, grid_presets, DocumentStyle, Scheme, SeededRng, StyleOptions,
};

#[test]
fn test_all_presets_stay_on_page_after_variation() {
    for grid in grid_presets() {
        for seed in [0.0, 0.25, 0.5, 1.0, 2.5, 7.75, 42.0, 1000.0] {
            let mut rng = SeededRng::new(seed);
            let varied = generate_layout_variation(&grid, 0.1, &mut rng);

            for section in &varied.sections {
                assert!(section.x >= 0.0, "{}/{}: x={}", grid.name, section.id, section.x);
                assert!(section.y >= 0.0, "{}/{}: y={}", grid.name, section.id, section.y);
                assert!(
                    section.x + section.width <= 100.0,
                    "{}/{}: right edge {}",
                    grid.name,
                    section.id,
                    section.x + section.width
                );
                assert!(
                    section.y + section.height <= 100.0,
                    "{}/{}: bottom edge {}",
                    grid.name,
                    section.id,
                    section.y + section.height
                );
            }
        }
    }
}

#[test]
fn test_variation_does_not_add_overlap_to_spread_presets() {
    // Presets start overlap-free; after a mild perturbation, the resolver
    // should keep the count low - never worse than the perturbed state.
    for grid in grid_presets() {
        assert_eq!(grid.overlap_count(), 0, "{} preset overlaps", grid.name);

        for seed in [0.5, 3.5, 19.25] {
            let mut rng = SeededRng::new(seed);
            let varied = generate_layout_variation(&grid, 0.1, &mut rng);
            // The relaxation is a bounded heuristic; a small residue is
            // acceptable, growth beyond the section count is not.
            assert!(
                varied.overlap_count() <= varied.sections.len(),
                "{} overlap count {} after variation",
                grid.name,
                varied.overlap_count()
            );
        }
    }
}

#[test]
fn test_generated_template_honors_layout_bounds() {
    for style in DocumentStyle::ALL {
        for layout in ["classic-document", "modern-split", "asymmetric", "presentation", "infographic"] {
            let options = StyleOptions {
                style,
                base_hue: 120,
                color_scheme: Scheme::Analogous,
                typography: "Friendly Professional".to_string(),
                layout: layout.to_string(),
                seed: 0.77,
            };
            let template = template_studio::generate_template(&options);
            assert_eq!(template.layout.name, layout);
            for section in &template.layout.sections {
                assert!(section.x >= 0.0 && section.y >= 0.0);
                assert!(section.x + section.width <= 100.0);
                assert!(section.y + section.height <= 100.0);
            }
        }
    }
}
