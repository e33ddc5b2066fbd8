//! The fixed table of named grid presets

use super::types::{LayoutGrid, Section, SectionKind};

fn classic_document() -> LayoutGrid {
    LayoutGrid::new(
        "classic-document",
        vec![
            Section::new("header", SectionKind::Header, 5.0, 5.0, 90.0, 15.0),
            Section::new("content", SectionKind::Content, 5.0, 25.0, 90.0, 60.0),
            Section::new("footer", SectionKind::Footer, 5.0, 90.0, 90.0, 5.0),
        ],
    )
}

fn modern_split() -> LayoutGrid {
    LayoutGrid::new(
        "modern-split",
        vec![
            Section::new("header", SectionKind::Header, 5.0, 5.0, 90.0, 10.0),
            Section::new("sidebar", SectionKind::Sidebar, 5.0, 20.0, 25.0, 70.0),
            Section::new("content", SectionKind::Content, 35.0, 20.0, 60.0, 70.0),
            Section::new("footer", SectionKind::Footer, 5.0, 95.0, 90.0, 5.0),
        ],
    )
}

fn asymmetric() -> LayoutGrid {
    LayoutGrid::new(
        "asymmetric",
        vec![
            Section::new("header", SectionKind::Header, 15.0, 5.0, 70.0, 15.0),
            Section::new("sidebar", SectionKind::Sidebar, 5.0, 25.0, 30.0, 60.0),
            Section::new("content", SectionKind::Content, 40.0, 25.0, 55.0, 50.0),
            Section::new("callout", SectionKind::Highlight, 40.0, 80.0, 55.0, 10.0),
        ],
    )
}

fn presentation() -> LayoutGrid {
    LayoutGrid::new(
        "presentation",
        vec![
            Section::new("header", SectionKind::Header, 10.0, 5.0, 80.0, 20.0),
            Section::new("contentLeft", SectionKind::Content, 10.0, 30.0, 35.0, 60.0),
            Section::new("contentRight", SectionKind::Content, 55.0, 30.0, 35.0, 60.0),
            Section::new("footer", SectionKind::Footer, 10.0, 95.0, 80.0, 5.0),
        ],
    )
}

fn infographic() -> LayoutGrid {
    LayoutGrid::new(
        "infographic",
        vec![
            Section::new("header", SectionKind::Header, 5.0, 5.0, 90.0, 10.0),
            Section::new("section1", SectionKind::Content, 5.0, 20.0, 90.0, 20.0),
            Section::new("section2", SectionKind::Content, 5.0, 45.0, 40.0, 20.0),
            Section::new("section3", SectionKind::Content, 50.0, 45.0, 45.0, 20.0),
            Section::new("gallery", SectionKind::Gallery, 5.0, 70.0, 90.0, 20.0),
            Section::new("footer", SectionKind::Footer, 5.0, 95.0, 90.0, 5.0),
        ],
    )
}

/// All grid presets, in presentation order. The first is the fallback.
pub fn grid_presets() -> Vec<LayoutGrid> {
    vec![
        classic_document(),
        modern_split(),
        asymmetric(),
        presentation(),
        infographic(),
    ]
}

/// Names of all presets, in table order
pub fn preset_names() -> Vec<String> {
    grid_presets().into_iter().map(|g| g.name).collect()
}

/// Look up a preset by name, falling back to the first preset
pub fn find_preset(name: &str) -> LayoutGrid {
    let presets = grid_presets();
    presets
        .iter()
        .find(|g| g.name == name)
        .cloned()
        .unwrap_or_else(|| presets[0].clone())
}

/// Direct style-to-grid lookup, no randomness
pub fn style_layout(style: &str) -> LayoutGrid {
    match style {
        "corporate" => modern_split(),
        "creative" => asymmetric(),
        "minimal" => classic_document(),
        "abstract" => infographic(),
        _ => classic_document(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_presets_are_well_formed() {
        for grid in grid_presets() {
            assert!(!grid.sections.is_empty(), "{} has no sections", grid.name);
            let ids: HashSet<&str> = grid.sections.iter().map(|s| s.id.as_str()).collect();
            assert_eq!(ids.len(), grid.sections.len(), "{} has duplicate ids", grid.name);
            for s in &grid.sections {
                assert!(s.x >= 0.0 && s.y >= 0.0, "{}/{} out of page", grid.name, s.id);
                assert!(s.right() <= 100.0, "{}/{} exceeds width", grid.name, s.id);
                assert!(s.bottom() <= 100.0, "{}/{} exceeds height", grid.name, s.id);
            }
        }
    }

    #[test]
    fn test_find_preset_by_name() {
        assert_eq!(find_preset("modern-split").name, "modern-split");
        assert_eq!(find_preset("infographic").sections.len(), 6);
    }

    #[test]
    fn test_unknown_preset_falls_back_to_first() {
        assert_eq!(find_preset("brutalist").name, "classic-document");
    }

    #[test]
    fn test_corporate_layout_has_header_and_sidebar() {
        let grid = style_layout("corporate");
        let kinds: Vec<_> = grid.sections.iter().map(|s| s.kind).collect();
        assert!(kinds.contains(&super::SectionKind::Header));
        assert!(kinds.contains(&super::SectionKind::Sidebar));
    }

    #[test]
    fn test_style_layout_fallback() {
        assert_eq!(style_layout("anything-else").name, "classic-document");
    }

    #[test]
    fn test_rich_presets_carry_highlight_and_gallery() {
        let highlight = find_preset("asymmetric");
        assert!(highlight
            .sections
            .iter()
            .any(|s| s.kind == SectionKind::Highlight));
        let gallery = find_preset("infographic");
        assert!(gallery.sections.iter().any(|s| s.kind == SectionKind::Gallery));
    }
}
