//! Page layout grids: preset tables, seeded variation, overlap relaxation

pub mod presets;
pub mod types;
pub mod variation;

pub use presets::{find_preset, grid_presets, preset_names, style_layout};
pub use types::{LayoutGrid, Section, SectionKind};
pub use variation::{generate_layout_variation, resolve_overlaps, OVERLAP_PASS_LIMIT};
