//! Core types for page layout grids

use serde::{Deserialize, Serialize};

/// The role a section plays on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Header,
    Footer,
    Sidebar,
    Content,
    Highlight,
    Gallery,
}

/// One rectangular region of a page layout.
///
/// Coordinates and sizes are percentages of the page dimensions, each in
/// [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SectionKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Section {
    pub fn new(id: &str, kind: SectionKind, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: id.to_string(),
            kind,
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check whether two sections' rectangles intersect
    pub fn intersects(&self, other: &Section) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// A named grid of page sections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutGrid {
    pub name: String,
    pub sections: Vec<Section>,
}

impl LayoutGrid {
    pub fn new(name: &str, sections: Vec<Section>) -> Self {
        Self {
            name: name.to_string(),
            sections,
        }
    }

    /// Count of intersecting section pairs
    pub fn overlap_count(&self) -> usize {
        let mut count = 0;
        for i in 0..self.sections.len() {
            for j in (i + 1)..self.sections.len() {
                if self.sections[i].intersects(&self.sections[j]) {
                    count += 1;
                }
            }
        }
        count
    }
}
