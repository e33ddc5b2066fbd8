//! Page preview rendering: compose a template into one standalone SVG
//!
//! Sections become rectangles colored by their role, header and content
//! sections carry type specimens set in the template's typography, and
//! decorative elements are embedded as nested `<svg>` fragments. Which
//! sections receive decoration is drawn from the template seed, so the
//! preview is as reproducible as the template itself.

use crate::color::Palette;
use crate::layout::{Section, SectionKind};
use crate::rng::SeededRng;
use crate::template::Template;
use crate::typography::TypographySystem;

/// Output configuration for the preview renderer
#[derive(Debug, Clone)]
pub struct PreviewConfig {
    /// Page width in pixels
    pub width: f64,
    /// Page height in pixels
    pub height: f64,
    /// Emit indented, line-broken markup
    pub pretty_print: bool,
    /// Opacity applied to embedded decorative elements
    pub decoration_opacity: f64,
    /// Edge length of an embedded decorative element, in pixels
    pub decoration_size: f64,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            // US Letter proportions
            width: 850.0,
            height: 1100.0,
            pretty_print: true,
            decoration_opacity: 0.3,
            decoration_size: 60.0,
        }
    }
}

impl PreviewConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    pub fn with_decoration_opacity(mut self, opacity: f64) -> Self {
        self.decoration_opacity = opacity;
        self
    }
}

/// Accumulates page elements and serializes them into one SVG document
struct PageBuilder {
    pretty_print: bool,
    width: f64,
    height: f64,
    elements: Vec<String>,
}

impl PageBuilder {
    fn new(config: &PreviewConfig) -> Self {
        Self {
            pretty_print: config.pretty_print,
            width: config.width,
            height: config.height,
            elements: vec![],
        }
    }

    fn add_rect(&mut self, id: Option<&str>, x: f64, y: f64, w: f64, h: f64, styles: &str) {
        let id_attr = id.map(|i| format!(r#" id="{}""#, i)).unwrap_or_default();
        self.elements.push(format!(
            r#"<rect{id_attr} x="{x}" y="{y}" width="{w}" height="{h}" {styles}/>"#
        ));
    }

    fn add_text(&mut self, text: &str, x: f64, y: f64, styles: &str) {
        self.elements.push(format!(
            r#"<text x="{x}" y="{y}" {styles}>{}</text>"#,
            xml_escape(text)
        ));
    }

    fn add_fragment(&mut self, fragment: String) {
        self.elements.push(fragment);
    }

    fn build(self) -> String {
        let (newline, indent) = if self.pretty_print {
            ("\n", "  ")
        } else {
            ("", "")
        };

        let mut svg = format!(
            r#"<svg viewBox="0 0 {} {}" width="{}" height="{}" xmlns="http://www.w3.org/2000/svg">"#,
            self.width, self.height, self.width, self.height
        );
        for element in &self.elements {
            svg.push_str(newline);
            svg.push_str(indent);
            svg.push_str(element);
        }
        svg.push_str(newline);
        svg.push_str("</svg>");
        svg
    }
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Fill color for a section, by role
fn section_fill<'a>(kind: SectionKind, palette: &'a Palette) -> &'a str {
    match kind {
        SectionKind::Header => palette.primary(),
        SectionKind::Footer => palette.secondary(),
        SectionKind::Sidebar | SectionKind::Highlight => palette.accent(),
        SectionKind::Content | SectionKind::Gallery => palette.background(),
    }
}

/// Embed a standalone decorative SVG at a pixel position.
///
/// The element documents carry their own viewBox, so positioning is a matter
/// of grafting placement attributes onto the root tag.
fn place_decoration(svg: &str, x: f64, y: f64, size: f64, opacity: f64) -> String {
    svg.replacen(
        "<svg ",
        &format!(r#"<svg x="{x}" y="{y}" width="{size}" height="{size}" opacity="{opacity}" "#),
        1,
    )
}

/// Render a template to a standalone page SVG
pub fn render_preview(template: &Template, config: &PreviewConfig) -> String {
    let mut builder = PageBuilder::new(config);
    let palette = &template.colors;

    builder.add_rect(
        None,
        0.0,
        0.0,
        config.width,
        config.height,
        &format!(r#"fill="{}""#, palette.background()),
    );

    let mut rng = SeededRng::new(template.seed);

    for section in &template.layout.sections {
        let x = section.x / 100.0 * config.width;
        let y = section.y / 100.0 * config.height;
        let w = section.width / 100.0 * config.width;
        let h = section.height / 100.0 * config.height;

        let fill = section_fill(section.kind, palette);
        let styles = match section.kind {
            // Background-colored sections need an outline to stay visible
            SectionKind::Content | SectionKind::Gallery => format!(
                r#"fill="{fill}" stroke="{}" stroke-width="1""#,
                palette.secondary()
            ),
            _ => format!(r#"fill="{fill}""#),
        };
        builder.add_rect(Some(&section.id), x, y, w, h, &styles);

        render_specimen(&mut builder, section, x, y, w, h, palette, &template.typography);

        // Roughly one section in three carries a decoration
        if !template.decorative_elements.is_empty() && rng.next() > 0.7 {
            let element = rng.pick(&template.decorative_elements);
            let size = config.decoration_size;
            builder.add_fragment(place_decoration(
                &element.svg,
                x + w - size - 10.0,
                y + h - size - 10.0,
                size,
                config.decoration_opacity,
            ));
        }
    }

    builder.build()
}

/// Draw placeholder type and content bars appropriate to the section role
#[allow(clippy::too_many_arguments)]
fn render_specimen(
    builder: &mut PageBuilder,
    section: &Section,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    palette: &Palette,
    typography: &TypographySystem,
) {
    match section.kind {
        SectionKind::Header => {
            let title = format!("{} Title", capitalize(&section.id));
            builder.add_text(
                &title,
                x + 16.0,
                y + h / 2.0,
                &format!(
                    r#"font-family="{}" font-size="{}" font-weight="{}" fill="{}""#,
                    typography.font_family.heading,
                    typography.font_sizes.xxl,
                    typography.font_weight.bold,
                    palette.text(),
                ),
            );
            builder.add_rect(
                None,
                x + 16.0,
                y + h / 2.0 + 10.0,
                50.0,
                4.0,
                &format!(r#"fill="{}""#, palette.accent()),
            );
        }
        SectionKind::Content => {
            builder.add_text(
                "Content Section",
                x + 16.0,
                y + 28.0,
                &format!(
                    r#"font-family="{}" font-size="{}" font-weight="{}" fill="{}""#,
                    typography.font_family.heading,
                    typography.font_sizes.xl,
                    typography.font_weight.semibold,
                    palette.primary(),
                ),
            );
            for i in 0..3 {
                builder.add_rect(
                    None,
                    x + 16.0,
                    y + 44.0 + i as f64 * 16.0,
                    (w - 32.0) * (0.9 - i as f64 * 0.1),
                    8.0,
                    r##"fill="#e0e0e0" rx="2""##,
                );
            }
        }
        SectionKind::Sidebar => {
            for i in 0..4 {
                builder.add_rect(
                    None,
                    x + 12.0,
                    y + 20.0 + i as f64 * 24.0,
                    w - 24.0,
                    10.0,
                    &format!(r#"fill="{}" rx="2""#, palette.background()),
                );
            }
        }
        SectionKind::Gallery => {
            let cell = (w - 48.0) / 3.0;
            for i in 0..3 {
                builder.add_rect(
                    None,
                    x + 12.0 + i as f64 * (cell + 12.0),
                    y + 12.0,
                    cell,
                    h - 24.0,
                    &format!(r#"fill="{}""#, palette.secondary()),
                );
            }
        }
        SectionKind::Footer | SectionKind::Highlight => {}
    }
}
