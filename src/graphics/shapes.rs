//! Pure shape constructors for decorative vector elements
//!
//! Every constructor is a closed-form function of its numeric and color
//! parameters, producing a standalone `<svg>` document in a 100x100 viewBox
//! with no external references.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by shape constructors when a parameter is unusable
#[derive(Debug, Error)]
pub enum GraphicsError {
    #[error("shape size out of range: {0}")]
    InvalidSize(f64),

    #[error("shape parameter is not finite: {name}")]
    NonFiniteParameter { name: &'static str },
}

/// The decorative shape vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
    Line,
    Wave,
    Dot,
    Cross,
    Zigzag,
    Diamond,
    Grid,
    Corner,
}

impl ShapeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Line => "line",
            ShapeKind::Wave => "wave",
            ShapeKind::Dot => "dot",
            ShapeKind::Cross => "cross",
            ShapeKind::Zigzag => "zigzag",
            ShapeKind::Diamond => "diamond",
            ShapeKind::Grid => "grid",
            ShapeKind::Corner => "corner",
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn document(body: &str) -> String {
    format!(
        r#"<svg viewBox="0 0 100 100" xmlns="http://www.w3.org/2000/svg">{body}</svg>"#
    )
}

fn check_size(size: f64) -> Result<f64, GraphicsError> {
    if size.is_finite() && size > 0.0 && size <= 100.0 {
        Ok(size)
    } else {
        Err(GraphicsError::InvalidSize(size))
    }
}

fn check_finite(value: f64, name: &'static str) -> Result<f64, GraphicsError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GraphicsError::NonFiniteParameter { name })
    }
}

pub fn circle(size: f64, color: &str) -> Result<String, GraphicsError> {
    let size = check_size(size)?;
    let r = size / 2.0;
    Ok(document(&format!(
        r#"<circle cx="50" cy="50" r="{r}" fill="{color}"/>"#
    )))
}

pub fn square(size: f64, color: &str) -> Result<String, GraphicsError> {
    let size = check_size(size)?;
    let origin = (100.0 - size) / 2.0;
    Ok(document(&format!(
        r#"<rect x="{origin}" y="{origin}" width="{size}" height="{size}" fill="{color}"/>"#
    )))
}

pub fn triangle(size: f64, color: &str) -> Result<String, GraphicsError> {
    let size = check_size(size)?;
    let half = size / 2.0;
    Ok(document(&format!(
        r#"<polygon points="50,{} {},{} {},{}" fill="{color}"/>"#,
        50.0 - half,
        50.0 + half,
        50.0 + half,
        50.0 - half,
        50.0 + half,
    )))
}

pub fn line(size: f64, color: &str, rotation: f64) -> Result<String, GraphicsError> {
    let size = check_size(size)?;
    let rotation = check_finite(rotation, "rotation")?;
    let half = size / 2.0;
    Ok(document(&format!(
        r#"<line x1="{}" y1="50" x2="{}" y2="50" stroke="{color}" stroke-width="{}" transform="rotate({rotation}, 50, 50)"/>"#,
        50.0 - half,
        50.0 + half,
        size / 10.0,
    )))
}

pub fn wave(size: f64, color: &str) -> Result<String, GraphicsError> {
    let size = check_size(size)?;
    let amp = size / 4.0;
    let up = 50.0 - amp;
    let down = 50.0 + amp;
    Ok(document(&format!(
        r#"<path d="M 10,50 C 20,{up} 30,{down} 40,50 C 50,{up} 60,{down} 70,50 C 80,{up} 90,{down} 100,50" stroke="{color}" stroke-width="{}" fill="none"/>"#,
        size / 15.0,
    )))
}

pub fn dot_row(size: f64, color: &str, count: usize, gap: f64) -> Result<String, GraphicsError> {
    let size = check_size(size)?;
    let gap = check_finite(gap, "gap")?;
    let r = size / 10.0;
    let mut body = String::new();
    for i in 0..count {
        let cx = 20.0 + i as f64 * gap;
        body.push_str(&format!(r#"<circle cx="{cx}" cy="50" r="{r}" fill="{color}"/>"#));
    }
    Ok(document(&body))
}

pub fn cross(size: f64, color: &str) -> Result<String, GraphicsError> {
    let size = check_size(size)?;
    let half = size / 2.0;
    let sw = size / 10.0;
    Ok(document(&format!(
        r#"<line x1="{}" y1="50" x2="{}" y2="50" stroke="{color}" stroke-width="{sw}"/><line x1="50" y1="{}" x2="50" y2="{}" stroke="{color}" stroke-width="{sw}"/>"#,
        50.0 - half,
        50.0 + half,
        50.0 - half,
        50.0 + half,
    )))
}

pub fn zigzag(size: f64, color: &str) -> Result<String, GraphicsError> {
    let size = check_size(size)?;
    let amp = size / 4.0;
    let points: Vec<String> = (0..6)
        .map(|i| {
            let x = 10.0 + i as f64 * 16.0;
            let y = if i % 2 == 0 { 50.0 + amp } else { 50.0 - amp };
            format!("{x},{y}")
        })
        .collect();
    Ok(document(&format!(
        r#"<polyline points="{}" stroke="{color}" stroke-width="{}" fill="none"/>"#,
        points.join(" "),
        size / 12.0,
    )))
}

pub fn diamond(size: f64, color: &str) -> Result<String, GraphicsError> {
    let size = check_size(size)?;
    let half = size / 2.0;
    Ok(document(&format!(
        r#"<polygon points="50,{} {},50 50,{} {},50" fill="{color}"/>"#,
        50.0 - half,
        50.0 + half,
        50.0 + half,
        50.0 - half,
    )))
}

pub fn grid_lines(size: f64, color: &str) -> Result<String, GraphicsError> {
    let size = check_size(size)?;
    let start = (100.0 - size) / 2.0;
    let end = start + size;
    let step = size / 3.0;
    let mut body = String::new();
    for i in 0..4 {
        let offset = start + i as f64 * step;
        body.push_str(&format!(
            r#"<line x1="{offset}" y1="{start}" x2="{offset}" y2="{end}" stroke="{color}" stroke-width="1.5"/>"#
        ));
        body.push_str(&format!(
            r#"<line x1="{start}" y1="{offset}" x2="{end}" y2="{offset}" stroke="{color}" stroke-width="1.5"/>"#
        ));
    }
    Ok(document(&body))
}

pub fn corner_arc(size: f64, color: &str) -> Result<String, GraphicsError> {
    let size = check_size(size)?;
    Ok(document(&format!(
        r#"<path d="M 5,{} A {size},{size} 0 0 1 {},5" stroke="{color}" stroke-width="{}" fill="none"/>"#,
        5.0 + size,
        5.0 + size,
        size / 12.0,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shapes_are_standalone_documents() {
        let svgs = [
            circle(40.0, "#ff0000"),
            square(40.0, "#ff0000"),
            triangle(40.0, "#ff0000"),
            line(40.0, "#ff0000", 45.0),
            wave(40.0, "#ff0000"),
            dot_row(40.0, "#ff0000", 4, 15.0),
            cross(40.0, "#ff0000"),
            zigzag(40.0, "#ff0000"),
            diamond(40.0, "#ff0000"),
            grid_lines(40.0, "#ff0000"),
            corner_arc(40.0, "#ff0000"),
        ];
        for svg in svgs {
            let svg = svg.expect("valid parameters");
            assert!(svg.starts_with("<svg viewBox=\"0 0 100 100\""));
            assert!(svg.ends_with("</svg>"));
            assert!(svg.contains("#ff0000"));
            assert!(!svg.contains("href"), "no external references: {svg}");
        }
    }

    #[test]
    fn test_circle_geometry() {
        let svg = circle(50.0, "#123456").expect("valid");
        assert!(svg.contains(r##"<circle cx="50" cy="50" r="25" fill="#123456"/>"##));
    }

    #[test]
    fn test_dot_row_count() {
        let svg = dot_row(40.0, "#000000", 5, 12.0).expect("valid");
        assert_eq!(svg.matches("<circle").count(), 5);
    }

    #[test]
    fn test_invalid_size_is_rejected() {
        assert!(matches!(circle(0.0, "#fff"), Err(GraphicsError::InvalidSize(_))));
        assert!(matches!(square(-5.0, "#fff"), Err(GraphicsError::InvalidSize(_))));
        assert!(matches!(wave(f64::NAN, "#fff"), Err(GraphicsError::InvalidSize(_))));
        assert!(matches!(diamond(250.0, "#fff"), Err(GraphicsError::InvalidSize(_))));
    }

    #[test]
    fn test_non_finite_rotation_is_rejected() {
        assert!(matches!(
            line(40.0, "#fff", f64::INFINITY),
            Err(GraphicsError::NonFiniteParameter { .. })
        ));
    }
}
