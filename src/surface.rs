//! The draw-op surface a page renderer paints onto.
//!
//! Renderers never talk to the PDF writer directly. They append `DrawOp`s
//! to a `PageSurface` in top-down page coordinates (origin top-left, y grows
//! downward, 1 unit = 1 pt); the writer flips into PDF space when it
//! serializes. This keeps every renderer a pure function from data to ops,
//! which is what the layout tests assert against.

use crate::raster::LoadedImage;

/// An sRGB color. Components are 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Components scaled to 0.0..=1.0 for the PDF `rg`/`RG` operators.
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        )
    }
}

/// One drawing instruction, in top-down page coordinates.
#[derive(Debug, Clone)]
pub enum DrawOp {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Option<Color>,
        stroke: Option<(Color, f64)>,
        corner_radius: f64,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
        width: f64,
    },
    Text {
        /// Left edge of the first glyph.
        x: f64,
        /// Top of the line box; the writer subtracts the ascender to get
        /// the baseline.
        y: f64,
        text: String,
        family: &'static str,
        weight: u32,
        italic: bool,
        size: f64,
        color: Color,
    },
    Image {
        image: LoadedImage,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
}

/// One page worth of draw ops plus its dimensions in points.
#[derive(Debug, Clone)]
pub struct PageSurface {
    pub width: f64,
    pub height: f64,
    pub ops: Vec<DrawOp>,
}

impl PageSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    /// All text content on the page, in paint order. Test helper.
    pub fn text_content(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Whether any text op on the page contains `needle`.
    pub fn contains_text(&self, needle: &str) -> bool {
        self.text_content().iter().any(|t| t.contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_to_unit() {
        let (r, g, b) = Color::rgb(255, 0, 51).to_unit();
        assert!((r - 1.0).abs() < 1e-9);
        assert!(g.abs() < 1e-9);
        assert!((b - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_text_content_and_contains() {
        let mut page = PageSurface::new(595.0, 842.0);
        page.push(DrawOp::Line {
            x1: 0.0,
            y1: 0.0,
            x2: 10.0,
            y2: 0.0,
            color: Color::rgb(0, 0, 0),
            width: 1.0,
        });
        page.push(DrawOp::Text {
            x: 50.0,
            y: 100.0,
            text: "Leistungsbeschreibung".to_string(),
            family: "Helvetica",
            weight: 700,
            italic: false,
            size: 20.0,
            color: Color::rgb(6, 64, 43),
        });

        assert_eq!(page.text_content(), vec!["Leistungsbeschreibung"]);
        assert!(page.contains_text("beschreibung"));
        assert!(!page.contains_text("Seite"));
    }
}
