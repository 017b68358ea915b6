//! Layout primitives: the brochure's fixed A4 geometry, the corporate
//! palette and type scale, greedy word wrapping with real glyph metrics,
//! and the header/footer chrome shared by every content page.
//!
//! All coordinates are top-down page points (see [`crate::surface`]).
//! Vertical flow goes through [`Cursor`], which tracks the current y and
//! the hard bottom limit; blocks that would cross the limit are skipped
//! entirely by their renderers rather than clipped mid-block.

use crate::font::FontContext;
use crate::surface::{Color, DrawOp, PageSurface};

pub const PAGE_WIDTH: f64 = 595.0;
pub const PAGE_HEIGHT: f64 = 842.0;

pub const MARGIN_LEFT: f64 = 60.0;
pub const MARGIN_RIGHT: f64 = 60.0;
pub const CONTENT_WIDTH: f64 = PAGE_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;

/// First usable y below the page header.
pub const CONTENT_TOP: f64 = 95.0;
/// Content must stay above this line; the footer starts at 800.
pub const CONTENT_BOTTOM: f64 = 775.0;

pub mod palette {
    use crate::surface::Color;

    pub const PRIMARY: Color = Color::rgb(0x06, 0x40, 0x2b);
    pub const PRIMARY_DARK: Color = Color::rgb(0x04, 0x2e, 0x1f);
    pub const PRIMARY_LIGHT: Color = Color::rgb(0x26, 0x7e, 0x61);
    pub const SECONDARY: Color = Color::rgb(0xb1, 0xa6, 0x99);
    pub const SECONDARY_LIGHT: Color = Color::rgb(0xf5, 0xf3, 0xef);
    pub const GOLD: Color = Color::rgb(0xd4, 0xaf, 0x37);
    pub const GOLD_DARK: Color = Color::rgb(0xb8, 0x92, 0x2e);
    pub const GOLD_LIGHT: Color = Color::rgb(0xfa, 0xf8, 0xf0);
    pub const TEXT: Color = Color::rgb(0x1d, 0x1d, 0x1b);
    pub const TEXT_LIGHT: Color = Color::rgb(0x33, 0x33, 0x33);
    pub const TEXT_MUTED: Color = Color::rgb(0x66, 0x66, 0x66);
    pub const GRAY: Color = Color::rgb(0x99, 0x99, 0x99);
    pub const GRAY_LIGHT: Color = Color::rgb(0xf5, 0xf5, 0xf5);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const ERROR: Color = Color::rgb(0xcc, 0x00, 0x00);
    pub const ERROR_LIGHT: Color = Color::rgb(0xff, 0xf5, 0xf5);
}

/// One slot in the type scale.
#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    pub family: &'static str,
    pub size: f64,
    pub line_height: f64,
    pub weight: u32,
}

impl TextStyle {
    /// Height of one line box in points.
    pub fn line(&self) -> f64 {
        self.size * self.line_height
    }
}

pub mod type_scale {
    use super::TextStyle;

    pub const HERO: TextStyle = TextStyle { family: "Heading", size: 48.0, line_height: 1.1, weight: 700 };
    pub const H1: TextStyle = TextStyle { family: "Heading", size: 20.0, line_height: 1.2, weight: 700 };
    pub const H2: TextStyle = TextStyle { family: "Helvetica", size: 14.0, line_height: 1.3, weight: 700 };
    pub const H3: TextStyle = TextStyle { family: "Helvetica", size: 12.0, line_height: 1.4, weight: 600 };
    pub const BODY: TextStyle = TextStyle { family: "Helvetica", size: 10.0, line_height: 1.5, weight: 400 };
    pub const SMALL: TextStyle = TextStyle { family: "Helvetica", size: 8.0, line_height: 1.4, weight: 400 };
    pub const CAPTION: TextStyle = TextStyle { family: "Helvetica", size: 7.0, line_height: 1.3, weight: 400 };
}

/// Tracks the vertical write position on one page.
#[derive(Debug, Clone, Copy)]
pub struct Cursor {
    pub y: f64,
    pub limit: f64,
}

impl Cursor {
    pub fn new(y: f64) -> Self {
        Self { y, limit: CONTENT_BOTTOM }
    }

    pub fn advance(&mut self, dy: f64) {
        self.y += dy;
    }

    /// Whether a block of `height` points fits above the limit.
    pub fn fits(&self, height: f64) -> bool {
        self.y + height <= self.limit
    }
}

/// Greedy word wrap against real glyph metrics. A word wider than the
/// column gets its own line and overflows horizontally, matching how the
/// print layout treats pathological input.
pub fn wrap_text(
    fonts: &FontContext,
    text: &str,
    family: &str,
    weight: u32,
    size: f64,
    max_width: f64,
) -> Vec<String> {
    let mut lines = Vec::new();
    for raw_line in text.split('\n') {
        let mut current = String::new();
        for word in raw_line.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };
            if fonts.measure_string(&candidate, family, weight, false, size) <= max_width
                || current.is_empty()
            {
                current = candidate;
            } else {
                lines.push(current);
                current = word.to_string();
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Height a wrapped paragraph will occupy, without drawing it.
pub fn measure_height(fonts: &FontContext, text: &str, style: TextStyle, width: f64) -> f64 {
    let lines = wrap_text(fonts, text, style.family, style.weight, style.size, width);
    lines.len() as f64 * style.line()
}

/// Draw one line of text at (x, y-top). No wrapping.
#[allow(clippy::too_many_arguments)]
pub fn text(
    page: &mut PageSurface,
    x: f64,
    y: f64,
    content: &str,
    family: &'static str,
    weight: u32,
    size: f64,
    color: Color,
) {
    page.push(DrawOp::Text {
        x,
        y,
        text: content.to_string(),
        family,
        weight,
        italic: false,
        size,
        color,
    });
}

/// Draw one line centered within [x, x + width].
#[allow(clippy::too_many_arguments)]
pub fn text_centered(
    page: &mut PageSurface,
    fonts: &FontContext,
    x: f64,
    y: f64,
    width: f64,
    content: &str,
    family: &'static str,
    weight: u32,
    size: f64,
    color: Color,
) {
    let w = fonts.measure_string(content, family, weight, false, size);
    text(page, x + (width - w) / 2.0, y, content, family, weight, size, color);
}

/// Draw one line right-aligned to x + width.
#[allow(clippy::too_many_arguments)]
pub fn text_right(
    page: &mut PageSurface,
    fonts: &FontContext,
    x: f64,
    y: f64,
    width: f64,
    content: &str,
    family: &'static str,
    weight: u32,
    size: f64,
    color: Color,
) {
    let w = fonts.measure_string(content, family, weight, false, size);
    text(page, x + width - w, y, content, family, weight, size, color);
}

/// Wrap and draw a paragraph. Returns the height consumed.
pub fn paragraph(
    page: &mut PageSurface,
    fonts: &FontContext,
    x: f64,
    y: f64,
    width: f64,
    content: &str,
    style: TextStyle,
    color: Color,
) -> f64 {
    let lines = wrap_text(fonts, content, style.family, style.weight, style.size, width);
    let mut line_y = y;
    let count = lines.len();
    for line in lines {
        text(page, x, line_y, &line, style.family, style.weight, style.size, color);
        line_y += style.line();
    }
    count as f64 * style.line()
}

/// Wrap and draw a paragraph with every line centered in the column.
pub fn paragraph_centered(
    page: &mut PageSurface,
    fonts: &FontContext,
    x: f64,
    y: f64,
    width: f64,
    content: &str,
    style: TextStyle,
    color: Color,
) -> f64 {
    let lines = wrap_text(fonts, content, style.family, style.weight, style.size, width);
    let mut line_y = y;
    let count = lines.len();
    for line in lines {
        text_centered(
            page, fonts, x, line_y, width, &line, style.family, style.weight, style.size, color,
        );
        line_y += style.line();
    }
    count as f64 * style.line()
}

/// Filled and/or stroked rectangle, optionally rounded.
#[allow(clippy::too_many_arguments)]
pub fn draw_box(
    page: &mut PageSurface,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    fill: Option<Color>,
    stroke: Option<(Color, f64)>,
    corner_radius: f64,
) {
    page.push(DrawOp::Rect {
        x,
        y,
        width,
        height,
        fill,
        stroke,
        corner_radius,
    });
}

/// Horizontal rule.
pub fn draw_rule(page: &mut PageSurface, x1: f64, x2: f64, y: f64, color: Color, width: f64) {
    page.push(DrawOp::Line {
        x1,
        y1: y,
        x2,
        y2: y,
        color,
        width,
    });
}

/// Two stroked segments forming a checkmark inside a `size`-wide square
/// whose top-left corner is (x, y). WinAnsi has no tick glyph.
pub fn draw_check(page: &mut PageSurface, x: f64, y: f64, size: f64, color: Color) {
    let stroke = (size / 6.0).max(0.8);
    page.push(DrawOp::Line {
        x1: x + size * 0.15,
        y1: y + size * 0.55,
        x2: x + size * 0.40,
        y2: y + size * 0.80,
        color,
        width: stroke,
    });
    page.push(DrawOp::Line {
        x1: x + size * 0.40,
        y1: y + size * 0.80,
        x2: x + size * 0.85,
        y2: y + size * 0.25,
        color,
        width: stroke,
    });
}

/// Page header: gold tab, section title, hairline rule.
pub fn draw_header(page: &mut PageSurface, title: &str) {
    draw_box(page, 50.0, 35.0, 4.0, 30.0, Some(palette::GOLD), None, 0.0);
    text(page, 62.0, 40.0, title, "Helvetica", 700, 20.0, palette::PRIMARY);
    draw_rule(page, 50.0, 545.0, 75.0, palette::SECONDARY, 1.0);
}

/// Page footer: hairline, imprint line, page counter.
pub fn draw_footer(page: &mut PageSurface, fonts: &FontContext, page_no: u32) {
    draw_rule(page, 50.0, 545.0, 800.0, palette::GOLD, 0.5);
    text(page, 50.0, 810.0, "www.lehner-haus.de", "Helvetica", 400, 7.0, palette::TEXT_MUTED);
    text_centered(
        page, fonts, 50.0, 810.0, 495.0, "Lehner Haus GmbH", "Helvetica", 400, 7.0,
        palette::TEXT_MUTED,
    );
    text_right(
        page,
        fonts,
        495.0,
        810.0,
        50.0,
        &format!("Seite {}", page_no),
        "Helvetica",
        700,
        8.0,
        palette::PRIMARY,
    );
}

/// Colored tile standing in for a missing product photo.
pub fn placeholder_tile(
    page: &mut PageSurface,
    fonts: &FontContext,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    category_title: &str,
) {
    let fill = match category_title {
        "Außenwandsystem" => Color::rgb(0x2e, 0xcc, 0x71),
        "Innenwandsystem" | "Fenstersystem" => Color::rgb(0x34, 0x98, 0xdb),
        "Ihr Haustyp" | "Lüftungssystem" => Color::rgb(0x9b, 0x59, 0xb6),
        "Heizungssystem" => Color::rgb(0xe7, 0x4c, 0x3c),
        _ => Color::rgb(0x95, 0xa5, 0xa6),
    };
    draw_box(page, x, y, width, height, Some(fill), Some((palette::WHITE, 2.0)), 0.0);
    text_centered(
        page, fonts, x, y + height / 2.0 - 10.0, width, "Bild", "Helvetica", 700, 10.0,
        palette::WHITE,
    );
    text_centered(
        page, fonts, x, y + height / 2.0 + 5.0, width, "folgt", "Helvetica", 700, 10.0,
        palette::WHITE,
    );
}

/// Marker drawn in front of a list item.
#[derive(Debug, Clone, Copy)]
pub enum Marker {
    Check(Color),
    Bullet(Color),
}

/// Two-column list, column-major: the first ceil(n/2) items fill the left
/// column. Fixed row height; returns the height consumed.
#[allow(clippy::too_many_arguments)]
pub fn two_column_list(
    page: &mut PageSurface,
    items: &[String],
    x: f64,
    y: f64,
    total_width: f64,
    row_height: f64,
    size: f64,
    color: Color,
    marker: Marker,
) -> f64 {
    let per_column = items.len().div_ceil(2);
    let col_width = total_width / 2.0;
    for (idx, item) in items.iter().enumerate() {
        let (col, row) = if idx < per_column {
            (0, idx)
        } else {
            (1, idx - per_column)
        };
        let ix = x + col as f64 * col_width;
        let iy = y + row as f64 * row_height;
        match marker {
            Marker::Check(c) => draw_check(page, ix, iy, size, c),
            Marker::Bullet(c) => text(page, ix, iy, "•", "Helvetica", 400, size, c),
        }
        text(page, ix + size + 4.0, iy, item, "Helvetica", 400, size, color);
    }
    per_column as f64 * row_height
}

/// Muted label on the left, bold primary value at a fixed offset.
pub fn labeled_row(
    page: &mut PageSurface,
    x: f64,
    y: f64,
    value_offset: f64,
    label: &str,
    value: &str,
    size: f64,
) {
    text(page, x, y, label, "Helvetica", 400, size, palette::TEXT_MUTED);
    text(page, x + value_offset, y, value, "Helvetica", 700, size, palette::PRIMARY);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_respects_width() {
        let fonts = FontContext::new();
        let lines = wrap_text(
            &fonts,
            "Durch unsere freie Raumplanung können wir all Ihre Wünsche umsetzen",
            "Helvetica",
            400,
            10.0,
            150.0,
        );
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(fonts.measure_string(line, "Helvetica", 400, false, 10.0) <= 150.0);
        }
    }

    #[test]
    fn test_wrap_keeps_oversized_word_on_own_line() {
        let fonts = FontContext::new();
        let lines = wrap_text(
            &fonts,
            "ok Donaudampfschifffahrtsgesellschaftskapitän ok",
            "Helvetica",
            400,
            10.0,
            60.0,
        );
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "Donaudampfschifffahrtsgesellschaftskapitän");
    }

    #[test]
    fn test_wrap_honors_explicit_newlines() {
        let fonts = FontContext::new();
        let lines = wrap_text(&fonts, "eins\nzwei", "Helvetica", 400, 10.0, 500.0);
        assert_eq!(lines, vec!["eins".to_string(), "zwei".to_string()]);
    }

    #[test]
    fn test_measure_matches_paragraph() {
        let fonts = FontContext::new();
        let mut page = PageSurface::new(PAGE_WIDTH, PAGE_HEIGHT);
        let style = type_scale::BODY;
        let content = "Festpreis-Garantie von Lehner Haus: Ihr Preis steht von Anfang an fest.";
        let expected = measure_height(&fonts, content, style, 200.0);
        let drawn = paragraph(&mut page, &fonts, 60.0, 100.0, 200.0, content, style, palette::TEXT);
        assert!((expected - drawn).abs() < 1e-9);
    }

    #[test]
    fn test_cursor_fits() {
        let mut cursor = Cursor::new(CONTENT_TOP);
        assert!(cursor.fits(600.0));
        cursor.advance(650.0);
        assert!(!cursor.fits(100.0));
        assert!(cursor.fits(20.0));
    }

    #[test]
    fn test_chrome_text() {
        let fonts = FontContext::new();
        let mut page = PageSurface::new(PAGE_WIDTH, PAGE_HEIGHT);
        draw_header(&mut page, "Kontakt");
        draw_footer(&mut page, &fonts, 7);
        assert!(page.contains_text("Kontakt"));
        assert!(page.contains_text("Seite 7"));
        assert!(page.contains_text("www.lehner-haus.de"));
    }

    #[test]
    fn test_two_column_list_is_column_major() {
        let mut page = PageSurface::new(PAGE_WIDTH, PAGE_HEIGHT);
        let items: Vec<String> = ["a", "b", "c", "d", "e"].iter().map(|s| s.to_string()).collect();
        let height = two_column_list(
            &mut page,
            &items,
            60.0,
            100.0,
            400.0,
            13.0,
            8.0,
            palette::TEXT,
            Marker::Bullet(palette::GOLD),
        );
        // 5 items split 3 + 2
        assert!((height - 39.0).abs() < 1e-9);
        assert_eq!(page.text_content().len(), 10); // 5 bullets + 5 items
    }
}
