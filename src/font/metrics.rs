//! Advance widths for the standard PDF fonts, from the Adobe AFM files.
//!
//! Widths are in 1/1000 em. Only WinAnsi-reachable characters matter here;
//! anything unknown falls back to a representative default so measurement
//! stays close even for exotic input.

use super::StandardFont;

/// Metric access for one standard font face.
#[derive(Debug, Clone, Copy)]
pub struct StandardFontMetrics {
    widths: fn(char) -> u16,
    /// Ascender in 1/1000 em.
    pub ascender: i16,
    /// Descender in 1/1000 em (negative).
    pub descender: i16,
}

impl StandardFontMetrics {
    /// Advance width of a character in points.
    pub fn char_width(&self, ch: char, font_size: f64) -> f64 {
        (self.widths)(ch) as f64 / 1000.0 * font_size
    }

    /// Width of a string in points.
    pub fn measure_string(&self, text: &str, font_size: f64, letter_spacing: f64) -> f64 {
        let mut width = 0.0;
        for ch in text.chars() {
            width += self.char_width(ch, font_size) + letter_spacing;
        }
        width
    }
}

impl StandardFont {
    pub fn metrics(&self) -> StandardFontMetrics {
        match self {
            StandardFont::Helvetica | StandardFont::HelveticaOblique => StandardFontMetrics {
                widths: helvetica_width,
                ascender: 718,
                descender: -207,
            },
            StandardFont::HelveticaBold | StandardFont::HelveticaBoldOblique => {
                StandardFontMetrics {
                    widths: helvetica_bold_width,
                    ascender: 718,
                    descender: -207,
                }
            }
            StandardFont::Courier
            | StandardFont::CourierBold
            | StandardFont::CourierOblique
            | StandardFont::CourierBoldOblique => StandardFontMetrics {
                widths: |_| 600,
                ascender: 629,
                descender: -157,
            },
        }
    }
}

fn helvetica_width(ch: char) -> u16 {
    match ch {
        '\'' => 191,
        'i' | 'j' | 'l' | '\u{2018}' | '\u{2019}' => 222,
        '|' => 260,
        ' ' | '!' | ',' | '.' | '/' | ':' | ';' | '\\' | '[' | ']' | 'f' | 't' | '\u{00B7}' => 278,
        '-' | '(' | ')' | '`' | 'r' | '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{00B2}'
        | '\u{00B3}' => 333,
        '{' | '}' => 334,
        '\u{2022}' => 350,
        '"' => 355,
        '*' => 389,
        '\u{00B0}' => 400,
        '^' => 469,
        'c' | 'k' | 's' | 'v' | 'x' | 'y' | 'z' | 'J' => 500,
        '#' | '$' | '0'..='9' | '?' | '_' | 'a' | 'b' | 'd' | 'e' | 'g' | 'h' | 'n' | 'o' | 'p'
        | 'q' | 'u' | 'L' | '\u{00E4}' | '\u{00F6}' | '\u{00FC}' | '\u{00A7}' | '\u{00AB}'
        | '\u{00BB}' | '\u{20AC}' | '\u{2013}' => 556,
        '+' | '<' | '=' | '>' | '~' | '\u{00D7}' => 584,
        'F' | 'T' | 'Z' | '\u{00DF}' => 611,
        '&' | 'A' | 'B' | 'E' | 'K' | 'P' | 'S' | 'V' | 'X' | 'Y' | '\u{00C4}' => 667,
        'C' | 'D' | 'H' | 'N' | 'R' | 'U' | 'w' | '\u{00DC}' => 722,
        'G' | 'O' | 'Q' | '\u{00D6}' => 778,
        'M' | 'm' => 833,
        '%' => 889,
        'W' => 944,
        '\u{2014}' => 1000,
        '@' => 1015,
        _ => 556,
    }
}

fn helvetica_bold_width(ch: char) -> u16 {
    match ch {
        '\'' => 238,
        ' ' | ',' | '.' | '/' | '\\' | 'i' | 'j' | 'l' | '\u{2018}' | '\u{2019}' => 278,
        '|' => 280,
        '!' | '-' | '(' | ')' | ':' | ';' | '`' | 't' | '[' | ']' | '\u{201C}' | '\u{201D}'
        | '\u{201E}' | '\u{00B2}' | '\u{00B3}' => 333,
        '\u{2022}' => 350,
        '*' | 'r' | '{' | '}' => 389,
        '\u{00B0}' => 400,
        '"' => 474,
        'z' => 500,
        '#' | '$' | '0'..='9' | '_' | 'a' | 'c' | 'e' | 'k' | 's' | 'v' | 'x' | 'y' | 'J'
        | '\u{00E4}' | '\u{00A7}' | '\u{00AB}' | '\u{00BB}' | '\u{20AC}' | '\u{2013}' => 556,
        '+' | '<' | '=' | '>' | '~' | '^' | '\u{00D7}' => 584,
        '?' | 'b' | 'd' | 'g' | 'h' | 'n' | 'o' | 'p' | 'q' | 'u' | 'F' | 'L' | 'T' | 'Z'
        | '\u{00F6}' | '\u{00FC}' | '\u{00DF}' => 611,
        'E' | 'V' | 'X' | 'Y' => 667,
        '&' | 'A' | 'B' | 'C' | 'D' | 'H' | 'K' | 'N' | 'R' | 'U' | '\u{00C4}' | '\u{00DC}' => 722,
        'G' | 'O' | 'Q' | 'w' | '\u{00D6}' => 778,
        'M' => 833,
        'm' | '%' => 889,
        'W' => 944,
        '@' => 975,
        '\u{2014}' => 1000,
        _ => 611,
    }
}
