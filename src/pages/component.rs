//! Component detail page: product image, headline, premium features,
//! advantage bullets, the compact technical block, and the comparison tip.
//!
//! The sections are drawn top to bottom with hard capacity checks; a block
//! that no longer fits before the footer is dropped whole. Per-item rows
//! inside a block stop silently once the block's bottom edge is reached.

use crate::assets::{AssetResolver, DEFAULT_IMAGE_WIDTH};
use crate::catalog::{CatalogVariant, Category};
use crate::error::ProspektError;
use crate::layout::{self, palette, Cursor, TextStyle};
use crate::pagelist::RenderContext;
use crate::pages::draw_image_contained;
use crate::surface::{Color, PageSurface};

const MARGIN: f64 = 50.0;
const WIDTH: f64 = 495.0;
const IMAGE_HEIGHT: f64 = 200.0;
const TECH_ROW_HEIGHT: f64 = 12.0;

const FEATURE_STYLE: TextStyle = TextStyle {
    family: "Helvetica",
    size: 7.5,
    line_height: 1.2,
    weight: 400,
};

/// One row in the left technical column.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AufbauItem {
    pub name: String,
    pub value: String,
}

/// One row in the right quality column.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct QualityItem {
    pub label: String,
    pub value: String,
    pub highlight: bool,
}

/// First `\d+\s*mm` token of a spec string, e.g. "240 mm" out of
/// "240 mm Mineralwolle WLS 035".
fn mm_token(value: &str) -> Option<&str> {
    let bytes = value.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            let mut j = i;
            while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                j += 1;
            }
            if value[j..].starts_with("mm") {
                return Some(&value[start..j + 2]);
            }
        } else {
            i += 1;
        }
    }
    None
}

/// Millimeter figure of a spec string, German decimal comma included.
fn parse_mm(value: &str) -> Option<f64> {
    let bytes = value.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b',') {
                i += 1;
            }
            let end = i;
            let mut j = i;
            while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                j += 1;
            }
            if value[j..].starts_with("mm") {
                return value[start..end].replacen(',', ".", 1).parse().ok();
            }
        } else {
            i += 1;
        }
    }
    None
}

fn first_word(value: &str) -> String {
    value.split_whitespace().next().unwrap_or("").to_string()
}

/// Rows for the "Technische Daten" column. Explicit construction layers win;
/// otherwise the category decides which technical details make the cut.
pub(crate) fn extract_aufbau(variant: &CatalogVariant, category: Category) -> Vec<AufbauItem> {
    if !variant.layers.is_empty() {
        return variant
            .layers
            .iter()
            .map(|layer| AufbauItem {
                name: layer.name.clone(),
                value: layer.value.clone(),
            })
            .collect();
    }

    let mut items = Vec::new();
    let mut push = |name: &str, value: String| {
        items.push(AufbauItem {
            name: name.to_string(),
            value,
        });
    };

    match category {
        Category::Walls => {
            if let Some(v) = variant.detail("insulation") {
                push("Wärmedämmung", mm_token(v).unwrap_or(v).to_string());
            }
            if let Some(v) = variant.detail("wallThickness") {
                push("Wandstärke gesamt", v.to_string());
            }
            if let Some(v) = variant.detail("fireRating") {
                push("Brandschutz", first_word(v));
            }
            if let Some(v) = &variant.construction_type {
                push("Bauweise", v.clone());
            }
        }
        Category::Innerwalls => {
            if let Some(v) = variant.detail("wallThickness") {
                push("Wandstärke", v.to_string());
            }
            if let Some(v) = variant.detail("soundInsulation") {
                push("Schallschutz", v.to_string());
            }
            if let Some(v) = variant.detail("plasterThickness") {
                push("Beplankung", v.to_string());
            }
        }
        Category::Decken => {
            if variant.detail("construction").is_some() {
                push("Konstruktion", String::new());
            }
            if let Some(v) = variant.detail("soundInsulation") {
                push("Trittschall", v.to_string());
            }
        }
        Category::Windows => {
            if variant.detail("glazing").is_some() {
                push("Verglasung", String::new());
            }
            if variant.detail("profile").is_some() {
                push("Profil", String::new());
            }
            if variant.detail("securityFeatures").is_some() {
                push("Sicherheit", "RC2".to_string());
            }
        }
        Category::Tiles | Category::Daecher => {
            if let Some(v) = variant.detail("material") {
                push("Material", v.to_string());
            }
            if let Some(v) = variant.detail("surface") {
                push("Oberfläche", v.to_string());
            }
            if let Some(v) = variant.detail("weight") {
                push("Gewicht", v.to_string());
            }
        }
        Category::Heizung => {
            if let Some(v) = variant.detail("refrigerant") {
                push("Kältemittel", first_word(v));
            }
            if let Some(v) = variant.detail("noise") {
                push("Schallpegel", v.to_string());
            }
        }
        Category::Lueftung => {
            if let Some(v) = variant.detail("heatRecovery") {
                push("Wärmerückgewinnung", v.to_string());
            }
            if let Some(v) = variant.detail("filters") {
                push("Filter", v.to_string());
            }
            if let Some(v) = variant.detail("energySaving") {
                push("Energieeinsparung", v.to_string());
            }
        }
        Category::Treppen | Category::Haustypen => {}
    }

    // Generic fallback: the first five raw technical details
    if items.is_empty() {
        for (key, value) in variant.technical_details.iter().take(5) {
            let text = match value.as_str() {
                Some(s) => s.to_string(),
                None => value.to_string(),
            };
            let truncated: String = text.chars().take(30).collect();
            items.push(AufbauItem {
                name: key.clone(),
                value: truncated,
            });
        }
    }

    items
}

/// Rows for the "Qualitätsmerkmale" column, at most four.
pub(crate) fn extract_quality(variant: &CatalogVariant) -> Vec<QualityItem> {
    let mut items = Vec::new();
    if let Some(v) = variant.detail("uValue") {
        items.push(QualityItem {
            label: "Wärmedämmwert (U)".to_string(),
            value: v.to_string(),
            highlight: true,
        });
    }
    if let Some(v) = variant.detail("ugValue") {
        items.push(QualityItem {
            label: "U-Wert Fenster".to_string(),
            value: v.to_string(),
            highlight: true,
        });
    }
    if let Some(v) = variant.detail("fireRating") {
        let value = if v.contains("F90") {
            "min. (R)EI 90".to_string()
        } else {
            v.to_string()
        };
        items.push(QualityItem {
            label: "Feuerwiderstandsklasse".to_string(),
            value,
            highlight: false,
        });
    }
    if let Some(v) = variant.detail("soundInsulation") {
        items.push(QualityItem {
            label: format!("Qualitätsmerkmal: {}", v),
            value: String::new(),
            highlight: false,
        });
    }
    if let Some(v) = variant.detail("heatRecovery") {
        items.push(QualityItem {
            label: "Wärmerückgewinnung".to_string(),
            value: v.to_string(),
            highlight: true,
        });
    }
    if let Some(v) = variant.detail("lifespan") {
        items.push(QualityItem {
            label: "Lebensdauer".to_string(),
            value: v.to_string(),
            highlight: false,
        });
    }
    items.truncate(4);
    items
}

/// Total layer thickness in mm, skipping compressible insulation layers.
fn total_thickness(items: &[AufbauItem]) -> f64 {
    items
        .iter()
        .filter(|item| {
            let name = item.name.to_lowercase();
            !name.contains("dämmung") && !name.contains("insulation") && !name.contains("glaswolle")
        })
        .filter_map(|item| parse_mm(&item.value))
        .sum()
}

/// Short description: the first sentence, with a leading repetition of the
/// component name stripped.
fn short_description(variant: &CatalogVariant) -> String {
    if variant.description.is_empty() {
        return String::new();
    }
    let sentence = variant.description.split('.').next().unwrap_or("");
    let mut short = format!("{}.", sentence);
    if !variant.name.is_empty() {
        if let Some(rest) = strip_prefix_ignore_case(&short, &variant.name) {
            short = rest.trim_start().to_string();
        }
    }
    short
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let mut idx = 0;
    let mut chars = text.chars();
    for p in prefix.chars() {
        let t = chars.next()?;
        if !t.to_lowercase().eq(p.to_lowercase()) {
            return None;
        }
        idx += t.len_utf8();
    }
    Some(&text[idx..])
}

fn comparison_tips(notes: &str) -> Vec<String> {
    notes
        .split('\n')
        .map(|line| {
            let mut s = line.replace('❗', "");
            if let Some(start) = s.find("KRITISCHE FRAGEN") {
                if let Some(colon) = s.rfind(':') {
                    if colon >= start {
                        s.replace_range(start..=colon, "");
                    }
                }
            }
            s.trim().to_string()
        })
        .filter(|line| !line.is_empty())
        .collect()
}

pub fn render(
    page: &mut PageSurface,
    variant: &CatalogVariant,
    category: Category,
    category_name: &str,
    ctx: &mut RenderContext,
) -> Result<(), ProspektError> {
    let fonts = ctx.fonts;
    let mut cur = Cursor::new(95.0);

    // Product image, full content width. Technical drawing is the fallback.
    let candidates: Vec<_> = [&variant.file_path, &variant.technical_drawing]
        .into_iter()
        .flatten()
        .map(|rel| ctx.resolve(rel))
        .collect();
    if AssetResolver::resolve_first(&candidates).is_some() {
        match ctx.image_from_candidates(&candidates, DEFAULT_IMAGE_WIDTH) {
            Some(image) => draw_image_contained(page, image, MARGIN, cur.y, WIDTH, IMAGE_HEIGHT),
            None => layout::placeholder_tile(
                page, fonts, MARGIN, cur.y, WIDTH, IMAGE_HEIGHT, category_name,
            ),
        }
    } else {
        layout::placeholder_tile(page, fonts, MARGIN, cur.y, WIDTH, IMAGE_HEIGHT, category_name);
    }
    cur.advance(IMAGE_HEIGHT + 15.0);

    layout::text(page, MARGIN, cur.y, &variant.name, "Heading", 700, 18.0, palette::PRIMARY);
    cur.advance(24.0);

    let short = short_description(variant);
    if short.chars().count() > 1 {
        layout::text(page, MARGIN, cur.y, &short, "Helvetica", 400, 9.0, palette::TEXT_LIGHT);
        cur.advance(18.0);
    }

    // Premium features in a gold-edged box
    if !variant.premium_features.is_empty() {
        let features: Vec<&String> = variant.premium_features.iter().take(4).collect();
        let feat_col_width = (WIDTH - 24.0) / 2.0;
        let rows = features.len().div_ceil(2);

        let mut row_heights = Vec::with_capacity(rows);
        for r in 0..rows {
            let left = features[r * 2];
            let right = features.get(r * 2 + 1).map(|s| s.as_str()).unwrap_or("");
            let left_h = layout::measure_height(fonts, left, FEATURE_STYLE, feat_col_width - 25.0);
            let right_h = if right.is_empty() {
                0.0
            } else {
                layout::measure_height(fonts, right, FEATURE_STYLE, feat_col_width - 25.0)
            };
            row_heights.push(left_h.max(right_h) + 6.0);
        }
        let box_height = 26.0 + row_heights.iter().sum::<f64>() + 6.0;

        layout::draw_box(
            page, MARGIN, cur.y, WIDTH, box_height, Some(palette::GOLD_LIGHT), None, 4.0,
        );
        layout::draw_box(page, MARGIN, cur.y, 3.0, box_height, Some(palette::GOLD), None, 0.0);
        layout::text(
            page,
            MARGIN + 12.0,
            cur.y + 8.0,
            "Ihre Vorteile bei Lehner Haus:",
            "Heading",
            600,
            9.0,
            palette::PRIMARY,
        );

        let feat_top = cur.y + 26.0;
        for (idx, feature) in features.iter().enumerate() {
            let row = idx / 2;
            let col_x = if idx % 2 == 0 {
                MARGIN + 12.0
            } else {
                MARGIN + 12.0 + feat_col_width
            };
            let row_y = feat_top + row_heights[..row].iter().sum::<f64>();
            layout::draw_check(page, col_x, row_y, 7.5, palette::GOLD);
            layout::paragraph(
                page,
                fonts,
                col_x + 10.0,
                row_y,
                feat_col_width - 25.0,
                feature,
                FEATURE_STYLE,
                palette::TEXT,
            );
        }

        cur.advance(box_height + 12.0);
    }

    // Additional advantages, two bullet columns
    if !variant.advantages.is_empty() && cur.y < 620.0 {
        layout::text(page, MARGIN, cur.y, "Weitere Vorteile:", "Heading", 600, 9.0, palette::PRIMARY);
        cur.advance(16.0);

        let adv_col_width = WIDTH / 2.0;
        let items: Vec<&String> = variant.advantages.iter().take(6).collect();
        for (idx, adv) in items.iter().enumerate() {
            let col_x = MARGIN + (idx % 2) as f64 * adv_col_width;
            let row_y = cur.y + (idx / 2) as f64 * 20.0;
            layout::text(page, col_x, row_y, "•", "Helvetica", 400, 7.5, palette::GOLD);
            layout::paragraph(
                page,
                fonts,
                col_x + 8.0,
                row_y,
                adv_col_width - 15.0,
                adv,
                FEATURE_STYLE,
                palette::TEXT_LIGHT,
            );
        }
        cur.advance(items.len().div_ceil(2) as f64 * 20.0 + 8.0);
    }

    // Compact technical block
    if cur.y < 660.0 {
        let aufbau = extract_aufbau(variant, category);
        let quality = extract_quality(variant);

        if !aufbau.is_empty() || !quality.is_empty() {
            let max_rows = (aufbau.len() + 1).max(quality.len() + 1);
            let thickness = total_thickness(&aufbau);
            let extra_rows = if thickness > 0.0 { 1 } else { 0 };
            let section_height = (max_rows + extra_rows) as f64 * TECH_ROW_HEIGHT + 20.0;

            // The block is all-or-nothing
            if cur.fits(section_height) {
                layout::draw_box(
                    page,
                    MARGIN,
                    cur.y,
                    WIDTH,
                    section_height,
                    Some(palette::GRAY_LIGHT),
                    None,
                    3.0,
                );

                let tech_y = cur.y + 8.0;
                let left_x = MARGIN + 10.0;
                let col_width = (WIDTH - 30.0) / 2.0;
                let right_x = left_x + col_width + 10.0;
                let row_limit = cur.y + section_height - 14.0;

                layout::text(
                    page, left_x, tech_y, "Technische Daten", "Heading", 600, 8.0, palette::PRIMARY,
                );
                let mut left_y = tech_y + TECH_ROW_HEIGHT + 2.0;
                for item in &aufbau {
                    if left_y > row_limit {
                        break;
                    }
                    layout::text(page, left_x, left_y, &item.name, "Helvetica", 400, 7.0, palette::TEXT);
                    if !item.value.is_empty() {
                        layout::text_right(
                            page,
                            fonts,
                            left_x + col_width - 55.0,
                            left_y,
                            55.0,
                            &item.value,
                            "Helvetica",
                            700,
                            7.0,
                            palette::PRIMARY,
                        );
                    }
                    left_y += TECH_ROW_HEIGHT;
                }

                if thickness > 0.0 && left_y <= row_limit {
                    left_y += 2.0;
                    layout::draw_rule(
                        page, left_x, left_x + col_width - 5.0, left_y, palette::GOLD, 0.5,
                    );
                    left_y += 4.0;
                    let total = format!("{:.1} mm", thickness).replace('.', ",");
                    layout::text(
                        page, left_x, left_y, "Gesamtstärke", "Helvetica", 700, 7.0, palette::PRIMARY,
                    );
                    layout::text_right(
                        page,
                        fonts,
                        left_x + col_width - 55.0,
                        left_y,
                        55.0,
                        &total,
                        "Helvetica",
                        700,
                        7.0,
                        palette::PRIMARY,
                    );
                }

                if !quality.is_empty() {
                    layout::text(
                        page,
                        right_x,
                        tech_y,
                        "Qualitätsmerkmale",
                        "Heading",
                        600,
                        8.0,
                        palette::PRIMARY,
                    );
                    let mut right_y = tech_y + TECH_ROW_HEIGHT + 2.0;
                    for item in &quality {
                        if right_y > row_limit {
                            break;
                        }
                        layout::text(
                            page, right_x, right_y, &item.label, "Helvetica", 400, 7.0, palette::TEXT,
                        );
                        let (weight, color) = if item.highlight {
                            (700, palette::GOLD)
                        } else {
                            (400, palette::PRIMARY)
                        };
                        layout::text_right(
                            page,
                            fonts,
                            right_x + col_width - 80.0,
                            right_y,
                            80.0,
                            &item.value,
                            "Helvetica",
                            weight,
                            7.0,
                            color,
                        );
                        right_y += TECH_ROW_HEIGHT;
                    }
                }

                cur.advance(section_height + 10.0);
            }
        }
    }

    // Comparison tip box, clamped to the remaining space
    if let Some(notes) = &variant.comparison_notes {
        if cur.y < 700.0 {
            let box_height = (cur.limit - cur.y).min(130.0);
            layout::draw_box(
                page,
                MARGIN,
                cur.y,
                WIDTH,
                box_height,
                Some(Color::rgb(0xff, 0xfe, 0xf5)),
                Some((palette::GOLD, 1.5)),
                4.0,
            );
            layout::text(
                page,
                MARGIN + 10.0,
                cur.y + 10.0,
                "Tipp für den Anbietervergleich:",
                "Helvetica",
                700,
                8.0,
                palette::GOLD,
            );

            let mut tip_y = cur.y + 26.0;
            let max_tip_y = cur.y + box_height - 12.0;
            let tip_width = WIDTH - 20.0;
            for tip in comparison_tips(notes) {
                // Remaining tips are dropped once the box is full
                if tip_y + 10.0 > max_tip_y {
                    break;
                }
                let height = layout::paragraph(
                    page,
                    fonts,
                    MARGIN + 10.0,
                    tip_y,
                    tip_width,
                    &tip,
                    FEATURE_STYLE,
                    palette::TEXT,
                );
                tip_y += height + 6.0;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::font::FontContext;
    use crate::layout::{PAGE_HEIGHT, PAGE_WIDTH};

    fn wall_variant() -> CatalogVariant {
        let catalog = Catalog::from_json(
            r#"{
                "walls": [{
                    "id": "climativ",
                    "name": "Climativ Wandsystem",
                    "description": "Climativ Wandsystem vereint Dämmung und Stabilität. Zweiter Satz.",
                    "constructionType": "Holztafelbau",
                    "technicalDetails": {
                        "uValue": "0,149 W/(m²K)",
                        "insulation": "240 mm Mineralwolle WLS 035",
                        "wallThickness": "334 mm",
                        "fireRating": "F90 von außen"
                    },
                    "premiumFeatures": ["Doppelte Beplankung beidseitig", "ESB statt OSB"],
                    "advantages": ["Diffusionsoffen", "Hervorragender Schallschutz"],
                    "comparisonNotes": "❗KRITISCHE FRAGEN an andere Anbieter:\nWird beidseitig doppelt beplankt?"
                }]
            }"#,
        )
        .unwrap();
        catalog.walls[0].clone()
    }

    fn render_variant(variant: &CatalogVariant, category: Category, name: &str) -> PageSurface {
        let catalog = Catalog::default();
        let fonts = FontContext::new();
        let mut assets = crate::assets::AssetResolver::new();
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = RenderContext {
            catalog: &catalog,
            fonts: &fonts,
            assets: &mut assets,
            asset_root: dir.path(),
        };
        let mut page = PageSurface::new(PAGE_WIDTH, PAGE_HEIGHT);
        render(&mut page, variant, category, name, &mut ctx).unwrap();
        page
    }

    #[test]
    fn test_full_wall_page() {
        let page = render_variant(&wall_variant(), Category::Walls, "Außenwandsystem");
        assert!(page.contains_text("Climativ Wandsystem"));
        // Description leads with the component name, so it is stripped
        assert!(page.contains_text("vereint Dämmung und Stabilität."));
        assert!(page.contains_text("Ihre Vorteile bei Lehner Haus:"));
        assert!(page.contains_text("Doppelte Beplankung beidseitig"));
        assert!(page.contains_text("Weitere Vorteile:"));
        assert!(page.contains_text("Technische Daten"));
        assert!(page.contains_text("Qualitätsmerkmale"));
        assert!(page.contains_text("Tipp für den Anbietervergleich:"));
        // The tip marker prefix is stripped out
        assert!(page.contains_text("Wird beidseitig doppelt beplankt?"));
        assert!(!page.text_content().iter().any(|t| t.contains("KRITISCHE")));
        // No image on disk: the category placeholder is drawn
        assert!(page.contains_text("Bild"));
    }

    #[test]
    fn test_comparison_tips_stop_at_box_capacity() {
        let notes: String = (1..=20)
            .map(|i| format!("Frage {}?", i))
            .collect::<Vec<_>>()
            .join("\n");
        let variant = CatalogVariant {
            id: "x".to_string(),
            name: "Testsystem".to_string(),
            comparison_notes: Some(notes),
            ..Default::default()
        };
        let page = render_variant(&variant, Category::Walls, "Außenwandsystem");

        let drawn: Vec<String> = page
            .text_content()
            .iter()
            .filter(|t| t.starts_with("Frage"))
            .map(|t| t.to_string())
            .collect();
        assert!(!drawn.is_empty());
        assert!(drawn.len() < 20, "trailing tips must be dropped");
        // Exactly the leading tips survive, in source order
        for (i, tip) in drawn.iter().enumerate() {
            assert_eq!(tip, &format!("Frage {}?", i + 1));
        }
    }

    #[test]
    fn test_aufbau_wall_branch() {
        let items = extract_aufbau(&wall_variant(), Category::Walls);
        assert_eq!(items[0].name, "Wärmedämmung");
        assert_eq!(items[0].value, "240 mm");
        assert_eq!(items[1].name, "Wandstärke gesamt");
        assert_eq!(items[2].name, "Brandschutz");
        assert_eq!(items[2].value, "F90");
        assert_eq!(items[3].name, "Bauweise");
        assert_eq!(items[3].value, "Holztafelbau");
    }

    #[test]
    fn test_aufbau_prefers_explicit_layers() {
        let mut variant = wall_variant();
        variant.layers = vec![crate::catalog::Layer {
            name: "Gipsfaserplatte".to_string(),
            value: "12,5 mm".to_string(),
            note: String::new(),
        }];
        let items = extract_aufbau(&variant, Category::Walls);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Gipsfaserplatte");
    }

    #[test]
    fn test_aufbau_fallback_truncates() {
        let variant = CatalogVariant {
            id: "x".to_string(),
            technical_details: serde_json::from_str(
                r#"{ "finish": "eine sehr lange Beschreibung der Oberflächenbehandlung" }"#,
            )
            .unwrap(),
            ..Default::default()
        };
        let items = extract_aufbau(&variant, Category::Treppen);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].value.chars().count(), 30);
    }

    #[test]
    fn test_quality_items_capped_at_four() {
        let variant = CatalogVariant {
            id: "x".to_string(),
            technical_details: serde_json::from_str(
                r#"{
                    "uValue": "0,149",
                    "ugValue": "0,5",
                    "fireRating": "F90 von außen",
                    "soundInsulation": "44 dB",
                    "heatRecovery": "bis zu 90%",
                    "lifespan": "50 Jahre"
                }"#,
            )
            .unwrap(),
            ..Default::default()
        };
        let items = extract_quality(&variant);
        assert_eq!(items.len(), 4);
        assert_eq!(items[2].value, "min. (R)EI 90");
        assert!(items[0].highlight);
        assert!(!items[2].highlight);
    }

    #[test]
    fn test_total_thickness_skips_insulation() {
        let items = vec![
            AufbauItem { name: "Gipsplatte".to_string(), value: "12,5 mm".to_string() },
            AufbauItem { name: "Wärmedämmung".to_string(), value: "240 mm".to_string() },
            AufbauItem { name: "Holzständer".to_string(), value: "60 mm".to_string() },
        ];
        assert!((total_thickness(&items) - 72.5).abs() < 1e-9);
    }

    #[test]
    fn test_mm_parsing() {
        assert_eq!(mm_token("240 mm Mineralwolle"), Some("240 mm"));
        assert_eq!(mm_token("Mineralwolle"), None);
        assert_eq!(parse_mm("12,5 mm"), Some(12.5));
        assert_eq!(parse_mm("WLS 035"), None);
    }
}
