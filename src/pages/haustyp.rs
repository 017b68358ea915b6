//! House type page: hero shot, two example images, advantages, and the
//! free-floor-plan badge.

use crate::assets::DEFAULT_IMAGE_WIDTH;
use crate::catalog::CatalogVariant;
use crate::error::ProspektError;
use crate::layout::{self, palette, type_scale, Cursor};
use crate::pagelist::RenderContext;
use crate::pages::draw_image_contained;
use crate::surface::PageSurface;

const MARGIN: f64 = 50.0;
const WIDTH: f64 = 495.0;
const HERO_HEIGHT: f64 = 220.0;
const SMALL_HEIGHT: f64 = 130.0;

pub fn render(
    page: &mut PageSurface,
    variant: &CatalogVariant,
    ctx: &mut RenderContext,
) -> Result<(), ProspektError> {
    let fonts = ctx.fonts;

    // Hero image: 1.png inside the variant's image directory
    let hero = variant
        .file_path
        .as_deref()
        .and_then(|dir| ctx.image(&format!("{}/1.png", dir.trim_end_matches('/')), 1200));
    match hero {
        Some(image) => draw_image_contained(page, image, MARGIN, 95.0, WIDTH, HERO_HEIGHT),
        None => layout::placeholder_tile(page, fonts, MARGIN, 95.0, WIDTH, HERO_HEIGHT, "Ihr Haustyp"),
    }

    let mut cur = Cursor::new(95.0 + HERO_HEIGHT + 15.0);

    layout::text(page, MARGIN, cur.y, &variant.name, "Heading", 700, 22.0, palette::PRIMARY);
    cur.advance(30.0);

    let desc = variant
        .details
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or(&variant.description);
    if !desc.is_empty() {
        let height = layout::paragraph(
            page, fonts, MARGIN, cur.y, WIDTH, desc, type_scale::BODY, palette::TEXT,
        );
        cur.advance(height + 15.0);
    }

    // Two example shots side by side: 2.png and 3.png
    if cur.y < 550.0 {
        if let Some(dir) = variant.file_path.as_deref() {
            let small_width = ((WIDTH - 15.0) / 2.0).floor();
            for i in 0..2 {
                let x = MARGIN + i as f64 * (small_width + 15.0);
                let source = format!("{}/{}.png", dir.trim_end_matches('/'), i + 2);
                match ctx.image(&source, DEFAULT_IMAGE_WIDTH) {
                    Some(image) => {
                        draw_image_contained(page, image, x, cur.y, small_width, SMALL_HEIGHT)
                    }
                    None => layout::placeholder_tile(
                        page,
                        fonts,
                        x,
                        cur.y,
                        small_width,
                        SMALL_HEIGHT,
                        "Haustyp",
                    ),
                }
            }
            layout::text_centered(
                page,
                fonts,
                MARGIN,
                cur.y + SMALL_HEIGHT + 2.0,
                WIDTH,
                "Beispielbilder",
                "Helvetica",
                400,
                7.0,
                palette::TEXT_MUTED,
            );
            cur.advance(SMALL_HEIGHT + 18.0);
        }
    }

    if !variant.advantages.is_empty() && cur.y < 680.0 {
        layout::text(
            page,
            MARGIN,
            cur.y,
            "Ihre Vorteile mit diesem Haustyp:",
            "Heading",
            600,
            11.0,
            palette::PRIMARY,
        );
        cur.advance(20.0);

        let col_width = WIDTH / 2.0;
        for (idx, adv) in variant.advantages.iter().enumerate() {
            let col_x = MARGIN + (idx % 2) as f64 * col_width;
            let row_y = cur.y + (idx / 2) as f64 * 18.0;
            layout::draw_check(page, col_x, row_y, 9.0, palette::GOLD);
            layout::text(page, col_x + 12.0, row_y, adv, "Helvetica", 400, 9.0, palette::TEXT);
        }
        cur.advance(variant.advantages.len().div_ceil(2) as f64 * 18.0 + 15.0);
    }

    // Free-floor-plan badge, only when it fits whole
    if cur.y < 700.0 && cur.fits(80.0) {
        layout::draw_box(page, MARGIN, cur.y, WIDTH, 80.0, Some(palette::GOLD_LIGHT), None, 6.0);
        layout::draw_box(page, MARGIN, cur.y, 4.0, 80.0, Some(palette::GOLD), None, 0.0);
        layout::text(
            page,
            MARGIN + 15.0,
            cur.y + 10.0,
            "100% individuelle Grundrissgestaltung",
            "Heading",
            600,
            10.0,
            palette::PRIMARY,
        );
        layout::text(
            page,
            MARGIN + 15.0,
            cur.y + 28.0,
            "Bei Lehner Haus sind Sie nicht an Kataloggrundrisse gebunden.",
            "Helvetica",
            400,
            9.0,
            palette::TEXT,
        );
        layout::text(
            page,
            MARGIN + 15.0,
            cur.y + 44.0,
            "Ihr Traumhaus wird nach Ihren Wünschen geplant.",
            "Helvetica",
            400,
            9.0,
            palette::TEXT,
        );
        layout::text(
            page,
            MARGIN + 15.0,
            cur.y + 60.0,
            "Schwäbisch gut seit über 60 Jahren.",
            "Helvetica",
            400,
            9.0,
            palette::TEXT_MUTED,
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetResolver;
    use crate::catalog::Catalog;
    use crate::font::FontContext;
    use crate::layout::{PAGE_HEIGHT, PAGE_WIDTH};

    #[test]
    fn test_haustyp_without_images_uses_placeholders() {
        let catalog = Catalog::default();
        let fonts = FontContext::new();
        let mut assets = AssetResolver::new();
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = RenderContext {
            catalog: &catalog,
            fonts: &fonts,
            assets: &mut assets,
            asset_root: dir.path(),
        };
        let variant = CatalogVariant {
            id: "stadtvilla".to_string(),
            name: "Stadtvilla".to_string(),
            description: "Klassische Eleganz auf zwei Vollgeschossen.".to_string(),
            file_path: Some("assets/variants/haustypen/stadtvilla/".to_string()),
            advantages: vec![
                "Zwei Vollgeschosse".to_string(),
                "Repräsentative Architektur".to_string(),
            ],
            ..Default::default()
        };
        let mut page = PageSurface::new(PAGE_WIDTH, PAGE_HEIGHT);
        render(&mut page, &variant, &mut ctx).unwrap();

        assert!(page.contains_text("Stadtvilla"));
        assert!(page.contains_text("Klassische Eleganz auf zwei Vollgeschossen."));
        assert!(page.contains_text("Beispielbilder"));
        assert!(page.contains_text("Ihre Vorteile mit diesem Haustyp:"));
        assert!(page.contains_text("100% individuelle Grundrissgestaltung"));
    }

    #[test]
    fn test_haustyp_without_directory_skips_example_images() {
        let catalog = Catalog::default();
        let fonts = FontContext::new();
        let mut assets = AssetResolver::new();
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = RenderContext {
            catalog: &catalog,
            fonts: &fonts,
            assets: &mut assets,
            asset_root: dir.path(),
        };
        let variant = CatalogVariant {
            id: "bungalow".to_string(),
            name: "Bungalow".to_string(),
            ..Default::default()
        };
        let mut page = PageSurface::new(PAGE_WIDTH, PAGE_HEIGHT);
        render(&mut page, &variant, &mut ctx).unwrap();

        assert!(!page.contains_text("Beispielbilder"));
        assert!(page.contains_text("Bungalow"));
    }
}
