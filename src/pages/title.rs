//! Title page: full-bleed hero image, brand lettering, customer name.
//! The only page without header/footer chrome.

use std::path::PathBuf;

use crate::catalog::Category;
use crate::error::ProspektError;
use crate::layout::{self, palette, PAGE_HEIGHT, PAGE_WIDTH};
use crate::model::{german_date, Submission};
use crate::pagelist::RenderContext;
use crate::raster::LoadedImage;
use crate::surface::{Color, DrawOp, PageSurface};

const HERO_HEIGHT: f64 = 500.0;

/// Preferred house types when the submission has no usable hero image.
const FALLBACK_HAUSTYPEN: [&str; 4] = ["stadtvilla", "familienhaus", "bungalow", "doppelhaus"];

pub fn render(
    page: &mut PageSurface,
    submission: &Submission,
    ctx: &mut RenderContext,
) -> Result<(), ProspektError> {
    // Hero band: solid brand color, image on top when one resolves
    layout::draw_box(
        page,
        0.0,
        0.0,
        PAGE_WIDTH,
        HERO_HEIGHT,
        Some(palette::PRIMARY),
        None,
        0.0,
    );

    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(haustyp) = ctx
        .catalog
        .variant(Category::Haustypen, submission.haustyp.as_deref())
    {
        if let Some(dir) = &haustyp.file_path {
            candidates.push(ctx.resolve(dir).join("1.png"));
        }
    }
    for dir in FALLBACK_HAUSTYPEN {
        candidates.push(ctx.resolve(&format!("assets/variants/haustypen/{}/1.png", dir)));
    }
    if let Some(hero) = ctx.image_from_candidates(&candidates, 1200) {
        super::draw_image_contained(page, hero, 0.0, 0.0, PAGE_WIDTH, HERO_HEIGHT);
    }

    // Logo, top-left over the hero. Missing logo is not an error.
    let logo_path = ctx.resolve("Logo/LehnerLogo_schwaebischgut.jpg");
    if let Some(bytes) = ctx.assets.compressed(&logo_path, 500) {
        if let Ok(logo) = LoadedImage::from_bytes(&bytes) {
            let height = 120.0 * logo.height_px.max(1) as f64 / logo.width_px.max(1) as f64;
            page.push(DrawOp::Image {
                image: logo,
                x: 40.0,
                y: 30.0,
                width: 120.0,
                height,
            });
        }
    }

    let fonts = ctx.fonts;
    layout::text_centered(
        page,
        fonts,
        0.0,
        HERO_HEIGHT - 130.0,
        PAGE_WIDTH,
        "Ihre persönliche",
        "Heading",
        700,
        26.0,
        palette::WHITE,
    );
    layout::text_centered(
        page,
        fonts,
        0.0,
        HERO_HEIGHT - 90.0,
        PAGE_WIDTH,
        "Leistungsbeschreibung",
        "Heading",
        700,
        32.0,
        palette::GOLD,
    );

    // Solid band below the hero
    layout::draw_box(
        page,
        0.0,
        HERO_HEIGHT,
        PAGE_WIDTH,
        PAGE_HEIGHT - HERO_HEIGHT,
        Some(palette::PRIMARY),
        None,
        0.0,
    );

    let anrede = submission.bauherr_anrede.as_deref().unwrap_or("Familie");
    let nachname = submission.bauherr_nachname.as_deref().unwrap_or("");
    let name_line = format!("{} {}", anrede, nachname).trim_end().to_string();
    layout::text_centered(
        page,
        fonts,
        0.0,
        HERO_HEIGHT + 50.0,
        PAGE_WIDTH,
        &name_line,
        "Heading",
        700,
        22.0,
        palette::WHITE,
    );

    layout::text_centered(
        page,
        fonts,
        0.0,
        HERO_HEIGHT + 90.0,
        PAGE_WIDTH,
        &german_date(&submission.timestamp),
        "Helvetica",
        400,
        10.0,
        Color::rgb(0xcc, 0xcc, 0xcc),
    );

    page.push(DrawOp::Line {
        x1: 200.0,
        y1: HERO_HEIGHT + 130.0,
        x2: 395.0,
        y2: HERO_HEIGHT + 130.0,
        color: palette::GOLD,
        width: 1.5,
    });

    layout::draw_box(page, 0.0, 790.0, PAGE_WIDTH, 1.5, Some(palette::GOLD), None, 0.0);
    layout::text_centered(
        page,
        fonts,
        0.0,
        802.0,
        PAGE_WIDTH,
        "Lehner Haus GmbH · Ihr Partner für individuelles Bauen seit über 60 Jahren",
        "Helvetica",
        400,
        8.0,
        Color::rgb(0x99, 0x99, 0x99),
    );

    Ok(())
}
