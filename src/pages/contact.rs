//! Contact page: the company (or advisor) contact box and three QR codes
//! for website, e-mail, and phone.

use qrcode::QrCode;

use crate::error::ProspektError;
use crate::layout::{self, palette, type_scale};
use crate::model::Submission;
use crate::pagelist::RenderContext;
use crate::raster::LoadedImage;
use crate::surface::{DrawOp, PageSurface};

const QR_SIZE: f64 = 80.0;
/// Pixel edge the QR raster is generated at before being placed at 80 pt.
const QR_PIXELS: usize = 100;

/// Render a QR code as an RGB raster: brand-green modules on white, one
/// quiet-zone module on every side.
fn qr_image(url: &str) -> Option<LoadedImage> {
    let code = QrCode::new(url.as_bytes()).ok()?;
    let width = code.width();
    let colors = code.to_colors();

    let margin = 1;
    let modules = width + 2 * margin;
    let scale = (QR_PIXELS / modules).max(1);
    let size = modules * scale;

    let dark = palette::PRIMARY;
    let mut rgb = vec![0xff_u8; size * size * 3];
    for my in 0..width {
        for mx in 0..width {
            if colors[my * width + mx] != qrcode::Color::Dark {
                continue;
            }
            let px0 = (mx + margin) * scale;
            let py0 = (my + margin) * scale;
            for py in py0..py0 + scale {
                for px in px0..px0 + scale {
                    let at = (py * size + px) * 3;
                    rgb[at] = dark.r;
                    rgb[at + 1] = dark.g;
                    rgb[at + 2] = dark.b;
                }
            }
        }
    }

    Some(LoadedImage::from_rgb(rgb, size as u32, size as u32))
}

fn draw_qr(page: &mut PageSurface, ctx: &RenderContext, x: f64, y: f64, url: &str, label: &str) {
    match qr_image(url) {
        Some(image) => {
            page.push(DrawOp::Image {
                image,
                x,
                y,
                width: QR_SIZE,
                height: QR_SIZE,
            });
            layout::text_centered(
                page,
                ctx.fonts,
                x,
                y + 85.0,
                QR_SIZE,
                label,
                "Helvetica",
                400,
                7.0,
                palette::TEXT_MUTED,
            );
        }
        // Encoding failed: fall back to the raw link
        None => {
            layout::paragraph(
                page,
                ctx.fonts,
                x,
                y,
                QR_SIZE,
                url,
                type_scale::CAPTION,
                palette::TEXT_LIGHT,
            );
        }
    }
}

pub fn render(
    page: &mut PageSurface,
    submission: &Submission,
    ctx: &mut RenderContext,
) -> Result<(), ProspektError> {
    let mut y = 120.0;

    layout::draw_box(page, 60.0, y, 475.0, 90.0, Some(palette::PRIMARY), None, 8.0);
    layout::draw_box(page, 530.0, y + 10.0, 4.0, 70.0, Some(palette::GRAY), None, 0.0);

    layout::text(
        page, 80.0, y + 12.0, "Ihr Ansprechpartner", "Helvetica", 700, 13.0, palette::WHITE,
    );

    if let Some(name) = &submission.berater_name {
        layout::text(page, 80.0, y + 35.0, name, "Helvetica", 400, 10.0, palette::WHITE);
        if let Some(telefon) = &submission.berater_telefon {
            layout::text(
                page,
                80.0,
                y + 50.0,
                &format!("Telefon: {}", telefon),
                "Helvetica",
                400,
                10.0,
                palette::WHITE,
            );
        }
        if let Some(email) = &submission.berater_email {
            layout::text(
                page,
                80.0,
                y + 65.0,
                &format!("E-Mail: {}", email),
                "Helvetica",
                400,
                10.0,
                palette::WHITE,
            );
        }
    } else {
        layout::text(page, 80.0, y + 35.0, "Lehner Haus GmbH", "Helvetica", 400, 10.0, palette::WHITE);
        layout::text(
            page, 80.0, y + 50.0, "Telefon: 07321 96700", "Helvetica", 400, 10.0, palette::WHITE,
        );
        layout::text(
            page,
            80.0,
            y + 65.0,
            "E-Mail: info@lehner-haus.de",
            "Helvetica",
            400,
            10.0,
            palette::WHITE,
        );
    }

    y += 120.0;
    layout::text(page, 80.0, y, "Schnellzugriff:", "Helvetica", 700, 11.0, palette::PRIMARY);

    y += 20.0;
    draw_qr(page, ctx, 100.0, y, "https://www.lehner-haus.de", "Website besuchen");
    draw_qr(page, ctx, 220.0, y, "mailto:info@lehner-haus.de", "E-Mail senden");
    draw_qr(page, ctx, 340.0, y, "tel:+497321096700", "Anrufen");

    Ok(())
}
