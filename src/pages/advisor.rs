//! Advisor page: the assigned consultant's contact card and an optional
//! personal message.

use crate::error::ProspektError;
use crate::layout::{self, palette, type_scale};
use crate::model::Submission;
use crate::pagelist::RenderContext;
use crate::surface::PageSurface;

const MARGIN: f64 = 60.0;
const WIDTH: f64 = 475.0;

pub fn render(
    page: &mut PageSurface,
    submission: &Submission,
    ctx: &mut RenderContext,
) -> Result<(), ProspektError> {
    let mut y = 95.0;

    if let Some(name) = &submission.berater_name {
        layout::draw_box(page, MARGIN, y, WIDTH, 80.0, Some(palette::PRIMARY), None, 8.0);
        layout::text(page, MARGIN + 20.0, y + 15.0, name, "Helvetica", 700, 14.0, palette::WHITE);

        let mut contact_y = y + 38.0;
        if let Some(telefon) = &submission.berater_telefon {
            layout::text(
                page,
                MARGIN + 20.0,
                contact_y,
                &format!("Telefon: {}", telefon),
                "Helvetica",
                400,
                10.0,
                palette::WHITE,
            );
            contact_y += 16.0;
        }
        if let Some(email) = &submission.berater_email {
            layout::text(
                page,
                MARGIN + 20.0,
                contact_y,
                &format!("E-Mail: {}", email),
                "Helvetica",
                400,
                10.0,
                palette::WHITE,
            );
        }

        y += 100.0;
    }

    if let Some(freitext) = &submission.berater_freitext {
        let clean = freitext.replace('\r', "");
        layout::text(
            page,
            MARGIN + 15.0,
            y + 12.0,
            "Persönliche Nachricht:",
            "Helvetica",
            700,
            11.0,
            palette::PRIMARY,
        );
        layout::paragraph(
            page,
            ctx.fonts,
            MARGIN + 15.0,
            y + 30.0,
            WIDTH - 30.0,
            &clean,
            type_scale::BODY,
            palette::TEXT,
        );
    }

    Ok(())
}
