//! QDF certification page: membership badge, certification benefits,
//! trust statement.

use crate::error::ProspektError;
use crate::layout::{self, palette, type_scale, TextStyle};
use crate::model::Submission;
use crate::pagelist::RenderContext;
use crate::surface::PageSurface;

const BENEFITS: [(&str, &str); 5] = [
    (
        "Geprüfte Produktqualität",
        "Alle Bauteile werden nach strengen QDF-Richtlinien produziert und geprüft",
    ),
    (
        "Unabhängige Überwachung",
        "Regelmäßige Kontrollen durch neutrale Prüfinstitute sichern konstante Qualität",
    ),
    (
        "Transparente Bauprozesse",
        "Dokumentierte Arbeitsabläufe für nachvollziehbare Qualitätssicherung",
    ),
    (
        "Geschulte Fachkräfte",
        "Fortlaufende Weiterbildung aller Mitarbeiter nach QDF-Standards",
    ),
    (
        "Garantierte Bauqualität",
        "RAL-Gütezeichen als Nachweis für geprüfte Fertigbauqualität",
    ),
];

pub fn render(
    page: &mut PageSurface,
    _submission: &Submission,
    ctx: &mut RenderContext,
) -> Result<(), ProspektError> {
    let fonts = ctx.fonts;
    let mut y = 95.0;

    // Gold highlight box
    layout::draw_box(
        page,
        60.0,
        y,
        475.0,
        70.0,
        Some(palette::GOLD_LIGHT),
        Some((palette::GOLD, 1.0)),
        8.0,
    );
    layout::text(
        page,
        80.0,
        y + 15.0,
        "QDF-Qualitätszertifikat 2026",
        "Helvetica",
        700,
        14.0,
        palette::PRIMARY,
    );
    layout::text(
        page,
        80.0,
        y + 35.0,
        "Lehner Haus ist Mitglied der Qualitätsgemeinschaft Deutscher Fertigbau (QDF)",
        "Helvetica",
        400,
        10.0,
        palette::TEXT_LIGHT,
    );
    layout::text(
        page,
        80.0,
        y + 48.0,
        "und trägt das RAL-Gütezeichen für geprüfte Qualität.",
        "Helvetica",
        400,
        10.0,
        palette::TEXT_LIGHT,
    );

    y += 95.0;
    let intro = TextStyle {
        size: 11.0,
        ..type_scale::BODY
    };
    layout::paragraph(
        page,
        fonts,
        80.0,
        y,
        435.0,
        "Die QDF-Zertifizierung garantiert höchste Qualitätsstandards in Planung, Produktion \
         und Ausführung. Als zertifiziertes Mitglied unterliegt Lehner Haus regelmäßigen \
         Prüfungen durch unabhängige Institute.",
        intro,
        palette::TEXT,
    );

    y += 55.0;
    layout::text(
        page,
        80.0,
        y,
        "Ihre Vorteile durch QDF-Zertifizierung:",
        "Helvetica",
        700,
        13.0,
        palette::PRIMARY,
    );
    y += 28.0;

    for (title, desc) in BENEFITS {
        // Gold badge with a white check
        layout::draw_box(page, 82.0, y - 1.0, 16.0, 16.0, Some(palette::GOLD), None, 8.0);
        layout::draw_check(page, 85.0, y + 2.0, 10.0, palette::WHITE);

        layout::text(page, 108.0, y, title, "Helvetica", 700, 10.0, palette::PRIMARY);
        layout::text(
            page,
            108.0,
            y + 13.0,
            desc,
            "Helvetica",
            400,
            9.0,
            palette::TEXT_LIGHT,
        );
        y += 42.0;
    }

    y += 15.0;
    layout::draw_box(page, 60.0, y, 475.0, 85.0, Some(palette::PRIMARY), None, 8.0);
    layout::text(
        page,
        80.0,
        y + 15.0,
        "Vertrauen Sie auf geprüfte Qualität",
        "Helvetica",
        700,
        12.0,
        palette::WHITE,
    );
    layout::paragraph(
        page,
        fonts,
        80.0,
        y + 38.0,
        415.0,
        "Die QDF-Zertifizierung ist Ihr Qualitätsversprechen: Jedes Lehner Haus wird nach \
         höchsten Standards geplant, produziert und errichtet. Das RAL-Gütezeichen bestätigt \
         diese Qualität unabhängig.",
        type_scale::BODY,
        palette::WHITE,
    );

    y += 85.0;
    layout::text(
        page,
        80.0,
        y,
        "QDF-Mitgliedsnummer: DE-QDF-2026-LH | RAL-Gütezeichen: RAL-GZ 422",
        "Helvetica",
        400,
        9.0,
        palette::TEXT_MUTED,
    );

    Ok(())
}
