//! Service page: twelve service promises and the generations banner.

use crate::error::ProspektError;
use crate::layout::{self, palette, type_scale, TextStyle};
use crate::model::Submission;
use crate::pagelist::RenderContext;
use crate::surface::PageSurface;

const SERVICES: [(&str, &str); 12] = [
    (
        "Individuelle Planung",
        "100% freie Grundrissgestaltung – keine Katalog-Zwänge",
    ),
    (
        "Budgetoptimierte Grundrisse",
        "Optimale Raumaufteilung für jedes Budget",
    ),
    (
        "Individuelle Ausbaustufen",
        "Flexible Ausstattungsoptionen nach Ihren Wünschen",
    ),
    (
        "Wohngesunde Materialien",
        "ESB-Platten statt OSB – zertifiziert emissionsarm",
    ),
    (
        "Premium-Ausstattung",
        "Vaillant & Viessmann Wärmepumpen, Markenhersteller im Sanitärbereich, wie z. B. Laufen, Villeroy & Boch oder gleichwertig",
    ),
    (
        "Kompletter Innenausbau",
        "Elektroinstallation, Sanitärinstallation und Bodenbeläge – alles aus einer Hand",
    ),
    (
        "Persönliche Projektbetreuung",
        "Ihr Ansprechpartner von Planung bis Schlüsselübergabe",
    ),
    (
        "Zugeschnittene Hausempfehlungen",
        "Individuelle Beratung passend zu Ihren Bedürfnissen",
    ),
    (
        "Festpreis-Garantie",
        "Keine versteckten Kosten, keine bösen Überraschungen",
    ),
    (
        "Kosten- und Terminsicherheit",
        "Verbindliche Termine und transparente Kosten",
    ),
    (
        "Nachhaltige Wertbeständigkeit",
        "40 Jahre Garantie auf die statische Grundkonstruktion des Lehner Hauses.",
    ),
    (
        "Qualitätssicherung",
        "QDF-zertifiziert mit RAL-Gütezeichen und Eigenüberwachung",
    ),
];

pub fn render(
    page: &mut PageSurface,
    _submission: &Submission,
    ctx: &mut RenderContext,
) -> Result<(), ProspektError> {
    let intro = TextStyle {
        size: 11.0,
        ..type_scale::BODY
    };
    layout::paragraph(
        page,
        ctx.fonts,
        80.0,
        100.0,
        435.0,
        "Bei Lehner Haus erhalten Sie alles aus einer Hand – schwäbisch gut seit über 60 Jahren.",
        intro,
        palette::TEXT,
    );

    let mut y = 130.0;
    for (title, desc) in SERVICES {
        layout::text(page, 80.0, y, title, "Helvetica", 700, 9.0, palette::PRIMARY);
        layout::text(page, 80.0, y + 11.0, desc, "Helvetica", 400, 8.0, palette::TEXT);
        y += 28.0;
    }

    y += 15.0;
    layout::draw_box(page, 60.0, y, 475.0, 55.0, Some(palette::PRIMARY), None, 8.0);
    layout::text(
        page,
        80.0,
        y + 12.0,
        "Seit 3 Generationen vertrauen uns über 5.000 Baufamilien.",
        "Helvetica",
        700,
        11.0,
        palette::WHITE,
    );
    layout::text(
        page,
        80.0,
        y + 32.0,
        "QDF-zertifiziert | RAL-Gütezeichen | Mitglied im BDF",
        "Helvetica",
        400,
        9.0,
        palette::WHITE,
    );

    Ok(())
}
