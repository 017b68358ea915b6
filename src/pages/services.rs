//! Included-services overview: three columns of deliverables, the selected
//! equipment highlights, and the fixed-price banner.

use crate::catalog::Category;
use crate::error::ProspektError;
use crate::layout::{self, palette, TextStyle};
use crate::model::Submission;
use crate::pagelist::RenderContext;
use crate::surface::{Color, PageSurface};

const MARGIN: f64 = 60.0;
const CONTENT_WIDTH: f64 = 475.0;
const COL_WIDTH: f64 = 155.0;
const COL_GAP: f64 = 10.0;

const ITEM_STYLE: TextStyle = TextStyle {
    family: "Helvetica",
    size: 7.5,
    line_height: 1.2,
    weight: 400,
};

const PLANUNG_ITEMS: [&str; 6] = [
    "Feste kompetente Ansprechpartner",
    "Vor-Ort Bemusterung",
    "Bauleitung",
    "Energieberater (EnEV)",
    "Energieausweis",
    "KfW-Bestätigung",
];

const ROHBAU_ITEMS: [&str; 13] = [
    "Gerüst & Kran",
    "Transport",
    "Geschlossene Gebäudehülle",
    "Außenputz",
    "Decke",
    "Innenwände geschlossen",
    "Dach mit Eindeckung",
    "Dachüberstände gestrichen",
    "3-fach verglaste Fenster nach Wahl",
    "Haustür (Dreifachverriegelung)",
    "Alu-Rollläden",
    "Alu-Außenfensterbänke",
    "Dachrinnen & Fallrohre (Titanzink)",
];

fn draw_column(
    page: &mut PageSurface,
    ctx: &RenderContext,
    x: f64,
    y: f64,
    header: &str,
    items: &[String],
) -> f64 {
    layout::draw_box(page, x, y, COL_WIDTH, 22.0, Some(palette::PRIMARY), None, 4.0);
    layout::text(page, x + 8.0, y + 6.0, header, "Helvetica", 700, 10.0, palette::WHITE);

    let mut item_y = y + 30.0;
    for item in items {
        layout::text(page, x + 3.0, item_y, "•", "Helvetica", 400, 7.5, palette::PRIMARY);
        let height = layout::paragraph(
            page,
            ctx.fonts,
            x + 12.0,
            item_y,
            COL_WIDTH - 15.0,
            item,
            ITEM_STYLE,
            palette::TEXT,
        );
        item_y += (height + 3.0).max(11.0);
    }
    item_y
}

pub fn render(
    page: &mut PageSurface,
    submission: &Submission,
    ctx: &mut RenderContext,
) -> Result<(), ProspektError> {
    let catalog = ctx.catalog;
    let y = 95.0;

    let window = catalog.variant(Category::Windows, submission.window.as_deref());
    let heizung = catalog.variant(Category::Heizung, submission.heizung.as_deref());
    let lueftung = catalog
        .variant(Category::Lueftung, submission.lueftung.as_deref())
        .filter(|v| v.id != "keine");

    let planung: Vec<String> = PLANUNG_ITEMS.iter().map(|s| s.to_string()).collect();
    let rohbau: Vec<String> = ROHBAU_ITEMS.iter().map(|s| s.to_string()).collect();

    let mut ausbau: Vec<String> = vec![
        "Estrich mit Fußbodenheizung".to_string(),
        "Blower-Door-Test".to_string(),
        "Komplette Elektroinstallation inkl. Zählerschrank".to_string(),
    ];
    if let Some(l) = lueftung {
        ausbau.push(l.name.clone());
    }
    ausbau.extend(
        [
            "Fliesen",
            "Sanitärobjekte von Markenherstellern",
            "Laminat oder Parkett",
            "Malerarbeiten (weiß streichen)",
            "Innentüren",
            "Sanitärinstallation",
        ]
        .iter()
        .map(|s| s.to_string()),
    );

    let y1 = draw_column(page, ctx, MARGIN, y, "Planung & Service", &planung);
    let y2 = draw_column(page, ctx, MARGIN + COL_WIDTH + COL_GAP, y, "Rohbau", &rohbau);
    let y3 = draw_column(
        page,
        ctx,
        MARGIN + 2.0 * (COL_WIDTH + COL_GAP),
        y,
        "Bezugsfertiger Ausbau",
        &ausbau,
    );

    let max_y = y1.max(y2).max(y3) + 15.0;

    // Highlights: the concretely selected equipment
    layout::draw_rule(
        page,
        MARGIN,
        MARGIN + CONTENT_WIDTH,
        max_y,
        Color::rgb(0xcc, 0xcc, 0xcc),
        0.5,
    );
    layout::draw_box(
        page,
        MARGIN,
        max_y + 2.0,
        CONTENT_WIDTH,
        98.0,
        Some(palette::GRAY_LIGHT),
        None,
        8.0,
    );
    layout::text(
        page,
        MARGIN + 15.0,
        max_y + 10.0,
        "Ihre zusätzlich gewählten Ausstattungsmerkmale:",
        "Helvetica",
        700,
        10.0,
        palette::PRIMARY,
    );

    let named = |category: Category, id: &Option<String>| {
        catalog.variant(category, id.as_deref()).map(|v| v.name.clone())
    };
    let treppe = catalog
        .variant(Category::Treppen, submission.treppe.as_deref())
        .filter(|v| v.id != "keine");

    let highlights: Vec<String> = [
        named(Category::Walls, &submission.wall).map(|n| format!("Außenwand: {}", n)),
        named(Category::Innerwalls, &submission.innerwall).map(|n| format!("Innenwand: {}", n)),
        named(Category::Decken, &submission.decke).map(|n| format!("Decke: {}", n)),
        window.map(|w| format!("Fenster: {}", w.name)),
        named(Category::Tiles, &submission.tiles).map(|n| format!("Dacheindeckung: {}", n)),
        named(Category::Daecher, &submission.dach).map(|n| format!("Dachaufbau: {}", n)),
        heizung.map(|h| format!("Heizung: {}", h.name)),
        treppe.map(|t| format!("Treppe: {}", t.name)),
        lueftung.map(|l| format!("Lüftung: {}", l.name)),
    ]
    .into_iter()
    .flatten()
    .collect();

    let per_column = highlights.len().div_ceil(2);
    for (i, highlight) in highlights.iter().enumerate() {
        let (x, row) = if i < per_column {
            (MARGIN + 15.0, i)
        } else {
            (MARGIN + CONTENT_WIDTH / 2.0, i - per_column)
        };
        let row_y = max_y + 28.0 + row as f64 * 13.0;
        layout::draw_check(page, x, row_y, 8.0, palette::PRIMARY);
        layout::text(page, x + 12.0, row_y, highlight, "Helvetica", 400, 8.0, palette::TEXT);
    }

    // Fixed-price banner
    let footer_y = max_y + 115.0;
    layout::draw_box(
        page,
        MARGIN,
        footer_y,
        CONTENT_WIDTH,
        40.0,
        Some(palette::PRIMARY),
        None,
        6.0,
    );
    layout::text(
        page,
        MARGIN + 15.0,
        footer_y + 10.0,
        "Alle Leistungen inklusive - keine versteckten Kosten!",
        "Helvetica",
        700,
        9.0,
        palette::WHITE,
    );
    layout::text(
        page,
        MARGIN + 15.0,
        footer_y + 24.0,
        "Festpreis-Garantie von Lehner Haus: Ihr Preis steht von Anfang an fest.",
        "Helvetica",
        400,
        8.0,
        palette::WHITE,
    );

    Ok(())
}
