//! Executive summary: the full configuration as a compact table, plus a
//! technical key-figures line when the page has room.

use crate::catalog::Category;
use crate::error::ProspektError;
use crate::layout::{self, palette};
use crate::model::{short_date, Submission};
use crate::pagelist::RenderContext;
use crate::surface::{Color, PageSurface};

const MARGIN: f64 = 50.0;
const WIDTH: f64 = 495.0;

pub fn render(
    page: &mut PageSurface,
    submission: &Submission,
    ctx: &mut RenderContext,
) -> Result<(), ProspektError> {
    let fonts = ctx.fonts;
    let catalog = ctx.catalog;
    let mut y = 100.0;

    layout::text(
        page,
        MARGIN,
        y,
        &submission.full_name(),
        "Heading",
        700,
        16.0,
        palette::PRIMARY,
    );
    y += 22.0;

    let mut chips = vec![
        match submission.personenanzahl {
            Some(n) => format!("{} Personen", n),
            None => "- Personen".to_string(),
        },
        submission.kfw_label().to_string(),
        format!("Grundstück: {}", submission.grundstueck_label()),
    ];
    if !submission.timestamp.is_empty() {
        chips.push(short_date(&submission.timestamp));
    }
    layout::text(
        page,
        MARGIN,
        y,
        &chips.join("   |   "),
        "Helvetica",
        400,
        9.0,
        palette::TEXT_MUTED,
    );
    y += 18.0;

    layout::draw_rule(page, MARGIN, MARGIN + WIDTH, y, Color::rgb(0xcc, 0xcc, 0xcc), 0.5);
    y += 20.0;

    let name_of = |category: Category, id: &Option<String>| {
        catalog
            .variant(category, id.as_deref())
            .map(|v| v.name.clone())
    };
    let rows: [(&str, String); 10] = [
        (
            "Haustyp",
            name_of(Category::Haustypen, &submission.haustyp).unwrap_or_else(|| "-".into()),
        ),
        (
            "Außenwand",
            name_of(Category::Walls, &submission.wall).unwrap_or_else(|| "-".into()),
        ),
        (
            "Innenwand",
            name_of(Category::Innerwalls, &submission.innerwall).unwrap_or_else(|| "-".into()),
        ),
        (
            "Geschossdecke",
            name_of(Category::Decken, &submission.decke).unwrap_or_else(|| "-".into()),
        ),
        (
            "Fenster",
            name_of(Category::Windows, &submission.window).unwrap_or_else(|| "-".into()),
        ),
        (
            "Dacheindeckung",
            name_of(Category::Tiles, &submission.tiles).unwrap_or_else(|| "-".into()),
        ),
        (
            "Dachaufbau",
            name_of(Category::Daecher, &submission.dach).unwrap_or_else(|| "-".into()),
        ),
        (
            "Heizung",
            name_of(Category::Heizung, &submission.heizung).unwrap_or_else(|| "-".into()),
        ),
        (
            "Lüftung",
            name_of(Category::Lueftung, &submission.lueftung).unwrap_or_else(|| "Keine".into()),
        ),
        (
            "Treppe",
            name_of(Category::Treppen, &submission.treppe).unwrap_or_else(|| "Keine".into()),
        ),
    ];

    // Table header
    layout::text(page, MARGIN + 12.0, y, "Kategorie", "Heading", 600, 8.0, palette::TEXT_MUTED);
    layout::text(
        page,
        MARGIN + 160.0,
        y,
        "Ihre Auswahl",
        "Heading",
        600,
        8.0,
        palette::TEXT_MUTED,
    );
    y += 14.0;
    layout::draw_rule(page, MARGIN, MARGIN + WIDTH, y, palette::PRIMARY, 0.5);
    y += 6.0;

    let row_height = 28.0;
    for (idx, (label, value)) in rows.iter().enumerate() {
        if idx % 2 == 0 {
            layout::draw_box(
                page,
                MARGIN,
                y,
                WIDTH,
                row_height,
                Some(palette::GRAY_LIGHT),
                None,
                0.0,
            );
        }
        let text_y = y + 8.0;
        layout::text(page, MARGIN + 12.0, text_y, label, "Helvetica", 400, 9.0, palette::TEXT_MUTED);
        layout::text(
            page,
            MARGIN + 160.0,
            text_y,
            value,
            "Helvetica",
            700,
            9.0,
            palette::PRIMARY,
        );
        y += row_height;
    }

    layout::draw_rule(page, MARGIN, MARGIN + WIDTH, y, palette::PRIMARY, 0.5);
    y += 20.0;

    // Technical key figures, only when there is room left
    if y < 700.0 {
        let wall = catalog.variant(Category::Walls, submission.wall.as_deref());
        let window = catalog.variant(Category::Windows, submission.window.as_deref());
        let lueftung = catalog.variant(Category::Lueftung, submission.lueftung.as_deref());

        let mut specs: Vec<(&str, &str)> = Vec::new();
        if let Some(v) = wall.and_then(|w| w.detail("uValue")) {
            specs.push(("U-Wert Wand", v));
        }
        if let Some(v) = window.and_then(|w| w.detail("ugValue")) {
            specs.push(("U-Wert Fenster", v));
        }
        if let Some(v) = lueftung.and_then(|l| l.detail("heatRecovery")) {
            specs.push(("WRG", v));
        }

        if !specs.is_empty() {
            layout::text(
                page,
                MARGIN,
                y,
                "Technische Kennwerte",
                "Heading",
                600,
                9.0,
                palette::PRIMARY,
            );
            y += 16.0;

            let mut x = MARGIN;
            let count = specs.len();
            for (i, (label, value)) in specs.into_iter().enumerate() {
                let label_text = format!("{}: ", label);
                layout::text(page, x, y, &label_text, "Helvetica", 400, 8.5, palette::TEXT_MUTED);
                x += fonts.measure_string(&label_text, "Helvetica", 400, false, 8.5);

                layout::text(page, x, y, value, "Helvetica", 700, 8.5, palette::PRIMARY);
                x += fonts.measure_string(value, "Helvetica", 700, false, 8.5);

                if i + 1 < count {
                    layout::text(page, x, y, "    |    ", "Helvetica", 400, 8.5, palette::GRAY);
                    x += fonts.measure_string("    |    ", "Helvetica", 400, false, 8.5);
                }
            }
        }
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

    fn catalog() -> Catalog {
        Catalog::from_json(
            r#"{
                "walls": [{
                    "id": "climativ",
                    "name": "Climativ Wandsystem",
                    "technicalDetails": { "uValue": "0,149 W/(m²K)" }
                }],
                "haustypen": [{ "id": "stadtvilla", "name": "Stadtvilla" }]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_summary_table_values() {
        let catalog = catalog();
        let fonts = FontContext::new();
        let mut assets = AssetResolver::new();
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = RenderContext {
            catalog: &catalog,
            fonts: &fonts,
            assets: &mut assets,
            asset_root: dir.path(),
        };
        let submission = Submission::from_json(
            r#"{
                "id": "x",
                "bauherr_vorname": "Anna",
                "bauherr_nachname": "Huber",
                "personenanzahl": 4,
                "haustyp": "stadtvilla",
                "wall": "climativ"
            }"#,
        )
        .unwrap();
        let mut page = PageSurface::new(PAGE_WIDTH, PAGE_HEIGHT);
        render(&mut page, &submission, &mut ctx).unwrap();

        assert!(page.contains_text("Anna Huber"));
        assert!(page.contains_text("4 Personen"));
        assert!(page.contains_text("Climativ Wandsystem"));
        assert!(page.contains_text("Stadtvilla"));
        // Unselected optional categories fall back to "Keine"
        assert!(page.contains_text("Keine"));
        // Wall uValue surfaces in the key figures line
        assert!(page.contains_text("0,149 W/(m²K)"));
    }
}
