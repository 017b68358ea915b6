//! Room plan page: one banner per floor with its bulleted room list.

use crate::error::ProspektError;
use crate::layout::{self, palette, TextStyle};

const HINT_STYLE: TextStyle = TextStyle {
    family: "Helvetica",
    size: 9.0,
    line_height: 1.4,
    weight: 400,
};
use crate::model::{Room, Submission};
use crate::pagelist::RenderContext;
use crate::surface::PageSurface;

const MARGIN: f64 = 60.0;
const WIDTH: f64 = 475.0;

pub fn render(
    page: &mut PageSurface,
    submission: &Submission,
    ctx: &mut RenderContext,
) -> Result<(), ProspektError> {
    let fonts = ctx.fonts;
    let mut y = 100.0;

    let floors: Vec<(&str, &[Room])> = [
        ("Erdgeschoss", submission.rooms.erdgeschoss.as_slice()),
        ("Obergeschoss", submission.rooms.obergeschoss.as_slice()),
        (
            "Untergeschoss (Partnerkeller oder bauseits)",
            submission.rooms.untergeschoss.as_slice(),
        ),
    ]
    .into_iter()
    .filter(|(_, rooms)| !rooms.is_empty())
    .collect();

    if floors.is_empty() {
        layout::text(
            page, MARGIN, y, "Keine Räume definiert", "Helvetica", 400, 10.0, palette::TEXT_MUTED,
        );
        return Ok(());
    }

    for (floor_idx, (floor_name, rooms)) in floors.into_iter().enumerate() {
        if floor_idx > 0 {
            y += 25.0;
        }

        layout::draw_box(page, MARGIN, y, WIDTH, 28.0, Some(palette::PRIMARY), None, 4.0);
        layout::text(page, MARGIN + 15.0, y + 8.0, floor_name, "Helvetica", 700, 12.0, palette::WHITE);
        y += 40.0;

        for (idx, room) in rooms.iter().enumerate() {
            let room_name = if room.name.is_empty() {
                format!("Raum {}", idx + 1)
            } else {
                room.name.clone()
            };

            layout::text(page, MARGIN + 10.0, y, "•", "Helvetica", 400, 10.0, palette::GOLD);
            layout::text(page, MARGIN + 22.0, y, &room_name, "Helvetica", 700, 10.0, palette::TEXT);
            if let Some(details) = room.details.as_deref().filter(|d| !d.is_empty()) {
                let name_width = fonts.measure_string(&room_name, "Helvetica", 700, false, 10.0);
                layout::text(
                    page,
                    MARGIN + 22.0 + name_width,
                    y,
                    &format!(" – {}", details),
                    "Helvetica",
                    400,
                    10.0,
                    palette::TEXT_LIGHT,
                );
            }
            y += 18.0;
        }
    }

    y += 20.0;
    layout::draw_box(page, MARGIN, y, WIDTH, 40.0, Some(palette::GOLD_LIGHT), None, 6.0);
    layout::draw_box(page, MARGIN, y, 4.0, 40.0, Some(palette::GOLD), None, 0.0);
    layout::paragraph(
        page,
        fonts,
        MARGIN + 15.0,
        y + 12.0,
        WIDTH - 30.0,
        "Durch unsere freie Raumplanung können wir all Ihre Wünsche umsetzen. Bei Lehner Haus \
         haben Sie 100 % freie Grundrissgestaltung.",
        HINT_STYLE,
        palette::TEXT,
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetResolver;
    use crate::catalog::Catalog;
    use crate::font::FontContext;
    use crate::layout::{PAGE_HEIGHT, PAGE_WIDTH};

    fn render_for(json: &str) -> PageSurface {
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
        let submission = Submission::from_json(json).unwrap();
        let mut page = PageSurface::new(PAGE_WIDTH, PAGE_HEIGHT);
        render(&mut page, &submission, &mut ctx).unwrap();
        page
    }

    #[test]
    fn test_floors_and_rooms() {
        let page = render_for(
            r#"{
                "id": "x",
                "rooms": {
                    "erdgeschoss": [
                        { "name": "Küche", "details": "offen zum Wohnbereich" },
                        { "name": "" }
                    ],
                    "untergeschoss": [{ "name": "Hobbyraum" }]
                }
            }"#,
        );
        assert!(page.contains_text("Erdgeschoss"));
        assert!(page.contains_text("Untergeschoss (Partnerkeller oder bauseits)"));
        assert!(!page.contains_text("Obergeschoss"));
        assert!(page.contains_text("Küche"));
        assert!(page.contains_text(" – offen zum Wohnbereich"));
        // A room without a name gets a numbered fallback
        assert!(page.contains_text("Raum 2"));
        assert!(page.contains_text("100 % freie Grundrissgestaltung"));
    }

    #[test]
    fn test_no_rooms_message() {
        let page = render_for(r#"{ "id": "x" }"#);
        assert!(page.contains_text("Keine Räume definiert"));
    }
}
