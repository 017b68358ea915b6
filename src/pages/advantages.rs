//! Quality-advantages page: seven numbered cards in a three-column grid.

use crate::error::ProspektError;
use crate::layout::{self, palette, TextStyle};
use crate::model::Submission;
use crate::pagelist::RenderContext;
use crate::surface::{Color, PageSurface};

const CARDS: [(&str, &str, &str); 7] = [
    ("1", "F90 Brandschutz", "Außenwände mit 90-minütigem Feuerwiderstand von außen"),
    ("2", "Diffusionsoffen", "Kontrollierte Feuchteregulierung, kein Schimmelrisiko"),
    ("3", "Kostensicherheit", "Klare Leistungen, definierte Qualitäten – keine „ab-Preise\""),
    ("4", "Familienunternehmen", "In dritter Generation – über 60 Jahre Erfahrung im Holzbau"),
    ("5", "QDF & RAL geprüft", "Zertifizierte Qualität, unabhängig überwacht"),
    ("6", "Transparenz", "Definierte Materialien, keine anonymen Preisgruppen"),
    ("7", "Festpreis-Garantie", "Echte Kostensicherheit ohne Interpretationsspielraum"),
];

const CARD_WIDTH: f64 = 145.0;
const CARD_HEIGHT: f64 = 115.0;
const GAP: f64 = 18.0;
const START_X: f64 = 70.0;
const CARDS_PER_ROW: usize = 3;

const DESC_STYLE: TextStyle = TextStyle {
    family: "Helvetica",
    size: 7.5,
    line_height: 1.25,
    weight: 400,
};

pub fn render(
    page: &mut PageSurface,
    _submission: &Submission,
    ctx: &mut RenderContext,
) -> Result<(), ProspektError> {
    let fonts = ctx.fonts;
    let mut y = 95.0;

    layout::paragraph(
        page,
        fonts,
        80.0,
        y,
        435.0,
        "Bei Lehner Haus erhalten Sie Premium-Qualität in jedem Detail:",
        layout::type_scale::BODY,
        palette::TEXT,
    );
    y += 30.0;

    for (idx, (nr, title, desc)) in CARDS.iter().enumerate() {
        let row = idx / CARDS_PER_ROW;
        let col = idx % CARDS_PER_ROW;
        let cx = START_X + col as f64 * (CARD_WIDTH + GAP);
        let cy = y + row as f64 * (CARD_HEIGHT + GAP);

        layout::draw_box(
            page,
            cx,
            cy,
            CARD_WIDTH,
            CARD_HEIGHT,
            Some(Color::rgb(0xf9, 0xf9, 0xf9)),
            Some((palette::GOLD, 1.0)),
            8.0,
        );

        // Number badge, top-left
        layout::draw_box(page, cx + 3.0, cy + 3.0, 24.0, 24.0, Some(palette::GOLD), None, 12.0);
        layout::text_centered(
            page, fonts, cx + 3.0, cy + 9.0, 24.0, nr, "Helvetica", 700, 10.0, palette::WHITE,
        );

        layout::text_centered(
            page,
            fonts,
            cx + 8.0,
            cy + 45.0,
            CARD_WIDTH - 16.0,
            title,
            "Helvetica",
            700,
            10.0,
            palette::PRIMARY,
        );
        layout::paragraph_centered(
            page,
            fonts,
            cx + 8.0,
            cy + 65.0,
            CARD_WIDTH - 16.0,
            desc,
            DESC_STYLE,
            palette::TEXT_LIGHT,
        );
    }

    y += (CARDS.len().div_ceil(CARDS_PER_ROW)) as f64 * (CARD_HEIGHT + GAP) + 15.0;

    layout::draw_box(page, 60.0, y, 475.0, 50.0, Some(palette::PRIMARY_DARK), None, 8.0);
    layout::text(
        page,
        80.0,
        y + 12.0,
        "Fragen Sie bei anderen Anbietern gezielt nach diesen Punkten!",
        "Helvetica",
        700,
        10.0,
        palette::GOLD,
    );
    layout::text(
        page,
        80.0,
        y + 30.0,
        "Nicht alle diese Leistungen sind branchenüblich. Bei Lehner Haus sind sie Standard.",
        "Helvetica",
        400,
        8.0,
        palette::WHITE,
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

    #[test]
    fn test_all_seven_cards_render() {
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
        let submission = Submission::from_json(r#"{ "id": "x" }"#).unwrap();
        let mut page = PageSurface::new(PAGE_WIDTH, PAGE_HEIGHT);
        render(&mut page, &submission, &mut ctx).unwrap();

        for (nr, title, _) in CARDS {
            assert!(page.contains_text(nr));
            assert!(page.contains_text(title), "missing card title {}", title);
        }
        assert!(page.contains_text("Fragen Sie bei anderen Anbietern"));
    }
}
