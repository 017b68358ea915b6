//! Vendor-comparison checklist: questions to put to competing builders,
//! warning signs, and the closing claim.

use crate::catalog::Category;
use crate::error::ProspektError;
use crate::layout::{self, palette, TextStyle};
use crate::model::Submission;
use crate::pagelist::RenderContext;
use crate::surface::PageSurface;

const QUESTION_STYLE: TextStyle = TextStyle {
    family: "Helvetica",
    size: 9.0,
    line_height: 1.2,
    weight: 400,
};

const WARNINGS: [&str; 4] = [
    "• Extrem niedriger Preis ohne nachvollziehbare Kalkulation",
    "• Keine konkreten Antworten auf technische Fragen",
    "• Druck zum schnellen Vertragsabschluss",
    "• Keine QDF-Zertifizierung oder RAL-Gütezeichen",
];

pub fn render(
    page: &mut PageSurface,
    submission: &Submission,
    ctx: &mut RenderContext,
) -> Result<(), ProspektError> {
    let fonts = ctx.fonts;
    let mut y = 95.0;

    layout::text(
        page,
        80.0,
        y,
        "Nutzen Sie diese Checkliste, um unterschiedliche Hersteller objektiv zu vergleichen:",
        "Helvetica",
        400,
        10.0,
        palette::TEXT,
    );
    y += 25.0;

    // The U-value question quotes the customer's actual wall when known
    let wall = ctx.catalog.variant(Category::Walls, submission.wall.as_deref());
    let u_wert_text = match wall {
        Some(w) => format!(
            "Exakter U-Wert? Lehner Haus: {} ({}). Je niedriger, desto besser.",
            w.detail("uValue").unwrap_or("0,149 W/(m²K)"),
            w.name
        ),
        None => "Exakter U-Wert? Lehner Haus: 0,129 (Climativ-PLUS) bzw. 0,149 W/(m²K) \
                 (Climativ). Je niedriger, desto besser."
            .to_string(),
    };

    let items: [(&str, &str); 9] = [
        (
            "Doppelte Beplankung",
            "Werden die Wände beidseitig doppelt beplankt? Lehner Haus: ja – für Stabilität und Schallschutz.",
        ),
        (
            "Holzwerkstoffe",
            "Wird ESB verwendet? ESB plus ist Blauer Engel zertifiziert, emissionsarm und empfohlen von der DGNB.",
        ),
        ("U-Wert Außenwand", &u_wert_text),
        (
            "Dämmstärke",
            "Lehner Haus: bis zu 240 mm Mineralwolldämmung zzgl. 80 mm Holzfaserdämmplatte in der Außenwandkonstruktion.",
        ),
        (
            "Fenster Ug-Wert",
            "3-fach Verglasung mit Ug 0,5 W/(m²K)? Lehner Haus: serienmäßig.",
        ),
        (
            "Kältemittel",
            "Natürliches Kältemittel R290? Lehner Haus: ja – zukunftssicher.",
        ),
        (
            "Diffusionsoffen",
            "Ist der Wandaufbau diffusionsoffen? Lehner Haus: ja – baubiologisch optimal.",
        ),
        (
            "Qualitätszertifikat",
            "QDF-Zertifizierung und RAL-Gütezeichen vorhanden? Lehner Haus: ja.",
        ),
        (
            "Festpreis",
            "Echte Festpreis-Garantie oder nur ein Circa-Preis? Bei Lehner Haus: Festpreisgarantie.",
        ),
    ];

    for (topic, question) in items {
        // Empty tick box to be filled in by hand
        layout::draw_box(page, 80.0, y, 10.0, 10.0, None, Some((palette::GOLD, 1.5)), 0.0);
        layout::text(
            page,
            95.0,
            y,
            &format!("{}:", topic),
            "Helvetica",
            700,
            9.0,
            palette::PRIMARY,
        );
        layout::paragraph(page, fonts, 200.0, y, 340.0, question, QUESTION_STYLE, palette::TEXT);
        y += 22.0;
    }

    y += 10.0;
    layout::draw_box(page, 60.0, y, 475.0, 80.0, Some(palette::ERROR_LIGHT), None, 8.0);
    layout::draw_box(page, 60.0, y, 4.0, 80.0, Some(palette::ERROR), None, 0.0);
    layout::text(
        page,
        80.0,
        y + 10.0,
        "Vorsicht bei diesen Warnsignalen:",
        "Helvetica",
        700,
        10.0,
        palette::ERROR,
    );
    for (i, warning) in WARNINGS.iter().enumerate() {
        layout::text(
            page,
            80.0,
            y + 25.0 + i as f64 * 10.0,
            warning,
            "Helvetica",
            400,
            8.0,
            palette::TEXT,
        );
    }

    y += 85.0;
    layout::draw_box(page, 60.0, y, 475.0, 45.0, Some(palette::PRIMARY), None, 8.0);
    layout::draw_box(page, 530.0, y, 4.0, 45.0, Some(palette::GOLD), None, 0.0);
    layout::text(
        page,
        80.0,
        y + 12.0,
        "Bei Lehner Haus können Sie jeden dieser Punkte mit \"Ja\" beantworten.",
        "Helvetica",
        700,
        10.0,
        palette::WHITE,
    );
    layout::text(
        page,
        80.0,
        y + 28.0,
        "Überzeugen Sie sich selbst: Besuchen Sie uns im Musterhaus!",
        "Helvetica",
        400,
        9.0,
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

    fn render_for(catalog: &Catalog, json: &str) -> PageSurface {
        let fonts = FontContext::new();
        let mut assets = AssetResolver::new();
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = RenderContext {
            catalog,
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
    fn test_generic_u_value_question_without_wall() {
        let page = render_for(&Catalog::default(), r#"{ "id": "x" }"#);
        assert!(page.contains_text("Doppelte Beplankung:"));
        assert!(page.contains_text("Vorsicht bei diesen Warnsignalen:"));
        let text = page.text_content().join("\n");
        assert!(text.contains("0,129 (Climativ-PLUS)"));
    }

    #[test]
    fn test_u_value_question_quotes_selected_wall() {
        let catalog = Catalog::from_json(
            r#"{
                "walls": [{
                    "id": "plus",
                    "name": "Climativ-PLUS",
                    "technicalDetails": { "uValue": "0,129 W/(m²K)" }
                }]
            }"#,
        )
        .unwrap();
        let page = render_for(&catalog, r#"{ "id": "x", "wall": "plus" }"#);
        let text = page.text_content().join("\n");
        assert!(text.contains("0,129 W/(m²K) (Climativ-PLUS)"));
    }
}
