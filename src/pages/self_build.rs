//! Self-build page: the work the customer takes on themselves.

use crate::error::ProspektError;
use crate::layout::{self, palette, Cursor, TextStyle};

const HINT_STYLE: TextStyle = TextStyle {
    family: "Helvetica",
    size: 9.0,
    line_height: 1.4,
    weight: 400,
};
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
    let mut cur = Cursor::new(100.0);

    layout::text(
        page,
        MARGIN,
        cur.y,
        "Folgende Arbeiten möchten Sie in Eigenleistung durchführen:",
        "Helvetica",
        400,
        10.0,
        palette::TEXT_LIGHT,
    );
    cur.advance(30.0);

    for item in &submission.eigenleistungen {
        // Leave room for the hint box and footer
        if cur.y > 720.0 {
            break;
        }
        layout::text(page, MARGIN + 10.0, cur.y, "•", "Helvetica", 400, 10.0, palette::GRAY);
        layout::text(page, MARGIN + 22.0, cur.y, item, "Helvetica", 700, 10.0, palette::TEXT);
        cur.advance(18.0);
    }

    if cur.y < 700.0 {
        cur.advance(20.0);
        layout::draw_box(page, MARGIN, cur.y, WIDTH, 45.0, Some(palette::GRAY_LIGHT), None, 6.0);
        layout::draw_box(page, MARGIN, cur.y, 4.0, 45.0, Some(palette::GRAY), None, 0.0);
        layout::paragraph(
            page,
            ctx.fonts,
            MARGIN + 15.0,
            cur.y + 12.0,
            WIDTH - 30.0,
            "Hinweis: Die genannten Eigenleistungen werden bei der Angebotserstellung \
             berücksichtigt. Ihr Fachberater bespricht gerne die Details mit Ihnen.",
            HINT_STYLE,
            palette::TEXT,
        );
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

    #[test]
    fn test_items_and_hint() {
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
        let submission = Submission::from_json(
            r#"{ "id": "x", "eigenleistungen": ["Malerarbeiten", "Bodenbeläge"] }"#,
        )
        .unwrap();
        let mut page = PageSurface::new(PAGE_WIDTH, PAGE_HEIGHT);
        render(&mut page, &submission, &mut ctx).unwrap();

        assert!(page.contains_text("Malerarbeiten"));
        assert!(page.contains_text("Bodenbeläge"));
        assert!(page.contains_text("Hinweis: Die genannten Eigenleistungen"));
    }

    #[test]
    fn test_long_list_truncates_and_drops_hint() {
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
        let items: Vec<String> = (1..=60).map(|i| format!("\"Aufgabe {}\"", i)).collect();
        let submission = Submission::from_json(&format!(
            r#"{{ "id": "x", "eigenleistungen": [{}] }}"#,
            items.join(", ")
        ))
        .unwrap();
        let mut page = PageSurface::new(PAGE_WIDTH, PAGE_HEIGHT);
        render(&mut page, &submission, &mut ctx).unwrap();

        // Exactly the leading items survive, in source order
        let drawn: Vec<String> = page
            .text_content()
            .iter()
            .filter(|t| t.starts_with("Aufgabe"))
            .map(|t| t.to_string())
            .collect();
        assert!(!drawn.is_empty());
        assert!(drawn.len() < 60, "trailing items must be dropped");
        for (i, item) in drawn.iter().enumerate() {
            assert_eq!(item, &format!("Aufgabe {}", i + 1));
        }

        // The hint box no longer fits and is omitted entirely
        assert!(!page.contains_text("Hinweis:"));

        // Nothing spills into the footer chrome band
        for op in &page.ops {
            if let crate::surface::DrawOp::Text { y, .. } = op {
                assert!(*y <= 775.0, "text at y={} overlaps the footer", y);
            }
        }
    }
}
