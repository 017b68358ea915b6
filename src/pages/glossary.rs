//! Glossary page: the technical vocabulary in two columns.

use crate::error::ProspektError;
use crate::layout::{self, palette, TextStyle};
use crate::model::Submission;
use crate::pagelist::RenderContext;
use crate::surface::PageSurface;

const MARGIN: f64 = 60.0;
const WIDTH: f64 = 475.0;

const DEFINITION_STYLE: TextStyle = TextStyle {
    family: "Helvetica",
    size: 7.0,
    line_height: 1.25,
    weight: 400,
};

const TERMS: [(&str, &str); 18] = [
    (
        "U-Wert",
        "Wärmedurchgangskoeffizient – gibt an, wie viel Wärme durch ein Bauteil verloren geht. Je niedriger, desto besser die Dämmung. Einheit: W/(m²K).",
    ),
    (
        "Ug-Wert",
        "Wärmedurchgangskoeffizient der Verglasung (g = glazing). Beschreibt die Wärmedämmung des Glases. Je niedriger, desto weniger Wärmeverlust.",
    ),
    (
        "KVH",
        "Konstruktionsvollholz – technisch getrocknetes Vollholz für tragende Konstruktionen. Formstabil, maßhaltig und frei von Insektenbefall.",
    ),
    (
        "LSH",
        "Leimschichtholz – verleimtes Holz aus mehreren Schichten für besonders belastbare Konstruktionen.",
    ),
    (
        "RC2",
        "Resistance Class 2 – Sicherheitsklasse für Fenster und Türen. Bietet geprüften Einbruchschutz mit Pilzkopfverriegelung.",
    ),
    (
        "F90",
        "Feuerwiderstandsklasse – das Bauteil widersteht einem Brand mindestens 90 Minuten lang. Standard bei Lehner Haus.",
    ),
    (
        "ESB",
        "Elka Strong Board – Holzwerkstoffplatte aus frischem Fichtenholz. Wohngesund zertifiziert (Blauer Engel), geringe Emissionen.",
    ),
    (
        "WLG / WLS",
        "Wärmeleitgruppe / Wärmeleitstufe – Kennzahl für die Dämmeigenschaft eines Materials. Je niedriger die Zahl, desto besser die Dämmung.",
    ),
    (
        "SCOP",
        "Seasonal Coefficient of Performance – jahreszeitbezogene Effizienz einer Wärmepumpe. SCOP 5,0 bedeutet: aus 1 kWh Strom werden 5 kWh Wärme.",
    ),
    (
        "R290",
        "Natürliches Kältemittel (Propan) für Wärmepumpen. Klimafreundlich und zukunftssicher, da synthetische Kältemittel schrittweise verboten werden.",
    ),
    (
        "WRG",
        "Wärmerückgewinnung – Technologie in Lüftungsanlagen, die Wärme aus der Abluft zurückgewinnt und an die Frischluft überträgt.",
    ),
    (
        "QDF",
        "Qualitätsgemeinschaft Deutscher Fertigbau – unabhängiger Qualitätsverband mit strengen Prüfstandards für Fertighaushersteller.",
    ),
    (
        "RAL",
        "RAL-Gütezeichen – unabhängiges Qualitätssiegel, das regelmäßig durch neutrale Institute überprüft wird.",
    ),
    (
        "dB(A)",
        "Dezibel (A-bewertet) – Maßeinheit für Lautstärke. 35 dB(A) = Flüstern, 50 dB(A) = normales Gespräch.",
    ),
    (
        "DGNB",
        "Deutsche Gesellschaft für Nachhaltiges Bauen – vergibt Zertifikate für nachhaltiges und ressourcenschonendes Bauen.",
    ),
    (
        "EnEV / GEG",
        "Energieeinsparverordnung / Gebäudeenergiegesetz – gesetzliche Vorgaben für die energetische Qualität von Gebäuden.",
    ),
    (
        "LCA",
        "Lebenszyklusanalyse – bewertet die Umweltwirkungen eines Gebäudes über seinen gesamten Lebenszyklus.",
    ),
    (
        "ECOSE",
        "Bindemittel-Technologie von Knauf Insulation – formaldehydfrei, auf Basis natürlicher Rohstoffe. Wohngesünder als herkömmliche Mineralwolle.",
    ),
];

pub fn render(
    page: &mut PageSurface,
    _submission: &Submission,
    ctx: &mut RenderContext,
) -> Result<(), ProspektError> {
    let fonts = ctx.fonts;
    let mut y = 95.0;

    layout::text(
        page,
        MARGIN,
        y,
        "Die wichtigsten Fachbegriffe aus Ihrer Leistungsbeschreibung im Überblick:",
        "Helvetica",
        400,
        9.0,
        palette::TEXT_MUTED,
    );
    y += 25.0;

    let col_width = WIDTH / 2.0 - 8.0;
    let per_column = TERMS.len().div_ceil(2);

    for (idx, (term, definition)) in TERMS.iter().enumerate() {
        let (col, row) = if idx < per_column {
            (0, idx)
        } else {
            (1, idx - per_column)
        };
        let x = MARGIN + col as f64 * (col_width + 16.0);
        let row_y = y + row as f64 * 38.0;

        layout::text(page, x, row_y, term, "Helvetica", 700, 8.0, palette::PRIMARY);
        layout::paragraph(
            page,
            fonts,
            x,
            row_y + 10.0,
            col_width,
            definition,
            DEFINITION_STYLE,
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
    fn test_all_terms_present() {
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

        for (term, _) in TERMS {
            assert!(page.contains_text(term), "missing glossary term {}", term);
        }
    }
}
