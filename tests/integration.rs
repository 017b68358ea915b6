//! End-to-end generation tests: a realistic catalog and submission through
//! the full pipeline down to PDF bytes.

use prospekt::{Catalog, Generator, Submission};

fn full_catalog() -> Catalog {
    Catalog::from_json(
        r#"{
            "haustypen": [{
                "id": "stadtvilla",
                "name": "Stadtvilla",
                "description": "Klassische Eleganz auf zwei Vollgeschossen.",
                "advantages": ["Zwei Vollgeschosse", "Repräsentative Architektur"]
            }],
            "walls": [{
                "id": "climativ",
                "name": "Climativ",
                "description": "Climativ vereint Dämmung und Stabilität.",
                "constructionType": "Holztafelbau",
                "technicalDetails": {
                    "uValue": "0,149 W/(m²K)",
                    "insulation": "240 mm Mineralwolle",
                    "wallThickness": "334 mm",
                    "fireRating": "F90 von außen"
                },
                "premiumFeatures": ["Doppelte Beplankung", "ESB statt OSB"],
                "comparisonNotes": "❗KRITISCHE FRAGEN an andere Anbieter:\nWird beidseitig doppelt beplankt?"
            }],
            "innerwalls": [{
                "id": "standard",
                "name": "Innenwand Standard",
                "technicalDetails": { "wallThickness": "121 mm", "soundInsulation": "44 dB" }
            }],
            "decken": [{
                "id": "massiv",
                "name": "Massivdecke",
                "technicalDetails": { "construction": "Holzbalken", "soundInsulation": "Trittschallgedämmt" }
            }],
            "windows": [{
                "id": "dreifach",
                "name": "3-fach Verglasung",
                "technicalDetails": { "ugValue": "0,5 W/(m²K)", "glazing": "3-fach", "securityFeatures": "RC2" }
            }],
            "tiles": [{
                "id": "ton",
                "name": "Tondachziegel",
                "technicalDetails": { "material": "Ton", "surface": "engobiert" }
            }],
            "daecher": [{
                "id": "sattel",
                "name": "Satteldach",
                "technicalDetails": { "material": "KVH" }
            }],
            "heizung": [{
                "id": "waermepumpe",
                "name": "Luft-Wasser-Wärmepumpe",
                "technicalDetails": { "refrigerant": "R290 Propan", "noise": "35 dB(A)" }
            }],
            "treppen": [
                { "id": "keine", "name": "Keine Treppe" },
                { "id": "holz", "name": "Holztreppe" }
            ],
            "lueftung": [
                { "id": "keine", "name": "Keine Lüftungsanlage" },
                { "id": "zentral", "name": "Zentrale Lüftung", "technicalDetails": { "heatRecovery": "bis zu 90%" } }
            ]
        }"#,
    )
    .unwrap()
}

fn full_submission() -> Submission {
    Submission::from_json(
        r#"{
            "id": "int-001",
            "timestamp": "2026-02-14T10:30:00Z",
            "bauherr_anrede": "Familie",
            "bauherr_vorname": "Anna",
            "bauherr_nachname": "Huber",
            "personenanzahl": 4,
            "kfw_standard": "KFW40",
            "haustyp": "stadtvilla",
            "wall": "climativ",
            "innerwall": "standard",
            "decke": "massiv",
            "window": "dreifach",
            "tiles": "ton",
            "dach": "sattel",
            "heizung": "waermepumpe",
            "treppe": "holz",
            "lueftung": "zentral",
            "rooms": {
                "erdgeschoss": [{ "name": "Küche", "details": "offen" }],
                "obergeschoss": [{ "name": "Schlafzimmer" }]
            },
            "eigenleistungen": ["Malerarbeiten"],
            "berater_name": "Martin Weber",
            "berater_telefon": "07321 96700-12",
            "berater_email": "m.weber@lehner-haus.de"
        }"#,
    )
    .unwrap()
}

fn count_occurrences(haystack: &[u8], needle: &[u8]) -> usize {
    haystack.windows(needle.len()).filter(|w| *w == needle).count()
}

fn generate(catalog: Catalog, submission: &Submission) -> Vec<u8> {
    let dir = tempfile::tempdir().unwrap();
    let mut generator = Generator::new(catalog, dir.path());
    generator.generate(submission).unwrap()
}

#[test]
fn test_full_submission_yields_all_pages() {
    let pdf = generate(full_catalog(), &full_submission());

    assert!(pdf.starts_with(b"%PDF-1.7"));
    assert!(pdf.ends_with(b"%%EOF\n"));

    // 6 prefix + 10 component + 6 suffix pages
    assert_eq!(count_occurrences(&pdf, b"/Type /Page /Parent"), 22);
    assert!(count_occurrences(&pdf, b"/Count 22") >= 1);
}

#[test]
fn test_minimal_submission_yields_prefix_and_suffix() {
    let submission = Submission::from_json(r#"{ "id": "int-002" }"#).unwrap();
    let pdf = generate(full_catalog(), &submission);

    // Title, certification, summary, services, advantages, service pledge,
    // checklist, glossary, contact
    assert_eq!(count_occurrences(&pdf, b"/Type /Page /Parent"), 9);
}

#[test]
fn test_unknown_selection_skips_page_but_generates() {
    let submission = Submission::from_json(
        r#"{ "id": "int-003", "wall": "doesnotexist", "haustyp": "stadtvilla" }"#,
    )
    .unwrap();
    let pdf = generate(full_catalog(), &submission);

    // 9 base pages + the haustyp page; the bogus wall adds nothing
    assert_eq!(count_occurrences(&pdf, b"/Type /Page /Parent"), 10);
}

#[test]
fn test_keine_equals_missing_selection() {
    let with_keine = Submission::from_json(
        r#"{ "id": "a", "treppe": "keine", "lueftung": "keine" }"#,
    )
    .unwrap();
    let missing = Submission::from_json(r#"{ "id": "a" }"#).unwrap();

    let pdf_keine = generate(full_catalog(), &with_keine);
    let pdf_missing = generate(full_catalog(), &missing);
    assert_eq!(
        count_occurrences(&pdf_keine, b"/Type /Page /Parent"),
        count_occurrences(&pdf_missing, b"/Type /Page /Parent")
    );
}

#[test]
fn test_document_metadata() {
    let pdf = generate(full_catalog(), &full_submission());
    let text = String::from_utf8_lossy(&pdf);
    assert!(text.contains("/Producer (Prospekt"));
    assert!(text.contains("/Title (Leistungsbeschreibung)"));
    assert!(text.contains("/Author (Lehner Haus GmbH)"));
}

#[test]
fn test_content_streams_are_compressed() {
    let pdf = generate(full_catalog(), &full_submission());
    let text = String::from_utf8_lossy(&pdf);
    assert!(text.contains("/Filter /FlateDecode"));
}
