//! The generation driver: renders the page list sequentially and hands the
//! finished surfaces to the PDF writer.
//!
//! Pages render strictly in list order. Each descriptor's condition is
//! evaluated first; false skips it without emitting a page. Chrome (header
//! and footer) belongs to the driver, not to the renderers: a descriptor
//! with a title gets the header before and the footer after its content,
//! and only chrome-bearing pages count towards the visible page number. The
//! title page carries no chrome and no number.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::assets::AssetResolver;
use crate::catalog::Catalog;
use crate::error::ProspektError;
use crate::font::FontContext;
use crate::layout::{self, PAGE_HEIGHT, PAGE_WIDTH};
use crate::model::Submission;
use crate::pagelist::{build_page_list, PageDescriptor, RenderContext};
use crate::pdf::{DocInfo, PdfWriter};
use crate::surface::PageSurface;

/// Produces one brochure per submission against a fixed catalog.
pub struct Generator {
    catalog: Catalog,
    asset_root: PathBuf,
    fonts: FontContext,
    resolver: AssetResolver,
}

impl Generator {
    pub fn new(catalog: Catalog, asset_root: impl Into<PathBuf>) -> Self {
        Self {
            catalog,
            asset_root: asset_root.into(),
            fonts: FontContext::new(),
            resolver: AssetResolver::new(),
        }
    }

    /// Register a custom font face, e.g. the brand heading face. Standard
    /// faces remain available as fallback.
    pub fn register_font(&mut self, family: &str, weight: u32, italic: bool, data: Vec<u8>) {
        self.fonts.registry_mut().register(family, weight, italic, data);
    }

    /// Render the full brochure for one submission and return the PDF bytes.
    ///
    /// The image cache is cleared when the run finishes, successful or not;
    /// cached assets never leak into the next document.
    pub fn generate(&mut self, submission: &Submission) -> Result<Vec<u8>, ProspektError> {
        for issue in self.catalog.validate_selection(submission) {
            warn!(submission = %submission.id, "{}", issue);
        }

        let descriptors = build_page_list(submission, &self.catalog);
        let result = render_pages(
            &descriptors,
            submission,
            &self.catalog,
            &self.fonts,
            &mut self.resolver,
            &self.asset_root,
        );
        self.resolver.clear();
        let pages = result?;

        info!(
            submission = %submission.id,
            pages = pages.len(),
            "brochure rendered"
        );

        let info = DocInfo {
            title: Some("Leistungsbeschreibung".to_string()),
            author: Some("Lehner Haus GmbH".to_string()),
            subject: Some(format!("Leistungsbeschreibung für {}", submission.full_name())),
        };
        PdfWriter::new().write(&pages, &info, &self.fonts)
    }
}

/// Render every descriptor whose condition holds into its own surface,
/// drawing chrome around the titled ones.
fn render_pages(
    descriptors: &[PageDescriptor],
    submission: &Submission,
    catalog: &Catalog,
    fonts: &FontContext,
    resolver: &mut AssetResolver,
    asset_root: &Path,
) -> Result<Vec<PageSurface>, ProspektError> {
    let mut ctx = RenderContext {
        catalog,
        fonts,
        assets: resolver,
        asset_root,
    };

    let mut pages = Vec::with_capacity(descriptors.len());
    let mut page_no = 0;
    for descriptor in descriptors {
        if !(descriptor.condition)(submission) {
            continue;
        }
        let mut page = PageSurface::new(PAGE_WIDTH, PAGE_HEIGHT);
        match &descriptor.title {
            Some(title) => {
                page_no += 1;
                layout::draw_header(&mut page, title);
                (descriptor.render)(&mut page, submission, &mut ctx)?;
                layout::draw_footer(&mut page, ctx.fonts, page_no);
            }
            None => (descriptor.render)(&mut page, submission, &mut ctx)?,
        }
        pages.push(page);
    }
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_json(
            r#"{
                "haustypen": [{ "id": "stadtvilla", "name": "Stadtvilla" }],
                "walls": [{ "id": "climativ", "name": "Climativ" }]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_chrome_numbering_skips_title_page() {
        let cat = catalog();
        let submission = Submission::from_json(r#"{ "id": "x" }"#).unwrap();
        let descriptors = build_page_list(&submission, &cat);
        let fonts = FontContext::new();
        let mut resolver = AssetResolver::new();
        let dir = tempfile::tempdir().unwrap();

        let pages = render_pages(
            &descriptors,
            &submission,
            &cat,
            &fonts,
            &mut resolver,
            dir.path(),
        )
        .unwrap();

        // Title page has no footer
        assert!(!pages[0].contains_text("Seite 1"));
        // The first chrome page is numbered 1, the next 2
        assert!(pages[1].contains_text("Seite 1"));
        assert!(pages[2].contains_text("Seite 2"));
        // Every chrome page carries the imprint
        assert!(pages[1].contains_text("www.lehner-haus.de"));
    }

    #[test]
    fn test_page_count_equals_true_conditions() {
        let cat = catalog();
        let submission = Submission::from_json(
            r#"{ "id": "x", "rooms": { "erdgeschoss": [{ "name": "Küche" }] } }"#,
        )
        .unwrap();
        let descriptors = build_page_list(&submission, &cat);
        let fonts = FontContext::new();
        let mut resolver = AssetResolver::new();
        let dir = tempfile::tempdir().unwrap();

        let pages = render_pages(
            &descriptors,
            &submission,
            &cat,
            &fonts,
            &mut resolver,
            dir.path(),
        )
        .unwrap();

        let active = descriptors
            .iter()
            .filter(|d| (d.condition)(&submission))
            .count();
        assert_eq!(pages.len(), active);
        // Gated descriptors stay in the list but emit nothing
        assert!(descriptors.len() > active);
        assert!(pages.iter().any(|p| p.contains_text("Ihre Raumplanung")));
        assert!(!pages.iter().any(|p| p.contains_text("Eigenleistung")));
    }

    #[test]
    fn test_generate_produces_pdf_bytes() {
        let mut generator = Generator::new(catalog(), tempfile::tempdir().unwrap().path());
        let submission = Submission::from_json(
            r#"{ "id": "abc-123", "haustyp": "stadtvilla", "wall": "climativ" }"#,
        )
        .unwrap();

        let bytes = generator.generate(&submission).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7"));
        assert!(bytes.ends_with(b"%%EOF\n"));
    }

    #[test]
    fn test_generate_twice_reuses_generator() {
        let mut generator = Generator::new(catalog(), tempfile::tempdir().unwrap().path());
        let submission = Submission::from_json(r#"{ "id": "x" }"#).unwrap();
        let first = generator.generate(&submission).unwrap();
        let second = generator.generate(&submission).unwrap();
        assert_eq!(first.len(), second.len());
    }
}
