//! Builds the ordered list of pages for one submission.
//!
//! The brochure is a fixed sequence: a prefix of always-on pages, one
//! component page per selected catalog variant, and a suffix of closing
//! pages. Every descriptor carries an inclusion predicate; the driver
//! evaluates it and skips false ones without emitting a page. Catalog
//! resolution happens here once: a selected id that is missing from the
//! catalog is logged and skipped, it never aborts the document.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::assets::AssetResolver;
use crate::catalog::{Catalog, Category};
use crate::error::ProspektError;
use crate::font::FontContext;
use crate::model::Submission;
use crate::pages;
use crate::raster::LoadedImage;
use crate::surface::PageSurface;

/// Everything a page renderer needs besides the submission itself.
pub struct RenderContext<'a> {
    pub catalog: &'a Catalog,
    pub fonts: &'a FontContext,
    pub assets: &'a mut AssetResolver,
    /// Directory that catalog-relative paths like `assets/variants/...`
    /// resolve against.
    pub asset_root: &'a Path,
}

impl RenderContext<'_> {
    /// Absolute path for a catalog-relative asset reference.
    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.asset_root.join(relative)
    }

    /// Load a print-ready image from a catalog reference. Accepts both
    /// relative file paths and inline `data:image/...` sources.
    pub fn image(&mut self, source: &str, max_width: u32) -> Option<LoadedImage> {
        let bytes = if source.starts_with("data:image/") {
            AssetResolver::decode_data_uri(source)?
        } else {
            self.assets.compressed(&self.resolve(source), max_width)?
        };
        LoadedImage::from_bytes(&bytes).ok()
    }

    /// Load the first loadable image from an ordered candidate list.
    pub fn image_from_candidates(
        &mut self,
        candidates: &[PathBuf],
        max_width: u32,
    ) -> Option<LoadedImage> {
        let path = AssetResolver::resolve_first(candidates)?;
        let bytes = self.assets.compressed(&path, max_width)?;
        LoadedImage::from_bytes(&bytes).ok()
    }
}

pub type RenderFn =
    Box<dyn Fn(&mut PageSurface, &Submission, &mut RenderContext) -> Result<(), ProspektError>>;
pub type ConditionFn = Box<dyn Fn(&Submission) -> bool>;

/// One page of the brochure, ready to render. This is the seam a new
/// section type implements: a title, an inclusion predicate, and a render
/// callback.
pub struct PageDescriptor {
    /// Header title. `None` suppresses all chrome (the title page).
    pub title: Option<String>,
    /// Evaluated by the driver; false skips the page with no side effects.
    pub condition: ConditionFn,
    pub render: RenderFn,
}

impl PageDescriptor {
    fn chromeless(render: RenderFn) -> Self {
        Self {
            title: None,
            condition: Box::new(|_| true),
            render,
        }
    }

    fn titled(title: impl Into<String>, render: RenderFn) -> Self {
        Self::titled_if(title, Box::new(|_| true), render)
    }

    fn titled_if(title: impl Into<String>, condition: ConditionFn, render: RenderFn) -> Self {
        Self {
            title: Some(title.into()),
            condition,
            render,
        }
    }
}

/// Component page definitions, in brochure order. The stair and ventilation
/// systems are opt-in and sit behind the "keine" sentinel.
struct ComponentDef {
    heading: &'static str,
    category_name: &'static str,
    category: Category,
    optional: bool,
}

fn component_defs(submission: &Submission) -> Vec<(ComponentDef, Option<String>)> {
    vec![
        (
            ComponentDef {
                heading: "5.1 Ihr Haustyp",
                category_name: "Ihr Haustyp",
                category: Category::Haustypen,
                optional: false,
            },
            submission.haustyp.clone(),
        ),
        (
            ComponentDef {
                heading: "5.2 Außenwandsystem",
                category_name: "Außenwandsystem",
                category: Category::Walls,
                optional: false,
            },
            submission.wall.clone(),
        ),
        (
            ComponentDef {
                heading: "5.3 Innenwandsystem",
                category_name: "Innenwandsystem",
                category: Category::Innerwalls,
                optional: false,
            },
            submission.innerwall.clone(),
        ),
        (
            ComponentDef {
                heading: "5.4 Deckensystem",
                category_name: "Deckensystem",
                category: Category::Decken,
                optional: false,
            },
            submission.decke.clone(),
        ),
        (
            ComponentDef {
                heading: "5.5 Fenstersystem",
                category_name: "Fenstersystem",
                category: Category::Windows,
                optional: false,
            },
            submission.window.clone(),
        ),
        (
            ComponentDef {
                heading: "5.6 Dacheindeckung",
                category_name: "Dacheindeckung",
                category: Category::Tiles,
                optional: false,
            },
            submission.tiles.clone(),
        ),
        (
            ComponentDef {
                heading: "5.7 Dachform",
                category_name: "Dachform",
                category: Category::Daecher,
                optional: false,
            },
            submission.dach.clone(),
        ),
        (
            ComponentDef {
                heading: "6.1 Heizungssystem",
                category_name: "Heizungssystem",
                category: Category::Heizung,
                optional: false,
            },
            submission.heizung.clone(),
        ),
        // The staircase chapter lands after heating; chapter numbers are
        // fixed labels, not the append order.
        (
            ComponentDef {
                heading: "5.8 Treppensystem",
                category_name: "Treppensystem",
                category: Category::Treppen,
                optional: true,
            },
            submission.treppe.clone(),
        ),
        (
            ComponentDef {
                heading: "6.2 Lüftungssystem",
                category_name: "Lüftungssystem",
                category: Category::Lueftung,
                optional: true,
            },
            submission.lueftung.clone(),
        ),
    ]
}

/// Assemble the ordered page list for one submission.
pub fn build_page_list(submission: &Submission, catalog: &Catalog) -> Vec<PageDescriptor> {
    let mut list: Vec<PageDescriptor> = Vec::new();

    // Prefix: always present
    list.push(PageDescriptor::chromeless(Box::new(pages::title::render)));
    list.push(PageDescriptor::titled(
        "QDF-Zertifizierte Qualität",
        Box::new(pages::certification::render),
    ));
    list.push(PageDescriptor::titled(
        "Ihre Konfiguration auf einen Blick",
        Box::new(pages::summary::render),
    ));
    list.push(PageDescriptor::titled(
        "Ihre Leistungen im Überblick",
        Box::new(pages::services::render),
    ));
    list.push(PageDescriptor::titled(
        "Ihre 7 Qualitätsvorteile",
        Box::new(pages::advantages::render),
    ));
    list.push(PageDescriptor::titled(
        "Unser Service für Sie",
        Box::new(pages::service_pledge::render),
    ));

    // Component pages
    for (def, selected) in component_defs(submission) {
        let Some(id) = selected else {
            debug!(category = def.category_name, "no selection, skipping page");
            continue;
        };
        if def.optional && id == "keine" {
            debug!(category = def.category_name, "opted out, skipping page");
            continue;
        }
        let Some(variant) = catalog.variant(def.category, Some(&id)) else {
            warn!(
                category = def.category_name,
                id, "selected id not in catalog, skipping page"
            );
            continue;
        };
        if def.optional && variant.id == "keine" {
            continue;
        }

        let category = def.category;
        let category_name = def.category_name;
        let variant_id = variant.id.clone();
        if matches!(category, Category::Haustypen) {
            list.push(PageDescriptor::titled(
                def.heading,
                Box::new(move |page, _submission, ctx| {
                    if let Some(v) = ctx.catalog.variant(category, Some(&variant_id)) {
                        pages::haustyp::render(page, v, ctx)?;
                    }
                    Ok(())
                }),
            ));
        } else {
            list.push(PageDescriptor::titled(
                def.heading,
                Box::new(move |page, _submission, ctx| {
                    if let Some(v) = ctx.catalog.variant(category, Some(&variant_id)) {
                        pages::component::render(page, v, category, category_name, ctx)?;
                    }
                    Ok(())
                }),
            ));
        }
    }

    // Suffix: always listed, conditionally rendered
    list.push(PageDescriptor::titled_if(
        "Ihre Raumplanung",
        Box::new(Submission::has_rooms),
        Box::new(pages::floor_plan::render),
    ));
    list.push(PageDescriptor::titled_if(
        "Ihre geplanten Eigenleistungen",
        Box::new(|s: &Submission| !s.eigenleistungen.is_empty()),
        Box::new(pages::self_build::render),
    ));
    list.push(PageDescriptor::titled(
        "Ihre Checkliste für den Anbietervergleich",
        Box::new(pages::checklist::render),
    ));
    list.push(PageDescriptor::titled(
        "Glossar – Fachbegriffe erklärt",
        Box::new(pages::glossary::render),
    ));
    list.push(PageDescriptor::titled_if(
        "Ihr persönlicher Fachberater",
        Box::new(Submission::has_advisor),
        Box::new(pages::advisor::render),
    ));
    list.push(PageDescriptor::titled(
        "Kontakt",
        Box::new(pages::contact::render),
    ));

    list
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_json(
            r#"{
                "haustypen": [{ "id": "stadtvilla", "name": "Stadtvilla" }],
                "walls": [{ "id": "climativ", "name": "Climativ" }],
                "heizung": [{ "id": "waermepumpe", "name": "Wärmepumpe" }],
                "treppen": [
                    { "id": "keine", "name": "Keine Treppe" },
                    { "id": "holz", "name": "Holztreppe" }
                ],
                "lueftung": [{ "id": "zentral", "name": "Zentrale Lüftung" }]
            }"#,
        )
        .unwrap()
    }

    fn titles(list: &[PageDescriptor]) -> Vec<Option<&str>> {
        list.iter().map(|p| p.title.as_deref()).collect()
    }

    /// Titles of the descriptors whose condition holds for `submission`.
    fn active_titles<'a>(
        list: &'a [PageDescriptor],
        submission: &Submission,
    ) -> Vec<Option<&'a str>> {
        list.iter()
            .filter(|p| (p.condition)(submission))
            .map(|p| p.title.as_deref())
            .collect()
    }

    #[test]
    fn test_minimal_submission_activates_prefix_and_suffix_only() {
        let submission = Submission::from_json(r#"{ "id": "x" }"#).unwrap();
        let list = build_page_list(&submission, &catalog());

        let expected: Vec<Option<&str>> = vec![
            None,
            Some("QDF-Zertifizierte Qualität"),
            Some("Ihre Konfiguration auf einen Blick"),
            Some("Ihre Leistungen im Überblick"),
            Some("Ihre 7 Qualitätsvorteile"),
            Some("Unser Service für Sie"),
            Some("Ihre Checkliste für den Anbietervergleich"),
            Some("Glossar – Fachbegriffe erklärt"),
            Some("Kontakt"),
        ];
        assert_eq!(active_titles(&list, &submission), expected);
    }

    #[test]
    fn test_conditional_pages_stay_listed_but_gated() {
        let minimal = Submission::from_json(r#"{ "id": "x" }"#).unwrap();
        let list = build_page_list(&minimal, &catalog());

        // The room-plan descriptor is always in the list; its condition
        // decides whether the driver renders it.
        let floor_plan = list
            .iter()
            .find(|p| p.title.as_deref() == Some("Ihre Raumplanung"))
            .unwrap();
        assert!(!(floor_plan.condition)(&minimal));

        let with_rooms = Submission::from_json(
            r#"{ "id": "x", "rooms": { "erdgeschoss": [{ "name": "Küche" }] } }"#,
        )
        .unwrap();
        assert!((floor_plan.condition)(&with_rooms));
    }

    #[test]
    fn test_staircase_page_follows_heating_page() {
        let submission = Submission::from_json(
            r#"{ "id": "x", "heizung": "waermepumpe", "treppe": "holz" }"#,
        )
        .unwrap();
        let list = build_page_list(&submission, &catalog());
        let titles = titles(&list);
        let heizung = titles.iter().position(|t| *t == Some("6.1 Heizungssystem"));
        let treppe = titles.iter().position(|t| *t == Some("5.8 Treppensystem"));
        assert!(heizung.is_some());
        assert!(treppe.is_some());
        assert!(heizung < treppe);
    }

    #[test]
    fn test_selected_components_add_pages_in_order() {
        let submission = Submission::from_json(
            r#"{ "id": "x", "haustyp": "stadtvilla", "wall": "climativ" }"#,
        )
        .unwrap();
        let list = build_page_list(&submission, &catalog());
        let titles = titles(&list);
        let haustyp = titles.iter().position(|t| *t == Some("5.1 Ihr Haustyp"));
        let wall = titles.iter().position(|t| *t == Some("5.2 Außenwandsystem"));
        assert!(haustyp.is_some());
        assert!(wall.is_some());
        assert!(haustyp < wall);
    }

    #[test]
    fn test_unknown_id_is_skipped() {
        let submission =
            Submission::from_json(r#"{ "id": "x", "wall": "doesnotexist" }"#).unwrap();
        let list = build_page_list(&submission, &catalog());
        assert!(!titles(&list).contains(&Some("5.2 Außenwandsystem")));
    }

    #[test]
    fn test_keine_sentinel_suppresses_optional_pages() {
        let none = Submission::from_json(r#"{ "id": "x", "treppe": "keine" }"#).unwrap();
        let some = Submission::from_json(r#"{ "id": "x", "treppe": "holz" }"#).unwrap();
        let missing = Submission::from_json(r#"{ "id": "x" }"#).unwrap();

        let cat = catalog();
        assert_eq!(
            titles(&build_page_list(&none, &cat)),
            titles(&build_page_list(&missing, &cat))
        );
        assert!(titles(&build_page_list(&some, &cat)).contains(&Some("5.8 Treppensystem")));
    }

    #[test]
    fn test_conditional_suffix_pages() {
        let submission = Submission::from_json(
            r#"{
                "id": "x",
                "rooms": { "erdgeschoss": [{ "name": "Küche" }] },
                "eigenleistungen": ["Malerarbeiten"],
                "berater_name": "M. Weber"
            }"#,
        )
        .unwrap();
        let list = build_page_list(&submission, &catalog());
        let active = active_titles(&list, &submission);
        assert!(active.contains(&Some("Ihre Raumplanung")));
        assert!(active.contains(&Some("Ihre geplanten Eigenleistungen")));
        assert!(active.contains(&Some("Ihr persönlicher Fachberater")));
        // Kontakt is always last
        assert_eq!(active.last(), Some(&Some("Kontakt")));
    }
}
