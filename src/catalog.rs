//! The product catalog: per-category variant lists loaded once from JSON.
//!
//! The catalog is read-only and shared by every generation run. Lookup by
//! (category, id) returns `None` for unknown ids; the page list builder
//! turns that into a skipped page, never an error.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ProspektError;

/// Catalog categories, in the JSON's key names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Walls,
    Innerwalls,
    Daecher,
    Decken,
    Treppen,
    Windows,
    Tiles,
    Haustypen,
    Heizung,
    Lueftung,
}

impl Category {
    pub fn key(&self) -> &'static str {
        match self {
            Category::Walls => "walls",
            Category::Innerwalls => "innerwalls",
            Category::Daecher => "daecher",
            Category::Decken => "decken",
            Category::Treppen => "treppen",
            Category::Windows => "windows",
            Category::Tiles => "tiles",
            Category::Haustypen => "haustypen",
            Category::Heizung => "heizung",
            Category::Lueftung => "lueftung",
        }
    }
}

/// One product variant within a category.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogVariant {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Construction layers in print order (outside in).
    #[serde(default)]
    pub layers: Vec<Layer>,
    /// Free-form key/value specs; insertion order is the print order.
    #[serde(default)]
    pub technical_details: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub advantages: Vec<String>,
    #[serde(default)]
    pub premium_features: Vec<String>,
    #[serde(default)]
    pub comparison_notes: Option<String>,
    /// Product image path, relative to the project root.
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub technical_drawing: Option<String>,
    /// Long-form text used on the house type page.
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub construction_type: Option<String>,
    #[serde(default)]
    pub kfw_compatible: Vec<String>,
}

impl CatalogVariant {
    /// A technical detail as a string, if present and non-empty.
    pub fn detail(&self, key: &str) -> Option<&str> {
        self.technical_details
            .get(key)
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Layer {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub note: String,
}

/// The full product catalog.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub walls: Vec<CatalogVariant>,
    #[serde(default)]
    pub innerwalls: Vec<CatalogVariant>,
    #[serde(default)]
    pub daecher: Vec<CatalogVariant>,
    #[serde(default)]
    pub decken: Vec<CatalogVariant>,
    #[serde(default)]
    pub treppen: Vec<CatalogVariant>,
    #[serde(default)]
    pub windows: Vec<CatalogVariant>,
    #[serde(default)]
    pub tiles: Vec<CatalogVariant>,
    #[serde(default)]
    pub haustypen: Vec<CatalogVariant>,
    #[serde(default)]
    pub heizung: Vec<CatalogVariant>,
    #[serde(default)]
    pub lueftung: Vec<CatalogVariant>,
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self, ProspektError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ProspektError> {
        let data = fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn variants(&self, category: Category) -> &[CatalogVariant] {
        match category {
            Category::Walls => &self.walls,
            Category::Innerwalls => &self.innerwalls,
            Category::Daecher => &self.daecher,
            Category::Decken => &self.decken,
            Category::Treppen => &self.treppen,
            Category::Windows => &self.windows,
            Category::Tiles => &self.tiles,
            Category::Haustypen => &self.haustypen,
            Category::Heizung => &self.heizung,
            Category::Lueftung => &self.lueftung,
        }
    }

    /// Look up a variant by id. `None` id or unknown id both yield `None`.
    pub fn variant(&self, category: Category, id: Option<&str>) -> Option<&CatalogVariant> {
        let id = id?;
        self.variants(category).iter().find(|v| v.id == id)
    }

    /// Validate every selected id against the catalog. Returns one message
    /// per invalid selection; empty means the selection is consistent.
    pub fn validate_selection(&self, submission: &crate::model::Submission) -> Vec<String> {
        let checks: [(Category, &Option<String>, &str); 10] = [
            (Category::Walls, &submission.wall, "Ungültige Wandauswahl"),
            (
                Category::Innerwalls,
                &submission.innerwall,
                "Ungültige Innenwandauswahl",
            ),
            (
                Category::Decken,
                &submission.decke,
                "Ungültige Deckenauswahl",
            ),
            (
                Category::Windows,
                &submission.window,
                "Ungültige Fensterauswahl",
            ),
            (
                Category::Tiles,
                &submission.tiles,
                "Ungültige Dachziegelauswahl",
            ),
            (
                Category::Haustypen,
                &submission.haustyp,
                "Ungültiger Haustyp",
            ),
            (
                Category::Heizung,
                &submission.heizung,
                "Ungültige Heizungsauswahl",
            ),
            (
                Category::Lueftung,
                &submission.lueftung,
                "Ungültige Lüftungsauswahl",
            ),
            (Category::Daecher, &submission.dach, "Ungültige Dachauswahl"),
            (
                Category::Treppen,
                &submission.treppe,
                "Ungültige Treppenauswahl",
            ),
        ];

        let mut errors = Vec::new();
        for (category, id, message) in checks {
            if let Some(id) = id.as_deref() {
                if self.variant(category, Some(id)).is_none() {
                    errors.push(message.to_string());
                }
            }
        }
        errors
    }
}
