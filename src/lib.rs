//! Turns a house-building configuration plus a product catalog into a
//! print-ready A4 PDF brochure.
//!
//! The pipeline is deliberately linear: [`pagelist::build_page_list`]
//! evaluates every condition up front and yields an ordered list of page
//! descriptors, the [`driver::Generator`] renders them one by one into
//! draw-op surfaces, and [`pdf::PdfWriter`] serializes the surfaces into
//! PDF 1.7 bytes with embedded fonts and images.
//!
//! ```no_run
//! use prospekt::{Catalog, Generator, Submission};
//!
//! # fn main() -> Result<(), prospekt::ProspektError> {
//! let catalog = Catalog::load("catalog.json".as_ref())?;
//! let submission = Submission::from_json(r#"{ "id": "abc-123" }"#)?;
//!
//! let mut generator = Generator::new(catalog, ".");
//! let pdf = generator.generate(&submission)?;
//! std::fs::write("Leistungsbeschreibung_abc-123.pdf", pdf)?;
//! # Ok(())
//! # }
//! ```

pub mod assets;
pub mod catalog;
pub mod driver;
pub mod error;
pub mod font;
pub mod layout;
pub mod model;
pub mod pagelist;
pub mod pages;
pub mod pdf;
pub mod raster;
pub mod surface;

pub use catalog::{Catalog, CatalogVariant, Category};
pub use driver::Generator;
pub use error::ProspektError;
pub use model::Submission;
