//! Section renderers, one module per brochure page.
//!
//! Every renderer paints into a prepared [`PageSurface`] whose chrome (header
//! and footer) the driver has already drawn. Renderers that run out of room
//! drop whole trailing blocks rather than clipping them; a page is never
//! allowed to overflow into the footer.

pub mod advantages;
pub mod advisor;
pub mod certification;
pub mod checklist;
pub mod component;
pub mod contact;
pub mod floor_plan;
pub mod glossary;
pub mod haustyp;
pub mod self_build;
pub mod service_pledge;
pub mod services;
pub mod summary;
pub mod title;

use crate::raster::LoadedImage;
use crate::surface::{DrawOp, PageSurface};

/// Draw an image contain-fitted and centered inside a box.
pub(crate) fn draw_image_contained(
    page: &mut PageSurface,
    image: LoadedImage,
    x: f64,
    y: f64,
    box_width: f64,
    box_height: f64,
) {
    if image.width_px == 0 || image.height_px == 0 {
        return;
    }
    let iw = image.width_px as f64;
    let ih = image.height_px as f64;
    let scale = (box_width / iw).min(box_height / ih);
    let width = iw * scale;
    let height = ih * scale;
    page.push(DrawOp::Image {
        image,
        x: x + (box_width - width) / 2.0,
        y: y + (box_height - height) / 2.0,
        width,
        height,
    });
}
