//! From-scratch PDF 1.7 writer.
//!
//! Takes rendered page surfaces and writes the raw PDF bytes directly. The
//! subset of the format a brochure needs is small enough that owning the
//! serializer beats carrying a PDF library: standard Type1 font references,
//! embedded CIDFontType2 for the heading face, image XObjects, and flate
//! compressed content streams.
//!
//! ```text
//! %PDF-1.7            <- header
//! 1 0 obj ... endobj  <- objects (fonts, pages, content streams, images)
//! 2 0 obj ... endobj
//! ...
//! xref                <- byte offsets of each object
//! trailer             <- points to the root object
//! %%EOF
//! ```
//!
//! Surfaces use top-down coordinates; everything is flipped into PDF space
//! here and nowhere else. Text ops carry the top of the line box, so the
//! baseline is recovered by subtracting the face's scaled ascender.

use std::collections::{HashMap, HashSet};
use std::fmt::Write as FmtWrite; // for write! on String
use std::io::Write as IoWrite; // for write! on Vec<u8>

use miniz_oxide::deflate::compress_to_vec_zlib;

use crate::error::ProspektError;
use crate::font::{FontContext, FontData, FontKey};
use crate::raster::{ImagePixelData, JpegColorSpace, LoadedImage};
use crate::surface::{Color, DrawOp, PageSurface};

/// Document Info dictionary fields.
#[derive(Debug, Clone, Default)]
pub struct DocInfo {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
}

pub struct PdfWriter;

/// Embedding data for a custom TrueType font.
struct CustomFontEmbedData {
    char_to_gid: HashMap<char, u16>,
}

/// Tracks allocated PDF objects during writing.
struct PdfBuilder {
    objects: Vec<PdfObject>,
    /// Registered fonts in /F0, /F1, ... order.
    font_objects: Vec<(FontKey, usize)>,
    custom_font_data: HashMap<FontKey, CustomFontEmbedData>,
    /// XObject obj IDs for images, indexed as /Im0, /Im1, ...
    image_objects: Vec<usize>,
    /// Maps (page_index, nth image op on that page) to an image index.
    image_index_map: HashMap<(usize, usize), usize>,
}

struct PdfObject {
    data: Vec<u8>,
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfWriter {
    pub fn new() -> Self {
        Self
    }

    /// Serialize rendered pages into a PDF byte vector.
    pub fn write(
        &self,
        pages: &[PageSurface],
        info: &DocInfo,
        fonts: &FontContext,
    ) -> Result<Vec<u8>, ProspektError> {
        let mut builder = PdfBuilder {
            objects: Vec::new(),
            font_objects: Vec::new(),
            custom_font_data: HashMap::new(),
            image_objects: Vec::new(),
            image_index_map: HashMap::new(),
        };

        // Reserve object IDs:
        // 0 = placeholder (PDF objects are 1-indexed)
        // 1 = Catalog
        // 2 = Pages (page tree root)
        // 3+ = fonts, images, then per page a content stream and page dict
        builder.objects.push(PdfObject { data: vec![] });
        builder.objects.push(PdfObject { data: vec![] });
        builder.objects.push(PdfObject { data: vec![] });

        self.register_fonts(&mut builder, pages, fonts)?;
        self.register_images(&mut builder, pages);

        let mut page_obj_ids: Vec<usize> = Vec::new();

        for (page_idx, page) in pages.iter().enumerate() {
            let content = self.build_content_stream(page, page_idx, &builder, fonts);
            let compressed = compress_to_vec_zlib(content.as_bytes(), 6);

            let content_obj_id = builder.objects.len();
            let mut content_data: Vec<u8> = Vec::new();
            let _ = write!(
                content_data,
                "<< /Length {} /Filter /FlateDecode >>\nstream\n",
                compressed.len()
            );
            content_data.extend_from_slice(&compressed);
            content_data.extend_from_slice(b"\nendstream");
            builder.objects.push(PdfObject { data: content_data });

            let page_obj_id = builder.objects.len();
            let font_resources = Self::build_font_resource_dict(&builder.font_objects);
            let xobject_resources = Self::build_xobject_resource_dict(page_idx, &builder);
            let resources = if xobject_resources.is_empty() {
                format!("/Font << {} >>", font_resources)
            } else {
                format!(
                    "/Font << {} >> /XObject << {} >>",
                    font_resources, xobject_resources
                )
            };
            let page_dict = format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] \
                 /Contents {} 0 R /Resources << {} >> >>",
                page.width, page.height, content_obj_id, resources
            );
            builder.objects.push(PdfObject {
                data: page_dict.into_bytes(),
            });
            page_obj_ids.push(page_obj_id);
        }

        // Catalog (object 1)
        builder.objects[1].data = b"<< /Type /Catalog /Pages 2 0 R >>".to_vec();

        // Pages tree (object 2)
        let kids: String = page_obj_ids
            .iter()
            .map(|id| format!("{} 0 R", id))
            .collect::<Vec<_>>()
            .join(" ");
        builder.objects[2].data = format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids,
            page_obj_ids.len()
        )
        .into_bytes();

        // Info dictionary
        let info_obj_id = if info.title.is_some() || info.author.is_some() {
            let id = builder.objects.len();
            let mut dict = String::from("<< ");
            if let Some(ref title) = info.title {
                let _ = write!(dict, "/Title ({}) ", Self::escape_pdf_string(title));
            }
            if let Some(ref author) = info.author {
                let _ = write!(dict, "/Author ({}) ", Self::escape_pdf_string(author));
            }
            if let Some(ref subject) = info.subject {
                let _ = write!(dict, "/Subject ({}) ", Self::escape_pdf_string(subject));
            }
            let _ = write!(dict, "/Producer (Prospekt 0.3) /Creator (Prospekt) >>");
            builder.objects.push(PdfObject {
                data: dict.into_bytes(),
            });
            Some(id)
        } else {
            None
        };

        Ok(Self::serialize(&builder, info_obj_id))
    }

    /// Build the content stream for one page, flipping into PDF space.
    fn build_content_stream(
        &self,
        page: &PageSurface,
        page_idx: usize,
        builder: &PdfBuilder,
        fonts: &FontContext,
    ) -> String {
        let mut stream = String::new();
        let h = page.height;
        let mut image_counter = 0usize;

        for op in &page.ops {
            match op {
                DrawOp::Rect {
                    x,
                    y,
                    width,
                    height,
                    fill,
                    stroke,
                    corner_radius,
                } => {
                    let pdf_y = h - y - height;
                    if let Some(fill) = fill {
                        let (r, g, b) = fill.to_unit();
                        let _ = write!(stream, "q\n{:.3} {:.3} {:.3} rg\n", r, g, b);
                        Self::write_rect_path(&mut stream, *x, pdf_y, *width, *height, *corner_radius);
                        let _ = write!(stream, "f\nQ\n");
                    }
                    if let Some((color, line_width)) = stroke {
                        let (r, g, b) = color.to_unit();
                        let _ = write!(
                            stream,
                            "q\n{:.3} {:.3} {:.3} RG\n{:.2} w\n",
                            r, g, b, line_width
                        );
                        Self::write_rect_path(&mut stream, *x, pdf_y, *width, *height, *corner_radius);
                        let _ = write!(stream, "S\nQ\n");
                    }
                }

                DrawOp::Line {
                    x1,
                    y1,
                    x2,
                    y2,
                    color,
                    width,
                } => {
                    let (r, g, b) = color.to_unit();
                    let _ = write!(
                        stream,
                        "q\n{:.3} {:.3} {:.3} RG\n{:.2} w\n{:.2} {:.2} m\n{:.2} {:.2} l\nS\nQ\n",
                        r,
                        g,
                        b,
                        width,
                        x1,
                        h - y1,
                        x2,
                        h - y2
                    );
                }

                DrawOp::Text {
                    x,
                    y,
                    text,
                    family,
                    weight,
                    italic,
                    size,
                    color,
                } => {
                    self.write_text_op(
                        &mut stream,
                        builder,
                        fonts,
                        h,
                        *x,
                        *y,
                        text,
                        family,
                        *weight,
                        *italic,
                        *size,
                        *color,
                    );
                }

                DrawOp::Image {
                    x,
                    y,
                    width,
                    height,
                    ..
                } => {
                    let nth = image_counter;
                    image_counter += 1;
                    let pdf_y = h - y - height;
                    if let Some(&img_idx) = builder.image_index_map.get(&(page_idx, nth)) {
                        let _ = write!(
                            stream,
                            "q\n{:.4} 0 0 {:.4} {:.2} {:.2} cm\n/Im{} Do\nQ\n",
                            width, height, x, pdf_y, img_idx
                        );
                    } else {
                        // Grey placeholder if the image was never registered
                        let _ = write!(
                            stream,
                            "q\n0.9 0.9 0.9 rg\n{:.2} {:.2} {:.2} {:.2} re\nf\nQ\n",
                            x, pdf_y, width, height
                        );
                    }
                }
            }
        }

        stream
    }

    #[allow(clippy::too_many_arguments)]
    fn write_text_op(
        &self,
        stream: &mut String,
        builder: &PdfBuilder,
        fonts: &FontContext,
        page_height: f64,
        x: f64,
        y: f64,
        text: &str,
        family: &str,
        weight: u32,
        italic: bool,
        size: f64,
        color: Color,
    ) {
        let snapped = if weight >= 600 { 700 } else { 400 };
        let idx = Self::font_index(family, snapped, italic, &builder.font_objects);
        let key = &builder.font_objects[idx].0;

        // Baseline sits one scaled ascender below the top of the line box
        let baseline = page_height - y - fonts.ascent(family, weight, italic) * size;

        let (r, g, b) = color.to_unit();
        let _ = write!(stream, "BT\n{:.3} {:.3} {:.3} rg\n", r, g, b);
        let _ = write!(
            stream,
            "/F{} {:.1} Tf\n{:.2} {:.2} Td\n",
            idx, size, x, baseline
        );

        if let Some(embed) = builder.custom_font_data.get(key) {
            // Custom font: hex glyph ID encoding (Identity-H)
            let mut hex = String::new();
            for ch in text.chars() {
                let gid = embed.char_to_gid.get(&ch).copied().unwrap_or(0);
                let _ = write!(hex, "{:04X}", gid);
            }
            let _ = write!(stream, "<{}> Tj\n", hex);
        } else {
            let mut text_str = String::new();
            for ch in text.chars() {
                let byte = Self::unicode_to_winansi(ch).unwrap_or(b'?');
                match byte {
                    b'\\' => text_str.push_str("\\\\"),
                    b'(' => text_str.push_str("\\("),
                    b')' => text_str.push_str("\\)"),
                    0x20..=0x7E => text_str.push(byte as char),
                    _ => {
                        // Octal escape for bytes outside ASCII printable range
                        let _ = write!(text_str, "\\{:03o}", byte);
                    }
                }
            }
            let _ = write!(stream, "({}) Tj\n", text_str);
        }

        let _ = write!(stream, "ET\n");
    }

    /// Rectangle path, rounded when `radius > 0`. Bezier circle constant.
    fn write_rect_path(stream: &mut String, x: f64, y: f64, w: f64, h: f64, radius: f64) {
        if radius <= 0.0 {
            let _ = write!(stream, "{:.2} {:.2} {:.2} {:.2} re\n", x, y, w, h);
            return;
        }
        let k = 0.5522847498;
        let r = radius.min(w / 2.0).min(h / 2.0);

        let _ = write!(stream, "{:.2} {:.2} m\n", x + r, y);
        let _ = write!(stream, "{:.2} {:.2} l\n", x + w - r, y);
        let _ = write!(
            stream,
            "{:.2} {:.2} {:.2} {:.2} {:.2} {:.2} c\n",
            x + w - r + r * k,
            y,
            x + w,
            y + r - r * k,
            x + w,
            y + r
        );
        let _ = write!(stream, "{:.2} {:.2} l\n", x + w, y + h - r);
        let _ = write!(
            stream,
            "{:.2} {:.2} {:.2} {:.2} {:.2} {:.2} c\n",
            x + w,
            y + h - r + r * k,
            x + w - r + r * k,
            y + h,
            x + w - r,
            y + h
        );
        let _ = write!(stream, "{:.2} {:.2} l\n", x + r, y + h);
        let _ = write!(
            stream,
            "{:.2} {:.2} {:.2} {:.2} {:.2} {:.2} c\n",
            x + r - r * k,
            y + h,
            x,
            y + h - r + r * k,
            x,
            y + h - r
        );
        let _ = write!(stream, "{:.2} {:.2} l\n", x, y + r);
        let _ = write!(
            stream,
            "{:.2} {:.2} {:.2} {:.2} {:.2} {:.2} c\n",
            x,
            y + r - r * k,
            x + r - r * k,
            y,
            x + r,
            y
        );
        let _ = write!(stream, "h\n");
    }

    /// Register every (family, weight, italic) combination used on any page.
    fn register_fonts(
        &self,
        builder: &mut PdfBuilder,
        pages: &[PageSurface],
        fonts: &FontContext,
    ) -> Result<(), ProspektError> {
        // Collect font keys and the characters used per font
        let mut font_chars: HashMap<FontKey, HashSet<char>> = HashMap::new();
        for page in pages {
            for op in &page.ops {
                if let DrawOp::Text {
                    text,
                    family,
                    weight,
                    italic,
                    ..
                } = op
                {
                    let key = FontKey {
                        family: family.to_string(),
                        weight: if *weight >= 600 { 700 } else { 400 },
                        italic: *italic,
                    };
                    font_chars.entry(key).or_default().extend(text.chars());
                }
            }
        }

        let mut keys: Vec<FontKey> = font_chars.keys().cloned().collect();
        keys.sort_by(|a, b| {
            a.family
                .cmp(&b.family)
                .then(a.weight.cmp(&b.weight))
                .then(a.italic.cmp(&b.italic))
        });

        // Always have at least Helvetica
        if keys.is_empty() {
            keys.push(FontKey {
                family: "Helvetica".to_string(),
                weight: 400,
                italic: false,
            });
        }

        for key in &keys {
            match fonts.resolve(&key.family, key.weight, key.italic) {
                FontData::Standard(std_font) => {
                    let obj_id = builder.objects.len();
                    let font_dict = format!(
                        "<< /Type /Font /Subtype /Type1 /BaseFont /{} \
                         /Encoding /WinAnsiEncoding >>",
                        std_font.pdf_name()
                    );
                    builder.objects.push(PdfObject {
                        data: font_dict.into_bytes(),
                    });
                    builder.font_objects.push((key.clone(), obj_id));
                }
                FontData::Custom { data, .. } => {
                    let used_chars = font_chars.get(key).cloned().unwrap_or_default();
                    let type0_id =
                        Self::write_custom_font_objects(builder, key, data, &used_chars)?;
                    builder.font_objects.push((key.clone(), type0_id));
                }
            }
        }

        Ok(())
    }

    /// Create XObjects for every image op and record their /ImN indices.
    fn register_images(&self, builder: &mut PdfBuilder, pages: &[PageSurface]) {
        for (page_idx, page) in pages.iter().enumerate() {
            let mut nth = 0usize;
            for op in &page.ops {
                if let DrawOp::Image { image, .. } = op {
                    let img_idx = builder.image_objects.len();
                    let xobj_id = Self::write_image_xobject(builder, image);
                    builder.image_objects.push(xobj_id);
                    builder.image_index_map.insert((page_idx, nth), img_idx);
                    nth += 1;
                }
            }
        }
    }

    /// Write one image as one or two XObjects (SMask for alpha).
    /// Returns the main XObject ID.
    fn write_image_xobject(builder: &mut PdfBuilder, image: &LoadedImage) -> usize {
        match &image.pixel_data {
            ImagePixelData::Jpeg { data, color_space } => {
                let color_space_str = match color_space {
                    JpegColorSpace::DeviceRGB => "/DeviceRGB",
                    JpegColorSpace::DeviceGray => "/DeviceGray",
                };

                let obj_id = builder.objects.len();
                let mut obj_data: Vec<u8> = Vec::new();
                let _ = write!(
                    obj_data,
                    "<< /Type /XObject /Subtype /Image \
                     /Width {} /Height {} \
                     /ColorSpace {} \
                     /BitsPerComponent 8 \
                     /Filter /DCTDecode \
                     /Length {} >>\nstream\n",
                    image.width_px,
                    image.height_px,
                    color_space_str,
                    data.len()
                );
                obj_data.extend_from_slice(data);
                obj_data.extend_from_slice(b"\nendstream");
                builder.objects.push(PdfObject { data: obj_data });
                obj_id
            }

            ImagePixelData::Decoded { rgb, alpha } => {
                let smask_id = alpha.as_ref().map(|alpha_data| {
                    let compressed_alpha = compress_to_vec_zlib(alpha_data, 6);
                    let smask_obj_id = builder.objects.len();
                    let mut smask_data: Vec<u8> = Vec::new();
                    let _ = write!(
                        smask_data,
                        "<< /Type /XObject /Subtype /Image \
                         /Width {} /Height {} \
                         /ColorSpace /DeviceGray \
                         /BitsPerComponent 8 \
                         /Filter /FlateDecode \
                         /Length {} >>\nstream\n",
                        image.width_px,
                        image.height_px,
                        compressed_alpha.len()
                    );
                    smask_data.extend_from_slice(&compressed_alpha);
                    smask_data.extend_from_slice(b"\nendstream");
                    builder.objects.push(PdfObject { data: smask_data });
                    smask_obj_id
                });

                let compressed_rgb = compress_to_vec_zlib(rgb, 6);
                let obj_id = builder.objects.len();
                let mut obj_data: Vec<u8> = Vec::new();

                let smask_ref = smask_id
                    .map(|id| format!(" /SMask {} 0 R", id))
                    .unwrap_or_default();

                let _ = write!(
                    obj_data,
                    "<< /Type /XObject /Subtype /Image \
                     /Width {} /Height {} \
                     /ColorSpace /DeviceRGB \
                     /BitsPerComponent 8 \
                     /Filter /FlateDecode \
                     /Length {}{} >>\nstream\n",
                    image.width_px,
                    image.height_px,
                    compressed_rgb.len(),
                    smask_ref
                );
                obj_data.extend_from_slice(&compressed_rgb);
                obj_data.extend_from_slice(b"\nendstream");
                builder.objects.push(PdfObject { data: obj_data });
                obj_id
            }
        }
    }

    fn build_xobject_resource_dict(page_idx: usize, builder: &PdfBuilder) -> String {
        let mut entries: Vec<(usize, usize)> = Vec::new();
        for (&(pidx, _), &img_idx) in &builder.image_index_map {
            if pidx == page_idx {
                entries.push((img_idx, builder.image_objects[img_idx]));
            }
        }
        if entries.is_empty() {
            return String::new();
        }
        entries.sort_by_key(|(idx, _)| *idx);
        entries.dedup();
        entries
            .iter()
            .map(|(idx, obj_id)| format!("/Im{} {} 0 R", idx, obj_id))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Write the 5 CIDFont objects for an embedded TrueType font: FontFile2,
    /// FontDescriptor, CIDFont, ToUnicode CMap and the root Type0 dictionary.
    /// The full font is embedded; brochures use one heading face, so the
    /// size win from subsetting would not pay for the complexity.
    fn write_custom_font_objects(
        builder: &mut PdfBuilder,
        key: &FontKey,
        ttf_data: &[u8],
        used_chars: &HashSet<char>,
    ) -> Result<usize, ProspektError> {
        let face = ttf_parser::Face::parse(ttf_data, 0).map_err(|e| {
            ProspektError::Font(format!(
                "failed to parse TTF data for font '{}': {}",
                key.family, e
            ))
        })?;

        let units_per_em = face.units_per_em();
        let ascender = face.ascender();
        let descender = face.descender();
        let scale = 1000.0 / units_per_em as f64;

        let mut char_to_gid: HashMap<char, u16> = HashMap::new();
        for &ch in used_chars {
            if let Some(gid) = face.glyph_index(ch) {
                char_to_gid.insert(ch, gid.0);
            }
        }

        let pdf_font_name = Self::sanitize_font_name(&key.family, key.weight, key.italic);

        // 1. FontFile2 stream
        let compressed_ttf = compress_to_vec_zlib(ttf_data, 6);
        let fontfile2_id = builder.objects.len();
        let mut fontfile2_data: Vec<u8> = Vec::new();
        let _ = write!(
            fontfile2_data,
            "<< /Length {} /Length1 {} /Filter /FlateDecode >>\nstream\n",
            compressed_ttf.len(),
            ttf_data.len()
        );
        fontfile2_data.extend_from_slice(&compressed_ttf);
        fontfile2_data.extend_from_slice(b"\nendstream");
        builder.objects.push(PdfObject {
            data: fontfile2_data,
        });

        // 2. FontDescriptor
        let font_descriptor_id = builder.objects.len();
        let bbox = face.global_bounding_box();
        let bbox_str = format!(
            "[{} {} {} {}]",
            (bbox.x_min as f64 * scale) as i32,
            (bbox.y_min as f64 * scale) as i32,
            (bbox.x_max as f64 * scale) as i32,
            (bbox.y_max as f64 * scale) as i32,
        );
        let cap_height = face.capital_height().unwrap_or(ascender) as f64 * scale;
        let stem_v = if key.weight >= 700 { 120 } else { 80 };

        let font_descriptor_dict = format!(
            "<< /Type /FontDescriptor /FontName /{} /Flags 4 \
             /FontBBox {} /ItalicAngle {} \
             /Ascent {} /Descent {} /CapHeight {} /StemV {} \
             /FontFile2 {} 0 R >>",
            pdf_font_name,
            bbox_str,
            if key.italic { -12 } else { 0 },
            (ascender as f64 * scale) as i32,
            (descender as f64 * scale) as i32,
            cap_height as i32,
            stem_v,
            fontfile2_id,
        );
        builder.objects.push(PdfObject {
            data: font_descriptor_dict.into_bytes(),
        });

        // 3. CIDFont dictionary (DescendantFont)
        let cidfont_id = builder.objects.len();
        let w_array = Self::build_w_array(&char_to_gid, &face, units_per_em);
        let default_width = face
            .glyph_hor_advance(ttf_parser::GlyphId(0))
            .map(|adv| (adv as f64 * scale) as u32)
            .unwrap_or(1000);
        let cidfont_dict = format!(
            "<< /Type /Font /Subtype /CIDFontType2 /BaseFont /{} \
             /CIDSystemInfo << /Registry (Adobe) /Ordering (Identity) /Supplement 0 >> \
             /FontDescriptor {} 0 R /DW {} /W {} \
             /CIDToGIDMap /Identity >>",
            pdf_font_name, font_descriptor_id, default_width, w_array,
        );
        builder.objects.push(PdfObject {
            data: cidfont_dict.into_bytes(),
        });

        // 4. ToUnicode CMap
        let tounicode_id = builder.objects.len();
        let cmap_content = Self::build_tounicode_cmap(&char_to_gid, &pdf_font_name);
        let compressed_cmap = compress_to_vec_zlib(cmap_content.as_bytes(), 6);
        let mut tounicode_data: Vec<u8> = Vec::new();
        let _ = write!(
            tounicode_data,
            "<< /Length {} /Filter /FlateDecode >>\nstream\n",
            compressed_cmap.len()
        );
        tounicode_data.extend_from_slice(&compressed_cmap);
        tounicode_data.extend_from_slice(b"\nendstream");
        builder.objects.push(PdfObject {
            data: tounicode_data,
        });

        // 5. Type0 font dictionary (the root, referenced by /Resources)
        let type0_id = builder.objects.len();
        let type0_dict = format!(
            "<< /Type /Font /Subtype /Type0 /BaseFont /{} \
             /Encoding /Identity-H \
             /DescendantFonts [{} 0 R] \
             /ToUnicode {} 0 R >>",
            pdf_font_name, cidfont_id, tounicode_id,
        );
        builder.objects.push(PdfObject {
            data: type0_dict.into_bytes(),
        });

        builder
            .custom_font_data
            .insert(key.clone(), CustomFontEmbedData { char_to_gid });

        Ok(type0_id)
    }

    /// /W array with per-glyph widths: [gid [width] gid [width] ...]
    fn build_w_array(
        char_to_gid: &HashMap<char, u16>,
        face: &ttf_parser::Face,
        units_per_em: u16,
    ) -> String {
        let scale = 1000.0 / units_per_em as f64;

        let mut entries: Vec<(u16, u32)> = Vec::new();
        let mut seen_gids: HashSet<u16> = HashSet::new();

        for &gid in char_to_gid.values() {
            if !seen_gids.insert(gid) {
                continue;
            }
            let advance = face.glyph_hor_advance(ttf_parser::GlyphId(gid)).unwrap_or(0);
            entries.push((gid, (advance as f64 * scale) as u32));
        }

        entries.sort_by_key(|(gid, _)| *gid);

        let mut result = String::from("[");
        for (gid, width) in &entries {
            let _ = write!(result, " {} [{}]", gid, width);
        }
        result.push_str(" ]");
        result
    }

    /// ToUnicode CMap for text extraction and copy-paste.
    fn build_tounicode_cmap(char_to_gid: &HashMap<char, u16>, font_name: &str) -> String {
        let mut gid_to_unicode: Vec<(u16, u32)> = char_to_gid
            .iter()
            .map(|(&ch, &gid)| (gid, ch as u32))
            .collect();
        gid_to_unicode.sort_by_key(|(gid, _)| *gid);

        let mut cmap = String::new();
        let _ = write!(cmap, "/CIDInit /ProcSet findresource begin\n");
        let _ = write!(cmap, "12 dict begin\n");
        let _ = write!(cmap, "begincmap\n");
        let _ = write!(cmap, "/CIDSystemInfo\n");
        let _ = write!(cmap, "<< /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def\n");
        let _ = write!(cmap, "/CMapName /{}-UTF16 def\n", font_name);
        let _ = write!(cmap, "/CMapType 2 def\n");
        let _ = write!(cmap, "1 begincodespacerange\n");
        let _ = write!(cmap, "<0000> <FFFF>\n");
        let _ = write!(cmap, "endcodespacerange\n");

        // PDF spec limits beginbfchar to 100 entries per block
        for chunk in gid_to_unicode.chunks(100) {
            let _ = write!(cmap, "{} beginbfchar\n", chunk.len());
            for &(gid, unicode) in chunk {
                let _ = write!(cmap, "<{:04X}> <{:04X}>\n", gid, unicode);
            }
            let _ = write!(cmap, "endbfchar\n");
        }

        let _ = write!(cmap, "endcmap\n");
        let _ = write!(cmap, "CMapName currentdict /CMap defineresource pop\n");
        let _ = write!(cmap, "end\n");
        let _ = write!(cmap, "end\n");

        cmap
    }

    /// Sanitize a font name for use as a PDF name object.
    fn sanitize_font_name(family: &str, weight: u32, italic: bool) -> String {
        let mut name: String = family
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
            .collect();

        if weight >= 700 {
            name.push_str("-Bold");
        }
        if italic {
            name.push_str("-Italic");
        }

        if name.is_empty() {
            name = "CustomFont".to_string();
        }

        name
    }

    fn build_font_resource_dict(font_objects: &[(FontKey, usize)]) -> String {
        font_objects
            .iter()
            .enumerate()
            .map(|(i, (_, obj_id))| format!("/F{} {} 0 R", i, obj_id))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Index of /F0, /F1, ... for a font key, falling back to Helvetica.
    fn font_index(
        family: &str,
        snapped_weight: u32,
        italic: bool,
        font_objects: &[(FontKey, usize)],
    ) -> usize {
        for (i, (key, _)) in font_objects.iter().enumerate() {
            if key.family == family && key.weight == snapped_weight && key.italic == italic {
                return i;
            }
        }
        for (i, (key, _)) in font_objects.iter().enumerate() {
            if key.family == "Helvetica" && key.weight == snapped_weight && key.italic == italic {
                return i;
            }
        }
        0
    }

    /// Escape special characters in a PDF string.
    fn escape_pdf_string(s: &str) -> String {
        s.replace('\\', "\\\\")
            .replace('(', "\\(")
            .replace(')', "\\)")
    }

    /// Map a Unicode codepoint to a WinAnsiEncoding byte value.
    ///
    /// WinAnsiEncoding is based on Windows-1252. Most codepoints in
    /// 0x20..=0x7E and 0xA0..=0xFF map directly. The 0x80..=0x9F range
    /// contains special mappings for smart quotes, bullets, dashes, etc.
    fn unicode_to_winansi(ch: char) -> Option<u8> {
        let cp = ch as u32;
        if (0x20..=0x7E).contains(&cp) || (0xA0..=0xFF).contains(&cp) {
            return Some(cp as u8);
        }
        match cp {
            0x20AC => Some(0x80), // Euro sign
            0x201A => Some(0x82), // Single low-9 quotation mark
            0x0192 => Some(0x83), // Latin small letter f with hook
            0x201E => Some(0x84), // Double low-9 quotation mark
            0x2026 => Some(0x85), // Horizontal ellipsis
            0x2020 => Some(0x86), // Dagger
            0x2021 => Some(0x87), // Double dagger
            0x02C6 => Some(0x88), // Modifier letter circumflex accent
            0x2030 => Some(0x89), // Per mille sign
            0x0160 => Some(0x8A), // Latin capital letter S with caron
            0x2039 => Some(0x8B), // Single left-pointing angle quotation
            0x0152 => Some(0x8C), // Latin capital ligature OE
            0x017D => Some(0x8E), // Latin capital letter Z with caron
            0x2018 => Some(0x91), // Left single quotation mark
            0x2019 => Some(0x92), // Right single quotation mark
            0x201C => Some(0x93), // Left double quotation mark
            0x201D => Some(0x94), // Right double quotation mark
            0x2022 => Some(0x95), // Bullet
            0x2013 => Some(0x96), // En dash
            0x2014 => Some(0x97), // Em dash
            0x02DC => Some(0x98), // Small tilde
            0x2122 => Some(0x99), // Trade mark sign
            0x0161 => Some(0x9A), // Latin small letter s with caron
            0x203A => Some(0x9B), // Single right-pointing angle quotation
            0x0153 => Some(0x9C), // Latin small ligature oe
            0x017E => Some(0x9E), // Latin small letter z with caron
            0x0178 => Some(0x9F), // Latin capital letter Y with diaeresis
            _ => None,
        }
    }

    /// Serialize all objects into the final PDF byte stream.
    fn serialize(builder: &PdfBuilder, info_obj_id: Option<usize>) -> Vec<u8> {
        let mut output: Vec<u8> = Vec::new();
        let mut offsets: Vec<usize> = vec![0; builder.objects.len()];

        output.extend_from_slice(b"%PDF-1.7\n");
        output.extend_from_slice(b"%\xe2\xe3\xcf\xd3\n");

        for (i, obj) in builder.objects.iter().enumerate().skip(1) {
            offsets[i] = output.len();
            let header = format!("{} 0 obj\n", i);
            output.extend_from_slice(header.as_bytes());
            output.extend_from_slice(&obj.data);
            output.extend_from_slice(b"\nendobj\n\n");
        }

        let xref_offset = output.len();
        let _ = write!(output, "xref\n0 {}\n", builder.objects.len());
        let _ = write!(output, "0000000000 65535 f \n");
        for offset in offsets.iter().skip(1) {
            let _ = write!(output, "{:010} 00000 n \n", offset);
        }

        let _ = write!(
            output,
            "trailer\n<< /Size {} /Root 1 0 R",
            builder.objects.len()
        );
        if let Some(info_id) = info_obj_id {
            let _ = write!(output, " /Info {} 0 R", info_id);
        }
        let _ = write!(output, " >>\nstartxref\n{}\n%%EOF\n", xref_offset);

        output
    }
}
