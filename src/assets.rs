//! Asset resolution and the per-run image cache.
//!
//! Catalog entries reference images loosely: a path that may or may not
//! exist, with fallbacks behind it. `resolve_first` walks an ordered
//! candidate list and returns the first file that exists. `compressed`
//! turns a resolved path into print-ready bytes and memoizes the result per
//! (path, width); the same product image appears on several pages and must
//! only be transcoded once. The cache is unbounded and must be cleared
//! after every document.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::raster;

/// Files below this size are assumed to be placeholder art and embedded
/// verbatim; transcoding them would only add artifacts.
const PASSTHROUGH_LIMIT: u64 = 10 * 1024;

/// Default width bound for product images, in pixels.
pub const DEFAULT_IMAGE_WIDTH: u32 = 600;

/// Resolves asset references and caches compressed image bytes.
#[derive(Default)]
pub struct AssetResolver {
    cache: HashMap<(PathBuf, u32), Vec<u8>>,
}

impl AssetResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// First existing path from an ordered candidate list.
    pub fn resolve_first(candidates: &[PathBuf]) -> Option<PathBuf> {
        candidates.iter().find(|p| p.is_file()).cloned()
    }

    /// Print-ready bytes for an image file, bounded to `max_width` pixels.
    ///
    /// Small files pass through verbatim. Larger files are downscaled,
    /// alpha-flattened and re-encoded as JPEG; if that fails the original
    /// bytes are used. Both outcomes are cached, so repeated calls return
    /// byte-identical buffers without touching the filesystem again.
    /// Returns `None` only when the file is missing or unreadable.
    pub fn compressed(&mut self, path: &Path, max_width: u32) -> Option<Vec<u8>> {
        let key = (path.to_path_buf(), max_width);
        if let Some(cached) = self.cache.get(&key) {
            debug!(path = %path.display(), max_width, "image cache hit");
            return Some(cached.clone());
        }

        let raw = fs::read(path).ok()?;

        let bytes = if (raw.len() as u64) < PASSTHROUGH_LIMIT {
            raw
        } else {
            match raster::compress_for_print(&raw, max_width) {
                Some(compressed) => compressed,
                None => {
                    warn!(path = %path.display(), "image compression failed, embedding original bytes");
                    raw
                }
            }
        };

        self.cache.insert(key, bytes.clone());
        Some(bytes)
    }

    /// Decode a `data:image/...;base64,` source. The result is not cached;
    /// data URIs carry their bytes inline.
    pub fn decode_data_uri(uri: &str) -> Option<Vec<u8>> {
        use base64::Engine;
        let b64 = uri.strip_prefix("data:image/")?.split_once(',')?.1;
        base64::engine::general_purpose::STANDARD.decode(b64).ok()
    }

    /// Drop all cached buffers. Call after each generated document.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    #[cfg(test)]
    fn cache_len(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_large_png(dir: &Path) -> PathBuf {
        // 300x300 RGBA with a gradient compresses to well over 10 KiB
        let img = image::RgbaImage::from_fn(300, 300, |x, y| {
            image::Rgba([(x % 256) as u8, (y % 256) as u8, ((x * y) % 256) as u8, 200])
        });
        let path = dir.join("large.png");
        img.save(&path).unwrap();
        assert!(fs::metadata(&path).unwrap().len() >= PASSTHROUGH_LIMIT);
        path
    }

    #[test]
    fn test_resolve_first_picks_first_existing() {
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().join("b.png");
        fs::File::create(&existing).unwrap();

        let candidates = vec![dir.path().join("a.png"), existing.clone(), dir.path().join("c.png")];
        assert_eq!(AssetResolver::resolve_first(&candidates), Some(existing));
        assert_eq!(AssetResolver::resolve_first(&[dir.path().join("x.png")]), None);
    }

    #[test]
    fn test_small_file_passes_through_but_is_cached() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.png");
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(&[0x89, 0x50, 0x4E, 0x47, 1, 2, 3]).unwrap();

        let mut resolver = AssetResolver::new();
        let bytes = resolver.compressed(&path, 600).unwrap();
        assert_eq!(bytes, vec![0x89, 0x50, 0x4E, 0x47, 1, 2, 3]);
        assert_eq!(resolver.cache_len(), 1);
    }

    #[test]
    fn test_large_file_is_transcoded_to_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_large_png(dir.path());

        let mut resolver = AssetResolver::new();
        let bytes = resolver.compressed(&path, 100).unwrap();
        assert!(raster::is_jpeg(&bytes));
        let img = crate::raster::LoadedImage::from_bytes(&bytes).unwrap();
        assert_eq!(img.width_px, 100);
    }

    #[test]
    fn test_cache_is_idempotent_and_survives_file_deletion() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_large_png(dir.path());

        let mut resolver = AssetResolver::new();
        let first = resolver.compressed(&path, 200).unwrap();
        fs::remove_file(&path).unwrap();
        // Served from cache, byte-identical, no filesystem access
        let second = resolver.compressed(&path, 200).unwrap();
        assert_eq!(first, second);
        assert_eq!(resolver.cache_len(), 1);
    }

    #[test]
    fn test_cache_keyed_by_width() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_large_png(dir.path());

        let mut resolver = AssetResolver::new();
        let narrow = resolver.compressed(&path, 100).unwrap();
        let wide = resolver.compressed(&path, 250).unwrap();
        assert_ne!(narrow, wide);
        assert_eq!(resolver.cache_len(), 2);
    }

    #[test]
    fn test_clear_forces_recompute() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_large_png(dir.path());

        let mut resolver = AssetResolver::new();
        resolver.compressed(&path, 200).unwrap();
        resolver.clear();
        assert_eq!(resolver.cache_len(), 0);
        fs::remove_file(&path).unwrap();
        // File gone and cache cleared: must now fail
        assert!(resolver.compressed(&path, 200).is_none());
    }

    #[test]
    fn test_corrupt_file_falls_back_to_original_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        let garbage = vec![0xAB; (PASSTHROUGH_LIMIT + 1) as usize];
        fs::write(&path, &garbage).unwrap();

        let mut resolver = AssetResolver::new();
        let bytes = resolver.compressed(&path, 600).unwrap();
        assert_eq!(bytes, garbage);
    }

    #[test]
    fn test_decode_data_uri() {
        use base64::Engine;
        let b64 = base64::engine::general_purpose::STANDARD.encode([1u8, 2, 3]);
        let uri = format!("data:image/png;base64,{}", b64);
        assert_eq!(AssetResolver::decode_data_uri(&uri), Some(vec![1, 2, 3]));
        assert_eq!(AssetResolver::decode_data_uri("data:image/png;base64"), None);
    }
}
