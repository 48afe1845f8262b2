// Image discovery and decoding. Enumeration order here defines the index
// key used by the layout, the drag set and the renderer, so it must be
// deterministic: explicit files keep their argument order, directories are
// expanded in file-name order.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pinboard_core::Size;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// One decoded source image: intrinsic size plus RGBA8 pixels ready for
/// texture upload.
pub struct SourceImage {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl SourceImage {
    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| IMAGE_EXTENSIONS.iter().any(|x| e.eq_ignore_ascii_case(x)))
}

/// Expand the argument list into concrete image file paths. Directories are
/// scanned one level deep for known image extensions.
pub fn collect_paths(args: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for arg in args {
        if arg.is_dir() {
            let mut entries: Vec<PathBuf> = std::fs::read_dir(arg)
                .with_context(|| format!("reading directory {}", arg.display()))?
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| p.is_file() && has_image_extension(p))
                .collect();
            entries.sort();
            paths.extend(entries);
        } else {
            paths.push(arg.clone());
        }
    }
    Ok(paths)
}

/// Decode every path to RGBA8. Undecodable files are skipped with a warning
/// so one bad file does not take the whole board down; skipping happens
/// before the layout is built, keeping indices aligned.
pub fn load_images(paths: &[PathBuf]) -> Vec<SourceImage> {
    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        match image::open(path) {
            Ok(decoded) => {
                let rgba = decoded.to_rgba8();
                let (width, height) = rgba.dimensions();
                sources.push(SourceImage {
                    path: path.clone(),
                    width,
                    height,
                    pixels: rgba.into_raw(),
                });
            }
            Err(e) => {
                log::warn!("Skipping {}: {}", path.display(), e);
            }
        }
    }
    sources
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_extension_matching() {
        assert!(has_image_extension(Path::new("a/b/photo.PNG")));
        assert!(has_image_extension(Path::new("photo.jpeg")));
        assert!(!has_image_extension(Path::new("notes.txt")));
        assert!(!has_image_extension(Path::new("no_extension")));
    }
}
