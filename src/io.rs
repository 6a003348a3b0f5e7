use image::RgbImage;
use rfd::FileDialog;
use std::path::{Path, PathBuf};

/// Raster extensions offered by the open dialog (lowercase).
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif", "tif", "tiff", "webp"];

#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Decode(image::ImageError),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "I/O error: {}", e),
            LoadError::Decode(e) => write!(f, "Decode error: {}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Decode(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<image::ImageError> for LoadError {
    fn from(e: image::ImageError) -> Self {
        LoadError::Decode(e)
    }
}

/// Read `path` and decode it (format sniffed from the bytes) into an
/// 8-bit RGB buffer. Alpha, if any, is dropped.
pub fn load_rgb_image(path: &Path) -> Result<RgbImage, LoadError> {
    let bytes = std::fs::read(path)?;
    let img = image::load_from_memory(&bytes)?;
    Ok(img.to_rgb8())
}

/// Open-dialog filters as (label key, extensions). Raster formats only.
pub const DIALOG_FILTERS: &[(&str, &[&str])] = &[("dialog.image_files", IMAGE_EXTENSIONS)];

/// Show the native open dialog filtered to raster images.
/// Returns `None` when the user cancels.
pub fn pick_image_path() -> Option<PathBuf> {
    DIALOG_FILTERS
        .iter()
        .fold(FileDialog::new().set_title(t!("dialog.open_image")), |dialog, &(key, exts)| {
            dialog.add_filter(t!(key), exts)
        })
        .pick_file()
}
