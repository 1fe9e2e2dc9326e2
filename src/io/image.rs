//! Image loading and tile cropping for phase processing

use crate::descriptor::builder::CropBox;
use crate::io::error::{Result, SequenceError};
use image::DynamicImage;
use std::path::Path;

/// Load a phase source image
///
/// # Errors
///
/// Returns an error if the file is missing or cannot be decoded
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| SequenceError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Crop one tile region from a source image
///
/// Crop boxes produced by the descriptor builder always lie within the
/// source bounds, since grid derivation truncates away remainder pixels.
pub fn crop_tile(image: &DynamicImage, crop: &CropBox) -> DynamicImage {
    image.crop_imm(crop.x, crop.y, crop.width, crop.height)
}

/// Save a cropped tile, creating the parent directory if needed
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be written
pub fn save_tile(tile: &DynamicImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| SequenceError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    tile.save(path).map_err(|e| SequenceError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}
