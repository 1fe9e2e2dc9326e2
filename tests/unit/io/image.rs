//! Tests for image loading, tile cropping, and export

#[cfg(test)]
mod tests {
    use image::{DynamicImage, GenericImageView, RgbaImage};
    use std::path::Path;
    use tilereveal::descriptor::builder::CropBox;
    use tilereveal::io::error::SequenceError;
    use tilereveal::io::image::{crop_tile, load_image, save_tile};

    fn checker_image(width: u32, height: u32) -> DynamicImage {
        let buffer = RgbaImage::from_fn(width, height, |x, y| {
            image::Rgba([(x % 256) as u8, (y % 256) as u8, 0, 255])
        });
        DynamicImage::ImageRgba8(buffer)
    }

    // Tests missing source files surface as load errors with the path attached
    // Verified by mapping load failures to the generic io variant
    #[test]
    fn test_load_image_missing_file() {
        let result = load_image(Path::new("no/such/image.png"));

        match result {
            Err(SequenceError::ImageLoad { path, .. }) => {
                assert_eq!(path, Path::new("no/such/image.png"));
            }
            _ => unreachable!("Expected ImageLoad error type"),
        }
    }

    // Tests cropping honors the box dimensions
    // Verified by swapping width and height in the crop call
    #[test]
    fn test_crop_tile_dimensions() {
        let source = checker_image(32, 16);
        let crop = CropBox {
            x: 8,
            y: 0,
            width: 8,
            height: 16,
        };

        let tile = crop_tile(&source, &crop);
        assert_eq!(tile.dimensions(), (8, 16));
    }

    // Tests saving creates missing parent directories
    // Verified by removing the create_dir_all call
    #[test]
    fn test_save_tile_creates_parent_directories() {
        let Ok(workspace) = tempfile::tempdir() else {
            unreachable!("failed to create temp dir");
        };
        let path = workspace.path().join("tiles").join("nested").join("t.png");
        let tile = checker_image(8, 8);

        assert!(save_tile(&tile, &path).is_ok());
        assert!(path.exists());
    }

    // Tests a saved tile loads back with identical dimensions
    // Verified by saving the uncropped source instead
    #[test]
    fn test_crop_save_load_roundtrip() {
        let Ok(workspace) = tempfile::tempdir() else {
            unreachable!("failed to create temp dir");
        };
        let path = workspace.path().join("tile.png");

        let source = checker_image(24, 24);
        let crop = CropBox {
            x: 16,
            y: 8,
            width: 8,
            height: 8,
        };

        assert!(save_tile(&crop_tile(&source, &crop), &path).is_ok());

        match load_image(&path) {
            Ok(reloaded) => assert_eq!(reloaded.dimensions(), (8, 8)),
            Err(_) => unreachable!("saved tile failed to load"),
        }
    }
}
