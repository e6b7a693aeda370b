//! Image file loader backed by the `image` crate

use std::path::Path;
use thiserror::Error;
use tracing::debug;
use vqa_domain::{DomainError, ImageFormat, ImageHandle};

/// Maximum accepted upload size (20 MB)
const MAX_IMAGE_BYTES: u64 = 20 * 1024 * 1024;

/// Errors that can occur while loading an uploaded image
#[derive(Error, Debug)]
pub enum ImageLoadError {
    #[error("Failed to read image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported image type {0:?} (supported: jpg, jpeg, png, bmp)")]
    UnsupportedFormat(String),

    #[error("Image too large: {size} bytes (max: {max} bytes)")]
    TooLarge { size: u64, max: u64 },

    #[error("Failed to decode image: {0}")]
    Decode(String),
}

impl From<DomainError> for ImageLoadError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::UnsupportedImageFormat(ext) => ImageLoadError::UnsupportedFormat(ext),
            other => ImageLoadError::Decode(other.to_string()),
        }
    }
}

/// Loads and validates image uploads
pub struct ImageFileLoader;

impl ImageFileLoader {
    /// Load an image from disk, choosing the decoder by file extension
    pub fn load(path: &Path) -> Result<ImageHandle, ImageLoadError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        let format = ImageFormat::from_extension(ext)?;

        let size = std::fs::metadata(path)?.len();
        if size > MAX_IMAGE_BYTES {
            return Err(ImageLoadError::TooLarge {
                size,
                max: MAX_IMAGE_BYTES,
            });
        }

        let bytes = std::fs::read(path)?;
        let handle = Self::from_bytes(bytes, format)?;
        debug!("Loaded {} from {}", handle.describe(), path.display());
        Ok(handle)
    }

    /// Decode in-memory bytes of a known format
    pub fn from_bytes(bytes: Vec<u8>, format: ImageFormat) -> Result<ImageHandle, ImageLoadError> {
        let decoded = image::load_from_memory_with_format(&bytes, decoder_format(format))
            .map_err(|e| ImageLoadError::Decode(e.to_string()))?;

        Ok(ImageHandle::new(
            bytes,
            decoded.width(),
            decoded.height(),
            format,
        ))
    }
}

fn decoder_format(format: ImageFormat) -> image::ImageFormat {
    match format {
        ImageFormat::Jpeg => image::ImageFormat::Jpeg,
        ImageFormat::Png => image::ImageFormat::Png,
        ImageFormat::Bmp => image::ImageFormat::Bmp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_image(dir: &tempfile::TempDir, name: &str, width: u32, height: u32) -> std::path::PathBuf {
        let path = dir.path().join(name);
        image::RgbImage::new(width, height).save(&path).unwrap();
        path
    }

    #[test]
    fn test_load_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_image(&dir, "scene.png", 4, 3);

        let handle = ImageFileLoader::load(&path).unwrap();
        assert_eq!(handle.format(), ImageFormat::Png);
        assert_eq!((handle.width(), handle.height()), (4, 3));
        assert!(!handle.bytes().is_empty());
    }

    #[test]
    fn test_load_bmp_uppercase_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_image(&dir, "scene.bmp", 2, 2);
        let renamed = dir.path().join("SCENE.BMP");
        std::fs::rename(&path, &renamed).unwrap();

        let handle = ImageFileLoader::load(&renamed).unwrap();
        assert_eq!(handle.format(), ImageFormat::Bmp);
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("anim.gif");
        std::fs::write(&path, b"GIF89a").unwrap();

        let err = ImageFileLoader::load(&path).unwrap_err();
        assert!(matches!(err, ImageLoadError::UnsupportedFormat(ext) if ext == "gif"));
    }

    #[test]
    fn test_corrupt_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let err = ImageFileLoader::load(&path).unwrap_err();
        assert!(matches!(err, ImageLoadError::Decode(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ImageFileLoader::load(Path::new("/nonexistent/photo.jpg")).unwrap_err();
        assert!(matches!(err, ImageLoadError::Io(_)));
    }
}
