//! Image handle value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Encoded image formats accepted for upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Jpeg,
    Png,
    Bmp,
}

impl ImageFormat {
    /// Resolve a format from a file extension (case-insensitive, without the dot)
    pub fn from_extension(ext: &str) -> Result<Self, DomainError> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
            "png" => Ok(ImageFormat::Png),
            "bmp" => Ok(ImageFormat::Bmp),
            other => Err(DomainError::UnsupportedImageFormat(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Png => "png",
            ImageFormat::Bmp => "bmp",
        }
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Opaque handle to an uploaded, decoded image (Value Object)
///
/// Holds the original encoded bytes plus the dimensions observed while
/// decoding. Cloning is cheap; the bytes are shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHandle {
    bytes: Arc<[u8]>,
    width: u32,
    height: u32,
    format: ImageFormat,
}

impl ImageHandle {
    pub fn new(bytes: impl Into<Arc<[u8]>>, width: u32, height: u32, format: ImageFormat) -> Self {
        Self {
            bytes: bytes.into(),
            width,
            height,
            format,
        }
    }

    /// Encoded image bytes, as uploaded
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Human-readable summary, e.g. `640x480 png`
    pub fn describe(&self) -> String {
        format!("{}x{} {}", self.width, self.height, self.format)
    }
}
