use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ALLOWED_IMAGE_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    #[error("Maximum {max} images allowed")]
    TooMany { max: usize },

    #[error("Image '{name}' has unsupported type '{mime}'")]
    UnsupportedType { name: String, mime: String },
}

/// Image attached to a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAttachment {
    pub name: String,
    pub mime: String,
}

impl ImageAttachment {
    pub fn new(name: impl Into<String>, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
        }
    }

    /// Attachment known by file name only; the type is taken from the extension
    pub fn from_file_name(name: &str) -> Self {
        let extension = name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        let mime = match extension.as_str() {
            "jpg" | "jpeg" => "image/jpeg",
            "png" => "image/png",
            "gif" => "image/gif",
            "webp" => "image/webp",
            _ => "application/octet-stream",
        };
        Self::new(name, mime)
    }

    pub fn is_supported(&self) -> bool {
        ALLOWED_IMAGE_TYPES.contains(&self.mime.to_ascii_lowercase().as_str())
    }
}

/// Check the attachment count and every attachment's type
pub fn validate_images(images: &[ImageAttachment], max: usize) -> Result<(), ImageError> {
    if images.len() > max {
        return Err(ImageError::TooMany { max });
    }
    match images.iter().find(|image| !image.is_supported()) {
        Some(image) => Err(ImageError::UnsupportedType {
            name: image.name.clone(),
            mime: image.mime.clone(),
        }),
        None => Ok(()),
    }
}
