use std::fmt;
use std::ops::Index;
use std::path::Path;
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::ImageFormat;

use crate::error::Error;

/// Opaque reference to one image: either a URI the surface can fetch, or the
/// encoded bytes themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    Uri(String),
    Data { mime: String, bytes: Arc<[u8]> },
}

impl ImageRef {
    pub fn uri(uri: impl Into<String>) -> Self {
        Self::Uri(uri.into())
    }

    /// Wraps encoded bytes, guessing the MIME type from the file extension.
    pub fn embedded(path: &Path, bytes: Vec<u8>) -> Self {
        let mime = ImageFormat::from_path(path)
            .map(|fmt| fmt.to_mime_type().to_string())
            .unwrap_or_else(|_| "application/octet-stream".to_string());
        Self::Data {
            mime,
            bytes: bytes.into(),
        }
    }

    /// The reference as something a browser-like surface can load directly.
    pub fn to_uri(&self) -> String {
        match self {
            Self::Uri(uri) => uri.clone(),
            Self::Data { mime, bytes } => {
                format!("data:{mime};base64,{}", STANDARD.encode(bytes))
            }
        }
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uri(uri) => f.write_str(uri),
            Self::Data { mime, bytes } => write!(f, "<{mime}, {} bytes>", bytes.len()),
        }
    }
}

impl From<&str> for ImageRef {
    fn from(value: &str) -> Self {
        Self::Uri(value.to_string())
    }
}

/// Ordered, never-empty collection of images shown by the carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSet(Vec<ImageRef>);

impl ImageSet {
    pub fn new(images: Vec<ImageRef>) -> Result<Self, Error> {
        if images.is_empty() {
            return Err(Error::EmptyImageSet);
        }
        Ok(Self(images))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[ImageRef] {
        &self.0
    }
}

impl Index<usize> for ImageSet {
    type Output = ImageRef;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}
