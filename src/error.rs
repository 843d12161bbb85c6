use thiserror::Error;

/// Library error type for carousel operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An image set must contain at least one image.
    #[error("image set must not be empty")]
    EmptyImageSet,

    /// The configured image source directory is missing or unreadable.
    #[error("invalid image directory: {0}")]
    BadDir(String),
}
