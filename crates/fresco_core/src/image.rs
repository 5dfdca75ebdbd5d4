//! Generated image references.

use serde::{Deserialize, Serialize};

/// Opaque reference to a generated image, carried as a data URI.
///
/// Images arrive independently per platform after content generation; the
/// reference is handed to the presentation layer unmodified.
///
/// # Examples
///
/// ```
/// use fresco_core::ImageRef;
///
/// let image = ImageRef::from_jpeg_base64("aGVsbG8=");
/// assert!(image.as_uri().starts_with("data:image/jpeg;base64,"));
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(transparent)]
#[display("{}", _0)]
pub struct ImageRef(String);

impl ImageRef {
    /// Wrap base64-encoded JPEG bytes as a data URI.
    pub fn from_jpeg_base64(encoded: impl AsRef<str>) -> Self {
        Self(format!("data:image/jpeg;base64,{}", encoded.as_ref()))
    }

    /// Wrap an already-formed URI (data URI or resource handle).
    pub fn from_uri(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// The URI form of the reference.
    pub fn as_uri(&self) -> &str {
        &self.0
    }
}
