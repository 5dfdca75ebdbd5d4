//! Image generation error types.

/// Specific error conditions for a single image-generation call.
///
/// Image failures are scoped to one platform and never abort the run; the
/// affected platform simply keeps no image for the rest of the session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ImageErrorKind {
    /// Transport-level failure before an HTTP status was received
    #[display("Image request failed: {}", _0)]
    Transport(String),
    /// The call exceeded its deadline
    #[display("Image request timed out")]
    Timeout,
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    Http {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Response body could not be parsed
    #[display("Malformed image response: {}", _0)]
    MalformedResponse(String),
    /// The service returned an empty result set
    #[display("No image was generated")]
    EmptyResult,
}

/// Image generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use fresco_error::{ImageError, ImageErrorKind};
///
/// let err = ImageError::new(ImageErrorKind::EmptyResult);
/// assert!(format!("{}", err).contains("No image was generated"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Image Error: {} at line {} in {}", kind, line, file)]
pub struct ImageError {
    /// The kind of error that occurred
    pub kind: ImageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ImageError {
    /// Create a new ImageError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ImageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// User-facing message for a per-platform image failure.
    pub fn user_message(&self) -> &'static str {
        "Failed to generate an image. The AI may have refused the prompt."
    }
}
