//! Content generation error types.

/// Specific error conditions for the content-generation call.
///
/// The content call produces posts for all platforms in one round trip and
/// fails as a unit; any of these conditions aborts the whole generation run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ContentErrorKind {
    /// Transport-level failure before an HTTP status was received
    #[display("Content request failed: {}", _0)]
    Transport(String),
    /// The call exceeded its deadline
    #[display("Content request timed out")]
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
    #[display("Malformed content response: {}", _0)]
    MalformedResponse(String),
    /// Response parsed but violated the post schema
    #[display("Content response violated schema: {}", _0)]
    SchemaViolation(String),
}

/// Content generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use fresco_error::{ContentError, ContentErrorKind};
///
/// let err = ContentError::new(ContentErrorKind::Timeout);
/// assert!(format!("{}", err).contains("timed out"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Content Error: {} at line {} in {}", kind, line, file)]
pub struct ContentError {
    /// The kind of error that occurred
    pub kind: ContentErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ContentError {
    /// Create a new ContentError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ContentErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// User-facing message for the aggregate failure surface.
    pub fn user_message(&self) -> &'static str {
        "Failed to generate content from AI. Please check your prompt and try again."
    }
}
