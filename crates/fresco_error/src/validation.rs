//! User input validation error types.

/// Validation error for rejected user input.
///
/// Recoverable: the caller re-prompts and resubmits. No external calls are
/// made when validation fails.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", message, line, file)]
pub struct ValidationError {
    /// User-facing message describing the rejected input
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use fresco_error::ValidationError;
    ///
    /// let err = ValidationError::new("Please enter an idea.");
    /// assert!(format!("{}", err).contains("Please enter an idea."));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
