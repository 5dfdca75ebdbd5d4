//! Top-level error wrapper types.

use crate::{BusyError, ConfigError, ContentError, ImageError, ValidationError};

/// This is the foundation error enum for the Fresco workspace.
///
/// # Examples
///
/// ```
/// use fresco_error::{ConfigError, FrescoError};
///
/// let config_err = ConfigError::new("GEMINI_API_KEY environment variable not set");
/// let err: FrescoError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum FrescoErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// User input rejected
    #[from(ValidationError)]
    Validation(ValidationError),
    /// A generation was already in flight
    #[from(BusyError)]
    Busy(BusyError),
    /// Content generation failed as a unit
    #[from(ContentError)]
    Content(ContentError),
    /// A single platform's image generation failed
    #[from(ImageError)]
    Image(ImageError),
}

/// Fresco error with kind discrimination.
///
/// # Examples
///
/// ```
/// use fresco_error::{ConfigError, FrescoResult};
///
/// fn might_fail() -> FrescoResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Fresco Error: {}", _0)]
pub struct FrescoError(Box<FrescoErrorKind>);

impl FrescoError {
    /// Create a new error from a kind.
    pub fn new(kind: FrescoErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FrescoErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to FrescoErrorKind
impl<T> From<T> for FrescoError
where
    T: Into<FrescoErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Fresco operations.
///
/// # Examples
///
/// ```
/// use fresco_error::{FrescoResult, ValidationError};
///
/// fn submit(idea: &str) -> FrescoResult<()> {
///     if idea.trim().is_empty() {
///         Err(ValidationError::new("Please enter an idea."))?
///     }
///     Ok(())
/// }
/// ```
pub type FrescoResult<T> = std::result::Result<T, FrescoError>;
