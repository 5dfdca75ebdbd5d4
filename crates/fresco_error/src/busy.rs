//! Concurrency guard error types.

/// Error returned when a generation is requested while another is in flight.
///
/// The orchestrator owns exactly one generation session at a time; it has no
/// cancellation primitive, so an overlapping request is rejected rather than
/// interleaved.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Busy: a generation is already in flight at line {} in {}", line, file)]
pub struct BusyError {
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl BusyError {
    /// Create a new BusyError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use fresco_error::BusyError;
    ///
    /// let err = BusyError::new();
    /// assert!(format!("{}", err).contains("already in flight"));
    /// ```
    #[track_caller]
    pub fn new() -> Self {
        let location = std::panic::Location::caller();
        Self {
            line: location.line(),
            file: location.file(),
        }
    }
}

impl Default for BusyError {
    fn default() -> Self {
        Self::new()
    }
}
