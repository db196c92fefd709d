use thiserror::Error;

/// Common error type for Resona core operations.
///
/// All failures at this layer are local and synchronous; nothing is retried
/// internally. Out-of-domain inputs to the numeric functions (such as the
/// logarithm of a negative value) are not errors and instead follow IEEE
/// floating-point semantics, producing NaN.
///
/// # Examples
/// ```
/// use resona_core::ResonaCoreError;
///
/// fn validate_bins(bins: usize) -> Result<(), ResonaCoreError> {
///     if bins == 0 {
///         return Err(ResonaCoreError::BadParameters("bin count must be > 0".into()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_bins(0).is_err());
/// assert!(validate_bins(128).is_ok());
/// ```
#[derive(Debug, Error)]
pub enum ResonaCoreError {
    /// Invalid parameters provided to a function
    #[error("Bad Parameters: {0}")]
    BadParameters(String),
    /// Requested activation name is not present in the registry
    #[error("Unknown activation function '{0}'")]
    UnknownActivation(String),
}
