//! Error types for the Ancora catalog core.
//!
//! This module defines the centralized error type [`AncoraError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Business outcomes of a plate lookup (vehicle not found, catalog unreachable) are
//! not errors at this level: they are recovered into the `Failure` variant of the
//! lookup state. The variants below cover rejected preconditions and setup problems.

use thiserror::Error;

/// The main error type for Ancora operations.
///
/// # Examples
///
/// ```
/// use ancora::AncoraError;
///
/// fn check(len: usize) -> Result<(), AncoraError> {
///     if len != 7 {
///         return Err(AncoraError::InvalidPlate("Placa deve ter 7 caracteres.".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(check(3).is_err());
/// ```
#[derive(Debug, Error)]
pub enum AncoraError {
    /// The plate input does not have the required length.
    ///
    /// Returned synchronously by `search` before any service call. The string is
    /// the user-facing validation message.
    #[error("Invalid plate: {0}")]
    InvalidPlate(String),

    /// A lookup is already in flight.
    ///
    /// At most one lookup may be outstanding per controller.
    #[error("A vehicle lookup is already in progress")]
    SearchInFlight,

    /// A review record violated its invariants (rating range or step).
    #[error("Invalid review: {0}")]
    InvalidReview(String),

    /// Palette parsing or loading failed.
    #[error("Palette error: {0}")]
    Palette(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for Ancora operations.
pub type Result<T> = std::result::Result<T, AncoraError>;
