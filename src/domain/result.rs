//! Result type alias for Labex
//!
//! This module provides a convenient Result type alias that uses LabexError
//! as the error type.

use super::errors::LabexError;

/// Result type alias for Labex operations
///
/// # Examples
///
/// ```
/// use labex::domain::result::Result;
/// use labex::domain::errors::LabexError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(LabexError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, LabexError>;
