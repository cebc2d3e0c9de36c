//! Pre-dispatch request validation.

use thiserror::Error;

/// Error raised when a request fails validation before dispatch.
///
/// Validation always happens before any network call: a request that
/// carries an `others` selector without its free-text companion, or an
/// empty required field, never reaches a provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A selector field is set to `others` but the paired free-text
    /// companion is empty.
    #[error("field '{field}' is set to 'others' but no custom value was provided")]
    MissingCustomValue { field: &'static str },

    /// A required free-text field is empty.
    #[error("field '{field}' must not be empty")]
    EmptyField { field: &'static str },

    /// A numeric field is outside its allowed range.
    #[error("field '{field}' must be at least {min}")]
    BelowMinimum { field: &'static str, min: u32 },
}

impl ValidationError {
    pub fn missing_custom_value(field: &'static str) -> Self {
        Self::MissingCustomValue { field }
    }

    pub fn empty_field(field: &'static str) -> Self {
        Self::EmptyField { field }
    }
}

/// Check that a required free-text field is non-blank.
pub(crate) fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::empty_field(field))
    } else {
        Ok(())
    }
}

/// Check the `others` sentinel rule: when `is_others` is true the paired
/// free-text companion must be non-blank.
pub(crate) fn require_custom_value(
    field: &'static str,
    is_others: bool,
    custom: Option<&str>,
) -> Result<(), ValidationError> {
    if is_others && custom.map_or(true, |s| s.trim().is_empty()) {
        Err(ValidationError::missing_custom_value(field))
    } else {
        Ok(())
    }
}
