//! Input validation errors raised at the estimator boundary.

use thiserror::Error;

/// Rejected caller input.
///
/// Estimators never produce this themselves; it is raised by the
/// `validate` methods on the input types before an estimate is computed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimateError {
    #[error("invalid input: {field} {message}")]
    InvalidInput {
        /// Field path of the offending value (e.g. `appliances[2].wattage`).
        field: String,
        /// Constraint that was violated.
        message: String,
    },
}

impl EstimateError {
    pub(crate) fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Field path of the rejected value.
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidInput { field, .. } => field,
        }
    }
}

/// Result type alias using [`EstimateError`].
pub type Result<T> = std::result::Result<T, EstimateError>;
