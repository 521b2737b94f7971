//! API request, query and error types.

use serde::{Deserialize, Serialize};

use crate::error::EstimateError;
use crate::estimate::types::ApplianceEntry;

/// Body of `POST /energy`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnergyRequest {
    /// May be empty; an empty list estimates to zero.
    pub appliances: Vec<ApplianceEntry>,
}

/// Optional query parameters shared by both calculators.
#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    /// Location printed on the report.
    pub location: Option<String>,
}

/// Error response body for 400-class errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
    /// Offending field path, when the error concerns one input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl From<EstimateError> for ErrorResponse {
    fn from(e: EstimateError) -> Self {
        Self {
            field: Some(e.field().to_string()),
            error: e.to_string(),
        }
    }
}
