//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;

use super::AppState;
use super::types::{EnergyRequest, ErrorResponse, ReportQuery};
use crate::advisory::AdvisoryTextSelector;
use crate::catalog::{COMMON_APPLIANCES, CatalogAppliance};
use crate::error::EstimateError;
use crate::estimate::types::{DieselResult, EnergyResult, GeneratorProfile};
use crate::runner::{Estimate, run_diesel, run_energy};

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(e: EstimateError) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::from(e)))
}

/// Estimates diesel consumption and cost for the posted profile.
///
/// `POST /diesel` → 200 + `Estimate<DieselResult>` JSON
/// `POST /diesel` with an out-of-range field → 400 + `ErrorResponse`
pub async fn post_diesel(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ReportQuery>,
    Json(profile): Json<GeneratorProfile>,
) -> Result<Json<Estimate<DieselResult>>, ApiError> {
    let location = query.location.as_deref();
    let estimate = match state.seed {
        Some(seed) => run_diesel(&profile, location, &mut AdvisoryTextSelector::seeded(seed)),
        None => run_diesel(&profile, location, &mut AdvisoryTextSelector::from_entropy()),
    };
    estimate.map(Json).map_err(bad_request)
}

/// Estimates usage and a solar system for the posted appliance list.
///
/// `POST /energy` → 200 + `Estimate<EnergyResult>` JSON
/// `POST /energy` with an invalid appliance → 400 + `ErrorResponse`
pub async fn post_energy(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ReportQuery>,
    Json(request): Json<EnergyRequest>,
) -> Result<Json<Estimate<EnergyResult>>, ApiError> {
    let location = query.location.as_deref();
    let appliances = &request.appliances;
    let estimate = match state.seed {
        Some(seed) => run_energy(appliances, location, &mut AdvisoryTextSelector::seeded(seed)),
        None => run_energy(appliances, location, &mut AdvisoryTextSelector::from_entropy()),
    };
    estimate.map(Json).map_err(bad_request)
}

/// Lists the appliance catalog.
///
/// `GET /appliances` → 200 + `Vec<CatalogAppliance>` JSON
pub async fn get_appliances() -> Json<Vec<CatalogAppliance>> {
    Json(COMMON_APPLIANCES.to_vec())
}
