use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{AssumptionSet, HoursInput, RegionRequirement};
use super::lookup::{LookupError, RegionLookup};
use super::postal::PostalCode;
use super::service::{EligibilityService, EligibilityServiceError};

/// Router builder exposing the eligibility check and the region lookup over HTTP.
pub fn eligibility_router<L>(service: Arc<EligibilityService<L>>) -> Router
where
    L: RegionLookup + 'static,
{
    Router::new()
        .route("/api/v1/eligibility/check", post(check_handler::<L>))
        .route("/api/v1/regions/:postal_code", get(region_handler::<L>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct CheckRequest {
    pub(crate) postal_code: String,
    pub(crate) hours: HoursInput,
    // An omitted record means no assumption was confirmed, so every gate fails;
    // `AssumptionSet::default()` here would silently confirm them all.
    #[serde(default = "AssumptionSet::unanswered")]
    pub(crate) assumptions: AssumptionSet,
}

#[derive(Debug, Serialize)]
pub(crate) struct RegionResponse {
    pub(crate) postal_code: PostalCode,
    pub(crate) requirement: RegionRequirement,
}

fn error_response(error: EligibilityServiceError) -> Response {
    let status = match &error {
        EligibilityServiceError::PostalCode(_) => StatusCode::UNPROCESSABLE_ENTITY,
        EligibilityServiceError::Eligibility(inner) if inner.is_invalid_input() => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        EligibilityServiceError::Eligibility(_) => StatusCode::BAD_GATEWAY,
        EligibilityServiceError::Lookup(LookupError::RegionNotFound(_)) => StatusCode::NOT_FOUND,
        EligibilityServiceError::Lookup(LookupError::Unavailable(_)) => StatusCode::BAD_GATEWAY,
    };

    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}

pub(crate) async fn check_handler<L>(
    State(service): State<Arc<EligibilityService<L>>>,
    Json(request): Json<CheckRequest>,
) -> Response
where
    L: RegionLookup + 'static,
{
    match service.check(&request.postal_code, &request.hours, &request.assumptions) {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn region_handler<L>(
    State(service): State<Arc<EligibilityService<L>>>,
    Path(postal_code): Path<String>,
) -> Response
where
    L: RegionLookup + 'static,
{
    match service.region_for(&postal_code) {
        Ok((postal_code, requirement)) => (
            StatusCode::OK,
            Json(RegionResponse {
                postal_code,
                requirement,
            }),
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}
