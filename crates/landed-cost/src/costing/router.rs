use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use serde_json::json;

use super::domain::{DeclarationBreakdownRequest, DeclarationVarianceRequest};
use super::service::{CostingError, LandedCostService};
use crate::calculations::{DeclarationCostInputs, ItemCostInputs, VarianceInputs};

/// Router builder exposing the cost calculation endpoints.
pub fn costing_router(service: Arc<LandedCostService>) -> Router {
    Router::new()
        .route("/api/v1/declarations/costs", post(declaration_costs_handler))
        .route(
            "/api/v1/declarations/breakdown",
            post(declaration_breakdown_handler),
        )
        .route(
            "/api/v1/declarations/variance",
            post(declaration_variance_handler),
        )
        .route("/api/v1/items/costs", post(item_costs_handler))
        .route("/api/v1/variance", post(variance_handler))
        .with_state(service)
}

pub(crate) async fn declaration_costs_handler(
    State(service): State<Arc<LandedCostService>>,
    Json(inputs): Json<DeclarationCostInputs>,
) -> Response {
    respond(service.declaration_costs(&inputs))
}

pub(crate) async fn declaration_breakdown_handler(
    State(service): State<Arc<LandedCostService>>,
    Json(request): Json<DeclarationBreakdownRequest>,
) -> Response {
    respond(service.breakdown(&request))
}

pub(crate) async fn declaration_variance_handler(
    State(service): State<Arc<LandedCostService>>,
    Json(request): Json<DeclarationVarianceRequest>,
) -> Response {
    respond(service.declaration_variance(&request))
}

pub(crate) async fn item_costs_handler(
    State(service): State<Arc<LandedCostService>>,
    Json(inputs): Json<ItemCostInputs>,
) -> Response {
    respond(service.item_costs(&inputs))
}

pub(crate) async fn variance_handler(
    State(service): State<Arc<LandedCostService>>,
    Json(inputs): Json<VarianceInputs>,
) -> Response {
    respond(service.variance(&inputs))
}

fn respond<T: Serialize>(result: Result<T, CostingError>) -> Response {
    match result {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
                "field": error.field(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}
