use std::sync::Arc;

use axum::response::Response;
use serde_json::{json, Value};

use crate::calculations::DeclarationCostInputs;
use crate::costing::{costing_router, LandedCostService, TaxPolicy};

pub(super) fn declaration_inputs() -> DeclarationCostInputs {
    DeclarationCostInputs {
        fob_value_foreign: 1000.0,
        exchange_rate: 0.709,
        freight_cost: 50.0,
        insurance_cost: 10.0,
        customs_duty: 100.0,
        ..DeclarationCostInputs::default()
    }
}

pub(super) fn declaration_payload() -> Value {
    json!({
        "fobValueForeign": 1000,
        "exchangeRate": 0.709,
        "freightCost": 50,
        "insuranceCost": 10,
        "customsDuty": 100
    })
}

pub(super) fn service() -> Arc<LandedCostService> {
    Arc::new(LandedCostService::new(TaxPolicy::default()))
}

pub(super) fn router() -> axum::Router {
    costing_router(service())
}

pub(super) fn post_json(uri: &str, payload: &Value) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post(uri)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(payload).expect("payload serializes"),
        ))
        .expect("request builds")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
