//! HTTP surface for the calculation core. Routing and status codes only;
//! all logic lives in `crate::core`.

use crate::core;
use crate::core::response::{ErrorBody, AGE_EXAMPLE, NEXTBIRTHDAY_EXAMPLE};
use crate::utils::error::BirthdayError;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Local;
use serde::Deserialize;

pub fn router() -> Router {
    Router::new()
        .route("/api/nextbirthday", get(next_birthday))
        .route("/api/age", get(age))
        .route("/health", get(health))
}

#[derive(Debug, Deserialize)]
struct DobQuery {
    dob: Option<String>,
}

async fn next_birthday(Query(query): Query<DobQuery>) -> Response {
    tracing::info!("Processing nextbirthday request");

    // Captured once per request and threaded through every calculation.
    let today = Local::now().date_naive();

    match core::birthday_report(query.dob.as_deref(), today) {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(error) => bad_request(&error, NEXTBIRTHDAY_EXAMPLE),
    }
}

async fn age(Query(query): Query<DobQuery>) -> Response {
    tracing::info!("Processing age request");

    let today = Local::now().date_naive();

    match core::age_report(query.dob.as_deref(), today) {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(error) => bad_request(&error, AGE_EXAMPLE),
    }
}

async fn health() -> Response {
    let body = serde_json::json!({
        "status": "healthy",
        "timestamp": Local::now().to_rfc3339(),
    });
    (StatusCode::OK, Json(body)).into_response()
}

fn bad_request(error: &BirthdayError, example: &str) -> Response {
    tracing::warn!("Rejected request: {}", error);
    (StatusCode::BAD_REQUEST, Json(ErrorBody::new(error, example))).into_response()
}
