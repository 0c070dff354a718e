//! HTTP request handlers for the internship pay filter API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::Thresholds;

use super::request::{CategorizeRequest, ThresholdPercentageQuery};
use super::response::{ApiError, ApiErrorResponse, ThresholdPercentageResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/categorize", post(categorize_handler))
        .route("/threshold-percentage", get(threshold_percentage_handler))
        .with_state(state)
}

/// Handler for POST /categorize.
///
/// Accepts a list of postings and returns the categorization report.
async fn categorize_handler(
    State(state): State<AppState>,
    payload: Result<Json<CategorizeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing categorization request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = json_rejection_error(rejection);
            warn!(
                correlation_id = %correlation_id,
                code = %error.code,
                error = %error.message,
                "Rejected request body"
            );
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let lines = request.non_blank_lines();
    if lines.is_empty() {
        warn!(correlation_id = %correlation_id, "Request has no non-blank lines");
        return ApiErrorResponse::bad_request(ApiError::validation_error(
            "lines must contain at least one non-blank entry",
        ))
        .into_response();
    }
    let applied = request.non_blank_applied();

    let engine = state.engine();
    let result = request
        .thresholds(engine.default_thresholds())
        .and_then(|thresholds| engine.run(&lines, &applied, &thresholds));

    match result {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                report_id = %report.report_id,
                lines = lines.len(),
                applied = applied.len(),
                above = report.above.len(),
                below = report.below.len(),
                not_found = report.not_found.len(),
                duplicates = report.duplicates.len(),
                "Categorization request completed"
            );
            json_response(StatusCode::OK, report)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Categorization failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /threshold-percentage.
///
/// Reports how selective a pay threshold is against the reference table.
async fn threshold_percentage_handler(
    State(state): State<AppState>,
    query: Result<Query<ThresholdPercentageQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Rejected query string"
            );
            return ApiErrorResponse::bad_request(ApiError::validation_error(
                rejection.body_text(),
            ))
            .into_response();
        }
    };

    let engine = state.engine();
    let thresholds = Thresholds {
        pay_threshold: query
            .pay_threshold
            .unwrap_or(engine.default_thresholds().pay_threshold),
        ..engine.default_thresholds()
    };

    let result = thresholds
        .validate()
        .and_then(|()| engine.threshold_percentage(thresholds.pay_threshold));

    match result {
        Ok(percentage) => {
            info!(
                correlation_id = %correlation_id,
                pay_threshold = %thresholds.pay_threshold,
                percentage = %percentage,
                "Threshold percentage computed"
            );
            json_response(
                StatusCode::OK,
                ThresholdPercentageResponse {
                    pay_threshold: thresholds.pay_threshold,
                    percentage_at_or_above: percentage,
                    reference_entries: engine.reference().len(),
                },
            )
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Threshold percentage unavailable"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

fn json_rejection_error(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], Json(body)).into_response()
}
