use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::middleware::{propagate_request_id, request_span};

pub mod tools;

/// Human-readable service name reported by /health and /info
pub const SERVICE_NAME: &str = "Destination Recommendation Service";

/// Creates the application router with all routes
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/info", get(service_info))
        .nest("/v1/tools", tool_routes())
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(axum::middleware::from_fn(propagate_request_id))
}

/// Tool routes under /v1/tools, one route per contract tool name
fn tool_routes() -> Router {
    Router::new()
        .route("/getDestinationsByActivity", post(tools::by_activity))
        .route("/getDestinationsByBudget", post(tools::by_budget))
        .route("/getDestinationsBySeason", post(tools::by_season))
        .route("/getDestinationsByPreferences", post(tools::by_preferences))
        .route("/getAllDestinations", post(tools::all_destinations))
        .route("/echoMessage", post(tools::echo_message))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "UP",
            "timestamp": Utc::now(),
            "service": SERVICE_NAME,
        })),
    )
}

/// Service information endpoint listing the callable tools
async fn service_info() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "service": SERVICE_NAME,
            "version": env!("CARGO_PKG_VERSION"),
            "endpoint": "/v1/tools",
            "availableTools": {
                "getDestinationsByActivity": "Get destinations by activity type (BEACH, ADVENTURE, etc.)",
                "getDestinationsByBudget": "Get destinations by budget (BUDGET, MODERATE, LUXURY)",
                "getDestinationsBySeason": "Get destinations by season (SPRING, SUMMER, etc.)",
                "getDestinationsByPreferences": "Get destinations matching multiple criteria",
                "getAllDestinations": "Get all available destinations",
            },
        })),
    )
}
