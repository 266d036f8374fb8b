use axum::{extract::rejection::JsonRejection, Json};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::services::{echo, recommendations};

/// Envelope for every tool result
///
/// Tool calls always answer 200 with a display string; validation failures
/// put the error text in `result` rather than switching to an error shape.
#[derive(Debug, Serialize)]
pub struct ToolResponse {
    pub result: String,
}

impl From<String> for ToolResponse {
    fn from(result: String) -> Self {
        Self { result }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRequest {
    pub activity_type: String,
}

#[derive(Debug, Deserialize)]
pub struct BudgetRequest {
    pub budget: String,
}

#[derive(Debug, Deserialize)]
pub struct SeasonRequest {
    pub season: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesRequest {
    pub activity: Option<String>,
    pub budget: Option<String>,
    pub season: Option<String>,
    pub family_friendly: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct EchoRequest {
    pub message: String,
}

/// POST /v1/tools/getDestinationsByActivity
pub async fn by_activity(
    payload: Result<Json<ActivityRequest>, JsonRejection>,
) -> Json<ToolResponse> {
    let result = match payload {
        Ok(Json(request)) => {
            recommendations::get_destinations_by_activity(&request.activity_type)
        }
        Err(rejection) => recover(rejection, ValidationError::InvalidActivity),
    };
    Json(result.into())
}

/// POST /v1/tools/getDestinationsByBudget
pub async fn by_budget(payload: Result<Json<BudgetRequest>, JsonRejection>) -> Json<ToolResponse> {
    let result = match payload {
        Ok(Json(request)) => recommendations::get_destinations_by_budget(&request.budget),
        Err(rejection) => recover(rejection, ValidationError::InvalidBudget),
    };
    Json(result.into())
}

/// POST /v1/tools/getDestinationsBySeason
pub async fn by_season(payload: Result<Json<SeasonRequest>, JsonRejection>) -> Json<ToolResponse> {
    let result = match payload {
        Ok(Json(request)) => recommendations::get_destinations_by_season(&request.season),
        Err(rejection) => recover(rejection, ValidationError::InvalidSeason),
    };
    Json(result.into())
}

/// POST /v1/tools/getDestinationsByPreferences
pub async fn by_preferences(
    payload: Result<Json<PreferencesRequest>, JsonRejection>,
) -> Json<ToolResponse> {
    let result = match payload {
        Ok(Json(request)) => recommendations::get_destinations_by_preferences(
            request.activity.as_deref(),
            request.budget.as_deref(),
            request.season.as_deref(),
            request.family_friendly,
        ),
        Err(rejection) => recover(rejection, ValidationError::InvalidInput),
    };
    Json(result.into())
}

/// POST /v1/tools/getAllDestinations
pub async fn all_destinations() -> Json<ToolResponse> {
    Json(recommendations::get_all_destinations().into())
}

/// POST /v1/tools/echoMessage
pub async fn echo_message(Json(request): Json<EchoRequest>) -> Json<ToolResponse> {
    Json(echo::echo_message(request.message).into())
}

/// Unreadable bodies resolve to the tool's own error string, keeping the
/// everything-is-a-display-string contract at this boundary.
fn recover(rejection: JsonRejection, error: ValidationError) -> String {
    tracing::debug!(error = %rejection, "malformed tool request");
    error.to_string()
}
