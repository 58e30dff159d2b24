//! Axum route handlers for the Talent API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::models::candidate::Candidate;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FindTalentRequest {
    pub job_description: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FindTalentResponse {
    pub candidate: Candidate,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CandidateListResponse {
    pub candidates: Vec<Candidate>,
}

/// POST /api/v1/talent/match
///
/// Returns the single roster candidate the model judges the best fit.
pub async fn handle_find_talent(
    State(state): State<AppState>,
    AppJson(request): AppJson<FindTalentRequest>,
) -> Result<Json<FindTalentResponse>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let candidate = state
        .talent_matcher
        .find_talent(&request.job_description)
        .await?;
    info!("Matched candidate {} ({})", candidate.id, candidate.name);

    Ok(Json(FindTalentResponse { candidate }))
}

/// GET /api/v1/talent/candidates
pub async fn handle_list_candidates(State(state): State<AppState>) -> Json<CandidateListResponse> {
    Json(CandidateListResponse {
        candidates: state.roster.all().to_vec(),
    })
}
