//! Axum route handlers for the Skills API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::skills::extractor::extract_skills;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExtractSkillsRequest {
    pub job_description: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractSkillsResponse {
    pub skills: Vec<String>,
}

/// POST /api/v1/skills/extract
///
/// Returns the top 3 skills to highlight for an arbitrary job description.
pub async fn handle_extract_skills(
    State(state): State<AppState>,
    AppJson(request): AppJson<ExtractSkillsRequest>,
) -> Result<Json<ExtractSkillsResponse>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let skills = extract_skills(state.skill_extractor.as_ref(), &request.job_description).await?;

    Ok(Json(ExtractSkillsResponse { skills }))
}
