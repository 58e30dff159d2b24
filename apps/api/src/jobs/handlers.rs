//! Axum route handlers for the Jobs API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extract::{AppJson, AppQuery};
use crate::jobs::apply::{submit_application, ApplicationReceipt};
use crate::jobs::filter::{filter_jobs, FilterCriteria, JobSearchQuery};
use crate::jobs::pipeline::{create_job, SalaryPolicy};
use crate::jobs::validation::{ApplicationForm, JobForm};
use crate::models::job::Job;
use crate::skills::extractor::extract_skills;
use crate::skills::handlers::ExtractSkillsResponse;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct JobListResponse {
    pub jobs: Vec<Job>,
    /// Postings in the store before filtering.
    pub total: usize,
    pub matched: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JobResponse {
    pub job: Job,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/jobs
///
/// Lists postings matching the optional `search`, `location`, `job_type`,
/// `salary_min` and `salary_max` query parameters, newest first.
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<JobSearchQuery>,
) -> Json<JobListResponse> {
    let criteria = FilterCriteria::from(query);
    let all = state.jobs.list().await;
    let jobs = filter_jobs(&all, &criteria);

    Json(JobListResponse {
        total: all.len(),
        matched: jobs.len(),
        jobs,
    })
}

/// POST /api/v1/jobs
///
/// Validates the form, extracts skills from the description and publishes the
/// posting.
pub async fn handle_create_job(
    State(state): State<AppState>,
    AppJson(form): AppJson<JobForm>,
) -> Result<(StatusCode, Json<JobResponse>), AppError> {
    let policy = SalaryPolicy::from_strict_flag(state.config.strict_salary_parsing);
    let job = create_job(&form, &state.jobs, state.skill_extractor.as_ref(), policy).await?;

    Ok((StatusCode::CREATED, Json(JobResponse { job })))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JobResponse>, AppError> {
    let job = state
        .jobs
        .get(&id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;

    Ok(Json(JobResponse { job }))
}

/// POST /api/v1/jobs/:id/apply
pub async fn handle_apply(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(form): AppJson<ApplicationForm>,
) -> Result<(StatusCode, Json<ApplicationReceipt>), AppError> {
    let receipt = submit_application(&state.jobs, &id, &form).await?;
    Ok((StatusCode::ACCEPTED, Json(receipt)))
}

/// POST /api/v1/jobs/:id/skills
///
/// Runs skill extraction on an existing posting's description. The posting
/// itself is not changed.
pub async fn handle_analyze_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ExtractSkillsResponse>, AppError> {
    let job = state
        .jobs
        .get(&id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;

    let skills = extract_skills(state.skill_extractor.as_ref(), &job.description).await?;

    Ok(Json(ExtractSkillsResponse { skills }))
}
