pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::jobs::handlers as jobs;
use crate::skills::handlers as skills;
use crate::state::AppState;
use crate::talent::handlers as talent;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Jobs API
        .route(
            "/api/v1/jobs",
            get(jobs::handle_list_jobs).post(jobs::handle_create_job),
        )
        .route("/api/v1/jobs/:id", get(jobs::handle_get_job))
        .route("/api/v1/jobs/:id/apply", post(jobs::handle_apply))
        .route("/api/v1/jobs/:id/skills", post(jobs::handle_analyze_job))
        // AI helpers
        .route("/api/v1/skills/extract", post(skills::handle_extract_skills))
        .route("/api/v1/talent/match", post(talent::handle_find_talent))
        .route(
            "/api/v1/talent/candidates",
            get(talent::handle_list_candidates),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::jobs::seed::sample_jobs;
    use crate::jobs::store::JobStore;
    use crate::skills::extractor::test_support::StubSkillExtractor;
    use crate::talent::matcher::test_support::StubTalentMatcher;
    use crate::talent::roster::CandidateRoster;

    fn test_config() -> Config {
        Config {
            anthropic_api_key: "test-key".to_string(),
            port: 0,
            rust_log: "debug".to_string(),
            seed_sample_jobs: true,
            strict_salary_parsing: false,
        }
    }

    fn test_state(extractor: StubSkillExtractor, matched: Option<&str>) -> AppState {
        let roster = CandidateRoster::builtin();
        AppState {
            jobs: JobStore::with_jobs(sample_jobs()),
            skill_extractor: Arc::new(extractor),
            talent_matcher: Arc::new(StubTalentMatcher {
                roster: roster.clone(),
                candidate_id: matched.map(str::to_string),
            }),
            roster: Arc::new(roster),
            config: test_config(),
        }
    }

    fn default_state() -> AppState {
        test_state(
            StubSkillExtractor::returning(&["Go", "Distributed Systems", "SQL"]),
            Some("c1"),
        )
    }

    async fn send(state: AppState, request: Request<Body>) -> (StatusCode, Value) {
        let response = build_router(state).oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let value = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, value)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn backend_form() -> Value {
        json!({
            "title": "Backend Engineer",
            "company": "Acme",
            "location": "Remote",
            "type": "Full-time",
            "salary_range": "10-12",
            "description": "Build and maintain backend services for our platform."
        })
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(default_state(), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_list_jobs_without_filters_returns_all() {
        let (status, body) = send(default_state(), get("/api/v1/jobs")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 6);
        assert_eq!(body["matched"], 6);
        assert_eq!(body["jobs"][0]["id"], "6");
    }

    #[tokio::test]
    async fn test_list_jobs_with_filters() {
        let (status, body) = send(
            default_state(),
            get("/api/v1/jobs?location=chennai&job_type=Full-time&salary_max=125000"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matched"], 1);
        assert_eq!(body["jobs"][0]["title"], "Full Stack Developer");
    }

    #[tokio::test]
    async fn test_create_job_then_visible_in_list() {
        let state = default_state();

        let (status, body) = send(state.clone(), post_json("/api/v1/jobs", backend_form())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["job"]["id"], "7");
        assert_eq!(body["job"]["salary_min"], 10_000);
        assert_eq!(body["job"]["salary_max"], 12_000);
        assert_eq!(body["job"]["experience_level"], "Mid-level");
        assert_eq!(body["job"]["skills"], json!(["Go", "Distributed Systems", "SQL"]));

        let (_, list) = send(state, get("/api/v1/jobs?search=acme")).await;
        assert_eq!(list["matched"], 1);
        assert_eq!(list["jobs"][0]["id"], "7");
    }

    #[tokio::test]
    async fn test_create_job_invalid_form_lists_fields() {
        let state = default_state();
        let (status, body) = send(
            state.clone(),
            post_json("/api/v1/jobs", json!({"title": "X", "type": "Gig"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        let fields: Vec<&str> = body["error"]["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["field"].as_str().unwrap())
            .collect();
        assert!(fields.contains(&"title"));
        assert!(fields.contains(&"type"));
        assert_eq!(state.jobs.len().await, 6);
    }

    #[tokio::test]
    async fn test_malformed_query_uses_error_envelope() {
        let (status, body) = send(default_state(), get("/api/v1/jobs?salary_min=abc")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"].is_string());
    }

    #[tokio::test]
    async fn test_mistyped_json_body_uses_error_envelope() {
        let state = default_state();
        let (status, body) =
            send(state.clone(), post_json("/api/v1/jobs", json!({"title": 5}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(state.jobs.len().await, 6);
    }

    #[tokio::test]
    async fn test_unparseable_json_body_uses_error_envelope() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/skills/extract")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send(default_state(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_strict_mode_rejects_overflowing_salary() {
        let mut state = default_state();
        state.config.strict_salary_parsing = true;

        let mut form = backend_form();
        form["salary_range"] = json!("99999999999999999999-5");
        let (status, body) = send(state.clone(), post_json("/api/v1/jobs", form)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["fields"][0]["field"], "salary_range");
        assert_eq!(state.jobs.len().await, 6);
    }

    #[tokio::test]
    async fn test_create_job_extraction_failure_is_bad_gateway() {
        let state = test_state(StubSkillExtractor::failing("upstream 500"), None);
        let (status, body) = send(state.clone(), post_json("/api/v1/jobs", backend_form())).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(
            body["error"]["message"],
            "Failed to analyze skills. Please try again later."
        );
        assert_eq!(state.jobs.len().await, 6);
    }

    #[tokio::test]
    async fn test_get_job_found_and_missing() {
        let (status, body) = send(default_state(), get("/api/v1/jobs/3")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["job"]["id"], "3");

        let (status, body) = send(default_state(), get("/api/v1/jobs/999")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_apply_returns_receipt() {
        let (status, body) = send(
            default_state(),
            post_json(
                "/api/v1/jobs/2/apply",
                json!({"name": "Kavya Rao", "email": "kavya@example.com"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(body["job_id"], "2");
        assert!(body["application_id"].is_string());
    }

    #[tokio::test]
    async fn test_analyze_existing_job() {
        let (status, body) = send(default_state(), post_json("/api/v1/jobs/1/skills", json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["skills"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_extract_skills_endpoint() {
        let (status, body) = send(
            default_state(),
            post_json(
                "/api/v1/skills/extract",
                json!({"job_description": "Build APIs in Go"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["skills"], json!(["Go", "Distributed Systems", "SQL"]));
    }

    #[tokio::test]
    async fn test_extract_skills_rejects_blank_description() {
        let (status, _) = send(
            default_state(),
            post_json("/api/v1/skills/extract", json!({"job_description": "   "})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_find_talent_endpoint() {
        let (status, body) = send(
            default_state(),
            post_json(
                "/api/v1/talent/match",
                json!({"job_description": "Senior Go engineer for payments"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["candidate"]["id"], "c1");
    }

    #[tokio::test]
    async fn test_find_talent_failure_message() {
        let state = test_state(StubSkillExtractor::returning(&["a", "b", "c"]), None);
        let (status, body) = send(
            state,
            post_json("/api/v1/talent/match", json!({"job_description": "Anything"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(
            body["error"]["message"],
            "Failed to find a matching candidate. Please try again later."
        );
    }

    #[tokio::test]
    async fn test_list_candidates() {
        let (status, body) = send(default_state(), get("/api/v1/talent/candidates")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["candidates"].as_array().unwrap().len(), 6);
    }
}
