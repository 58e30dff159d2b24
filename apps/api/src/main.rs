mod config;
mod errors;
mod extract;
mod jobs;
mod llm_client;
mod models;
mod routes;
mod skills;
mod state;
mod talent;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::jobs::seed::sample_jobs;
use crate::jobs::store::JobStore;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::skills::extractor::LlmSkillExtractor;
use crate::state::AppState;
use crate::talent::matcher::LlmTalentMatcher;
use crate::talent::roster::CandidateRoster;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Job Board API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the job store
    let jobs = if config.seed_sample_jobs {
        JobStore::with_jobs(sample_jobs())
    } else {
        JobStore::new()
    };
    info!("Job store initialized with {} posting(s)", jobs.len().await);

    // Initialize LLM client and the collaborators built on it
    let llm = LlmClient::new(config.anthropic_api_key.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let roster = Arc::new(CandidateRoster::builtin());
    info!("Talent roster loaded ({} candidates)", roster.all().len());

    if config.strict_salary_parsing {
        info!("Strict salary parsing enabled");
    }

    // Build app state
    let state = AppState {
        jobs,
        skill_extractor: Arc::new(LlmSkillExtractor(llm.clone())),
        talent_matcher: Arc::new(LlmTalentMatcher::new(llm, roster.clone())),
        roster,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
