use std::sync::Arc;

use crate::config::Config;
use crate::jobs::store::JobStore;
use crate::skills::extractor::SkillExtractor;
use crate::talent::matcher::TalentMatcher;
use crate::talent::roster::CandidateRoster;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one job store for the process; every handler sees the same list.
    pub jobs: JobStore,
    /// Pluggable skill extractor. Default: LlmSkillExtractor.
    pub skill_extractor: Arc<dyn SkillExtractor>,
    /// Pluggable talent matcher. Default: LlmTalentMatcher over `roster`.
    pub talent_matcher: Arc<dyn TalentMatcher>,
    pub roster: Arc<CandidateRoster>,
    pub config: Config,
}
