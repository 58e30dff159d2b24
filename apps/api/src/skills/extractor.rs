//! Skill Extractor: pluggable, trait-based collaborator that pulls the top
//! skills out of a free-text job description.
//!
//! Default: `LlmSkillExtractor` (Claude via `llm_client`).
//! `AppState` holds an `Arc<dyn SkillExtractor>`; tests swap in a stub.

use async_trait::async_trait;
use serde::Deserialize;

use crate::errors::CollaboratorError;
use crate::llm_client::prompts::render_job_description;
use crate::llm_client::LlmClient;
use crate::skills::prompts::{skill_extraction_system, SKILL_EXTRACTION_PROMPT_TEMPLATE};

/// Number of skills every successful extraction yields.
pub const SKILL_COUNT: usize = 3;

/// The skill extractor trait. Implementations are not expected to be
/// deterministic; identical descriptions may yield different skills.
#[async_trait]
pub trait SkillExtractor: Send + Sync {
    async fn extract(&self, job_description: &str) -> Result<Vec<String>, CollaboratorError>;
}

/// Extracts skills and enforces the output contract: exactly `SKILL_COUNT`
/// non-empty, trimmed entries. Anything else counts as a collaborator failure.
pub async fn extract_skills(
    extractor: &dyn SkillExtractor,
    job_description: &str,
) -> Result<Vec<String>, CollaboratorError> {
    let skills = extractor.extract(job_description).await?;
    normalize_skills(skills)
}

fn normalize_skills(skills: Vec<String>) -> Result<Vec<String>, CollaboratorError> {
    let skills: Vec<String> = skills
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if skills.len() != SKILL_COUNT {
        return Err(CollaboratorError::SkillExtraction(format!(
            "expected {SKILL_COUNT} skills, got {}",
            skills.len()
        )));
    }
    Ok(skills)
}

// ────────────────────────────────────────────────────────────────────────────
// LlmSkillExtractor
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct SkillExtractionOutput {
    skills: Vec<String>,
}

pub struct LlmSkillExtractor(pub LlmClient);

#[async_trait]
impl SkillExtractor for LlmSkillExtractor {
    async fn extract(&self, job_description: &str) -> Result<Vec<String>, CollaboratorError> {
        let prompt = render_job_description(SKILL_EXTRACTION_PROMPT_TEMPLATE, job_description);
        let output: SkillExtractionOutput = self
            .0
            .call_json(&prompt, &skill_extraction_system())
            .await
            .map_err(|e| CollaboratorError::SkillExtraction(e.to_string()))?;
        Ok(output.skills)
    }
}
