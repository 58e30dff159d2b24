//! Talent Matcher: picks the single best candidate from the fixed roster for a
//! job description.
//!
//! The selection itself is delegated to the model; this module only exposes the
//! roster as a tool and resolves the answer back to a roster entry.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::CollaboratorError;
use crate::llm_client::prompts::render_job_description;
use crate::llm_client::{LlmClient, ToolDefinition};
use crate::models::candidate::Candidate;
use crate::talent::prompts::{
    talent_matching_system, CANDIDATES_TOOL_DESCRIPTION, CANDIDATES_TOOL_NAME,
    TALENT_MATCH_PROMPT_TEMPLATE,
};
use crate::talent::roster::CandidateRoster;

#[async_trait]
pub trait TalentMatcher: Send + Sync {
    async fn find_talent(&self, job_description: &str) -> Result<Candidate, CollaboratorError>;
}

#[derive(Debug, Deserialize)]
struct TalentMatchOutput {
    candidate_id: String,
}

pub struct LlmTalentMatcher {
    llm: LlmClient,
    roster: Arc<CandidateRoster>,
}

impl LlmTalentMatcher {
    pub fn new(llm: LlmClient, roster: Arc<CandidateRoster>) -> Self {
        Self { llm, roster }
    }
}

#[async_trait]
impl TalentMatcher for LlmTalentMatcher {
    async fn find_talent(&self, job_description: &str) -> Result<Candidate, CollaboratorError> {
        if self.roster.is_empty() {
            return Err(CollaboratorError::TalentMatching(
                "candidate roster is empty".to_string(),
            ));
        }

        let prompt = render_job_description(TALENT_MATCH_PROMPT_TEMPLATE, job_description);
        let tools = [candidates_tool()];
        let roster = self.roster.as_ref();

        let output: TalentMatchOutput = self
            .llm
            .call_json_with_tools(&prompt, &talent_matching_system(), &tools, |name, _input| {
                run_roster_tool(roster, name)
            })
            .await
            .map_err(|e| CollaboratorError::TalentMatching(e.to_string()))?;

        resolve_candidate(roster, &output.candidate_id)
    }
}

fn candidates_tool() -> ToolDefinition {
    ToolDefinition {
        name: CANDIDATES_TOOL_NAME,
        description: CANDIDATES_TOOL_DESCRIPTION,
        input_schema: json!({ "type": "object", "properties": {} }),
    }
}

fn run_roster_tool(roster: &CandidateRoster, name: &str) -> Result<Value, String> {
    if name != CANDIDATES_TOOL_NAME {
        return Err(format!("unknown tool '{name}'"));
    }
    Ok(json!({ "candidates": roster.all() }))
}

fn resolve_candidate(roster: &CandidateRoster, id: &str) -> Result<Candidate, CollaboratorError> {
    roster.find(id.trim()).cloned().ok_or_else(|| {
        CollaboratorError::TalentMatching(format!("model chose unknown candidate '{id}'"))
    })
}
