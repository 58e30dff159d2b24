use crate::llm_client::prompts::JSON_ONLY_RULES;

/// System prompt for skill extraction.
pub fn skill_extraction_system() -> String {
    format!(
        "You are an expert career coach specializing in resume writing. {JSON_ONLY_RULES}"
    )
}

/// Skill extraction prompt template. Replace `{job_description}` before sending.
pub const SKILL_EXTRACTION_PROMPT_TEMPLATE: &str = r#"Analyze the job description below and extract the top 3 skills that an applicant should highlight in their resume to increase their chances of getting an interview.

Return a JSON object with this EXACT schema (no extra fields):
{
  "skills": ["first skill", "second skill", "third skill"]
}

Rules:
- Exactly 3 entries, most important first.
- Each entry is a short skill name (1-4 words), not a sentence.
- Do not number the entries.

Job Description:
{job_description}"#;
