// Shared prompt fragments. Each collaborator that calls the LLM keeps its own
// prompts.rs alongside it and builds on these.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_RULES: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Substitutes the job description into a `{job_description}` template.
pub fn render_job_description(template: &str, job_description: &str) -> String {
    template.replace("{job_description}", job_description.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_job_description_trims_input() {
        let rendered = render_job_description("JD: {job_description}.", "  Build APIs \n");
        assert_eq!(rendered, "JD: Build APIs.");
    }
}
