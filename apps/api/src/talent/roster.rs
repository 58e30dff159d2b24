//! The fixed, read-only talent roster offered to the matcher.

use crate::models::candidate::Candidate;

#[derive(Debug, Clone)]
pub struct CandidateRoster {
    candidates: Vec<Candidate>,
}

impl CandidateRoster {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    /// The roster the service ships with.
    pub fn builtin() -> Self {
        Self::new(vec![
            candidate(
                "c1",
                "Aarav Sharma",
                "Senior Backend Engineer",
                &["Go", "PostgreSQL", "Kubernetes", "gRPC"],
                "Eight years building high-throughput payment APIs. Led the migration of a \
                 monolith to Go microservices on Kubernetes.",
            ),
            candidate(
                "c2",
                "Priya Nair",
                "Frontend Engineer",
                &["React", "TypeScript", "Next.js", "Accessibility"],
                "Ships design-system driven React applications with a focus on performance \
                 and WCAG compliance.",
            ),
            candidate(
                "c3",
                "Daniel Okafor",
                "Data Scientist",
                &["Python", "PyTorch", "SQL", "Experimentation"],
                "Builds recommendation and forecasting models; runs A/B testing programs \
                 end to end.",
            ),
            candidate(
                "c4",
                "Meera Iyer",
                "DevOps Engineer",
                &["Terraform", "AWS", "CI/CD", "Observability"],
                "Automates cloud infrastructure and release pipelines; owns on-call tooling \
                 and SLO dashboards.",
            ),
            candidate(
                "c5",
                "Lucas Martin",
                "Mobile Developer",
                &["Kotlin", "Swift", "Flutter", "Firebase"],
                "Cross-platform mobile developer with three consumer apps above a million \
                 installs.",
            ),
            candidate(
                "c6",
                "Sara Lindqvist",
                "Product Designer",
                &["Figma", "User Research", "Prototyping", "Design Systems"],
                "Turns research insights into shippable flows; maintains a multi-brand \
                 component library.",
            ),
        ])
    }

    pub fn all(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn find(&self, id: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

fn candidate(id: &str, name: &str, title: &str, skills: &[&str], summary: &str) -> Candidate {
    Candidate {
        id: id.to_string(),
        name: name.to_string(),
        title: title.to_string(),
        image_url: format!("https://placehold.co/100x100.png?text={}", initial(name)),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        summary: summary.to_string(),
    }
}

fn initial(name: &str) -> char {
    name.chars().next().unwrap_or('?')
}
