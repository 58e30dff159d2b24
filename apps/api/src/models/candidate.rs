use serde::{Deserialize, Serialize};

/// A profile on the fixed talent roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub title: String,
    pub image_url: String,
    pub skills: Vec<String>,
    pub summary: String,
}
