//! Filter Engine: computes the visible subset of postings for a search.

use serde::Deserialize;

use crate::models::job::Job;

/// Job type value that disables type filtering.
pub const ALL_JOB_TYPES: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search_term: String,
    pub location: String,
    /// A job type label, or `"All"`.
    pub job_type: String,
    /// Inclusive `[min, max]` bounds on the posting's salary range.
    pub salary_range: (u64, u64),
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            location: String::new(),
            job_type: ALL_JOB_TYPES.to_string(),
            salary_range: (0, u64::MAX),
        }
    }
}

/// Query-string form of `FilterCriteria`; absent parameters take the defaults.
#[derive(Debug, Default, Deserialize)]
pub struct JobSearchQuery {
    pub search: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub salary_min: Option<u64>,
    pub salary_max: Option<u64>,
}

impl From<JobSearchQuery> for FilterCriteria {
    fn from(query: JobSearchQuery) -> Self {
        let defaults = FilterCriteria::default();
        FilterCriteria {
            search_term: query.search.unwrap_or(defaults.search_term),
            location: query.location.unwrap_or(defaults.location),
            job_type: query
                .job_type
                .filter(|t| !t.is_empty())
                .unwrap_or(defaults.job_type),
            salary_range: (
                query.salary_min.unwrap_or(defaults.salary_range.0),
                query.salary_max.unwrap_or(defaults.salary_range.1),
            ),
        }
    }
}

/// Returns the postings matching every criterion, in their original order.
pub fn filter_jobs(jobs: &[Job], criteria: &FilterCriteria) -> Vec<Job> {
    let search = criteria.search_term.to_lowercase();
    let location = criteria.location.to_lowercase();

    jobs.iter()
        .filter(|job| {
            let matches_search = job.title.to_lowercase().contains(&search)
                || job.company.to_lowercase().contains(&search);
            let matches_location = job.location.to_lowercase().contains(&location);
            let matches_type =
                criteria.job_type == ALL_JOB_TYPES || job.job_type.as_str() == criteria.job_type;
            let (min, max) = criteria.salary_range;
            let matches_salary = job.salary_min >= min && job.salary_max <= max;

            matches_search && matches_location && matches_type && matches_salary
        })
        .cloned()
        .collect()
}
