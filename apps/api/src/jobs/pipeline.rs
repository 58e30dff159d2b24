//! Job Creation Pipeline: form → validation → salary parse → skill
//! extraction → record → store.
//!
//! Nothing is written to the store unless every step succeeds.

use chrono::Utc;
use tracing::{info, warn};

use crate::errors::{AppError, ValidationErrors};
use crate::jobs::salary::{parse_salary_range, SalaryRange};
use crate::jobs::store::JobStore;
use crate::jobs::validation::{validate_job_form, JobForm};
use crate::models::job::{Job, NewJob};
use crate::skills::extractor::{extract_skills, SkillExtractor};

const PLACEHOLDER_APPLY_URL: &str = "#";

/// How to treat salary text that contains no usable number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SalaryPolicy {
    /// Record the posting with a 0 - 0 range.
    #[default]
    Lenient,
    /// Reject the submission with a field error on `salary_range`.
    Strict,
}

impl SalaryPolicy {
    pub fn from_strict_flag(strict: bool) -> Self {
        if strict {
            SalaryPolicy::Strict
        } else {
            SalaryPolicy::Lenient
        }
    }
}

/// Placeholder logo keyed by the company's initial.
pub fn logo_url_for(company: &str) -> String {
    let initial = company.trim().chars().next().unwrap_or('?');
    format!("https://placehold.co/100x100.png?text={initial}")
}

/// Runs the full creation pipeline and returns the stored posting.
///
/// Errors: `AppError::InvalidForm` for field failures (including an
/// unparseable salary under `SalaryPolicy::Strict`), `AppError::Collaborator`
/// when skill extraction fails.
pub async fn create_job(
    form: &JobForm,
    store: &JobStore,
    extractor: &dyn SkillExtractor,
    salary_policy: SalaryPolicy,
) -> Result<Job, AppError> {
    let valid = validate_job_form(form)?;

    let salary = parse_salary_range(&valid.salary_range);
    check_salary(&salary, &valid.salary_range, salary_policy)?;

    let skills = extract_skills(extractor, &valid.description).await?;

    let new_job = NewJob {
        logo_url: logo_url_for(&valid.company),
        title: valid.title,
        company: valid.company,
        location: valid.location,
        job_type: valid.job_type,
        experience_level: valid.experience_level.unwrap_or_default(),
        salary_min: salary.min,
        salary_max: salary.max,
        description: valid.description,
        apply_url: PLACEHOLDER_APPLY_URL.to_string(),
        deadline: Utc::now(),
        skills,
    };

    let job = store.insert(new_job).await;
    info!(
        "Created job {} '{}' at {} ({} - {})",
        job.id, job.title, job.company, job.salary_min, job.salary_max
    );
    Ok(job)
}

fn check_salary(
    salary: &SalaryRange,
    raw: &str,
    policy: SalaryPolicy,
) -> Result<(), ValidationErrors> {
    if !salary.ambiguous {
        return Ok(());
    }
    match policy {
        SalaryPolicy::Lenient => {
            warn!(
                "Salary range '{raw}' is ambiguous; recording {} - {}",
                salary.min, salary.max
            );
            Ok(())
        }
        SalaryPolicy::Strict => {
            let mut errors = ValidationErrors::new();
            errors.add(
                "salary_range",
                "Salary range must contain a readable number, e.g. 12 - 15.",
            );
            Err(errors)
        }
    }
}
