//! Field-level validation of job creation and job application submissions.

use serde::Deserialize;

use crate::errors::ValidationErrors;
use crate::models::job::{ExperienceLevel, JobType};

const MIN_TITLE_CHARS: usize = 2;
const MIN_COMPANY_CHARS: usize = 2;
const MIN_LOCATION_CHARS: usize = 2;
const MIN_DESCRIPTION_CHARS: usize = 10;
const MIN_APPLICANT_NAME_CHARS: usize = 2;

/// Raw job creation form, exactly as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "type", default)]
    pub job_type: String,
    #[serde(default)]
    pub salary_range: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub experience_level: Option<String>,
}

/// A job form that passed validation, trimmed and typed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidJobForm {
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: JobType,
    pub salary_range: String,
    pub description: String,
    pub experience_level: Option<ExperienceLevel>,
}

pub fn validate_job_form(form: &JobForm) -> Result<ValidJobForm, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let title = form.title.trim();
    if title.chars().count() < MIN_TITLE_CHARS {
        errors.add("title", "Job title must be at least 2 characters.");
    }

    let company = form.company.trim();
    if company.chars().count() < MIN_COMPANY_CHARS {
        errors.add("company", "Company name must be at least 2 characters.");
    }

    let location = form.location.trim();
    if location.chars().count() < MIN_LOCATION_CHARS {
        errors.add("location", "Location is required.");
    }

    let job_type = form.job_type.trim().parse::<JobType>().ok();
    if job_type.is_none() {
        errors.add(
            "type",
            "Job type must be one of Full-time, Part-time, Contract, Internship.",
        );
    }

    let salary_range = form.salary_range.trim();
    if salary_range.is_empty() {
        errors.add("salary_range", "Salary range is required.");
    }

    let description = form.description.trim();
    if description.chars().count() < MIN_DESCRIPTION_CHARS {
        errors.add("description", "Description must be at least 10 characters.");
    }

    let experience_level = match form.experience_level.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => match raw.parse::<ExperienceLevel>() {
            Ok(level) => Some(level),
            Err(()) => {
                errors.add(
                    "experience_level",
                    "Experience level must be one of Entry, Mid-level, Senior.",
                );
                None
            }
        },
    };

    let Some(job_type) = job_type else {
        return Err(errors);
    };

    errors.into_result(ValidJobForm {
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        job_type,
        salary_range: salary_range.to_string(),
        description: description.to_string(),
        experience_level,
    })
}

/// Job application submitted by a candidate.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicationForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

pub fn validate_application(form: &ApplicationForm) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if form.name.trim().chars().count() < MIN_APPLICANT_NAME_CHARS {
        errors.add("name", "Name must be at least 2 characters.");
    }
    if !looks_like_email(form.email.trim()) {
        errors.add("email", "Please enter a valid email address.");
    }

    errors.into_result(())
}

/// `local@domain.tld` with no whitespace; deliverability is not checked.
fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
