//! Job application intake. Applications are validated and logged; nothing is
//! stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::store::JobStore;
use crate::jobs::validation::{validate_application, ApplicationForm};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationReceipt {
    pub application_id: Uuid,
    pub job_id: String,
    pub job_title: String,
    pub company: String,
    pub submitted_at: DateTime<Utc>,
    pub message: String,
}

pub async fn submit_application(
    store: &JobStore,
    job_id: &str,
    form: &ApplicationForm,
) -> Result<ApplicationReceipt, AppError> {
    let job = store
        .get(job_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;

    validate_application(form)?;

    let receipt = ApplicationReceipt {
        application_id: Uuid::new_v4(),
        message: format!(
            "Your application for the {} position has been submitted.",
            job.title
        ),
        job_id: job.id,
        job_title: job.title,
        company: job.company,
        submitted_at: Utc::now(),
    };

    info!(
        "Application {} submitted for job {} '{}' by {} <{}>",
        receipt.application_id,
        receipt.job_id,
        receipt.job_title,
        form.name.trim(),
        form.email.trim()
    );

    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::seed::sample_new_job;

    fn applicant() -> ApplicationForm {
        ApplicationForm {
            name: "Kavya Rao".to_string(),
            email: "kavya@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_receipt_for_existing_job() {
        let store = JobStore::new();
        let job = store.insert(sample_new_job("Site Reliability Engineer")).await;

        let receipt = submit_application(&store, &job.id, &applicant()).await.unwrap();

        assert_eq!(receipt.job_id, job.id);
        assert_eq!(receipt.company, "Acme");
        assert_eq!(
            receipt.message,
            "Your application for the Site Reliability Engineer position has been submitted."
        );
    }

    #[tokio::test]
    async fn test_unknown_job_is_not_found() {
        let store = JobStore::new();
        let err = submit_application(&store, "42", &applicant()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_invalid_applicant_rejected() {
        let store = JobStore::new();
        let job = store.insert(sample_new_job("Engineer")).await;
        let form = ApplicationForm {
            name: "K".to_string(),
            email: "not-an-email".to_string(),
        };

        let err = submit_application(&store, &job.id, &form).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidForm(_)));
    }
}
