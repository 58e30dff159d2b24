//! Sample catalogue loaded at startup when `SEED_SAMPLE_JOBS` is on.

use chrono::{Duration, Utc};

use crate::jobs::pipeline::logo_url_for;
use crate::models::job::{ExperienceLevel, Job, JobType, NewJob};

struct SampleJob {
    title: &'static str,
    company: &'static str,
    location: &'static str,
    job_type: JobType,
    experience_level: ExperienceLevel,
    salary: (u64, u64),
    description: &'static str,
    skills: [&'static str; 3],
    posted_days_ago: i64,
}

const SAMPLE_JOBS: &[SampleJob] = &[
    SampleJob {
        title: "Full Stack Developer",
        company: "Amazon",
        location: "Chennai",
        job_type: JobType::FullTime,
        experience_level: ExperienceLevel::MidLevel,
        salary: (90_000, 120_000),
        description: "Design, build and operate customer-facing web services end to end, \
                      from React front ends to Java microservices on AWS.",
        skills: ["React", "Java", "AWS"],
        posted_days_ago: 1,
    },
    SampleJob {
        title: "Backend Engineer",
        company: "Razorpay",
        location: "Bengaluru",
        job_type: JobType::FullTime,
        experience_level: ExperienceLevel::Senior,
        salary: (140_000, 180_000),
        description: "Own the payment routing services. You will scale Go services that \
                      process millions of transactions per day on PostgreSQL and Kafka.",
        skills: ["Go", "PostgreSQL", "Kafka"],
        posted_days_ago: 2,
    },
    SampleJob {
        title: "UI/UX Designer",
        company: "Swiggy",
        location: "Remote",
        job_type: JobType::Contract,
        experience_level: ExperienceLevel::MidLevel,
        salary: (60_000, 80_000),
        description: "Research, prototype and deliver consumer ordering flows in Figma \
                      alongside product and engineering.",
        skills: ["Figma", "User Research", "Prototyping"],
        posted_days_ago: 3,
    },
    SampleJob {
        title: "Data Analyst Intern",
        company: "Zomato",
        location: "Gurugram",
        job_type: JobType::Internship,
        experience_level: ExperienceLevel::Entry,
        salary: (15_000, 20_000),
        description: "Support the growth team with SQL dashboards and experiment analysis \
                      for restaurant partner programs.",
        skills: ["SQL", "Excel", "Data Visualization"],
        posted_days_ago: 5,
    },
    SampleJob {
        title: "DevOps Engineer",
        company: "Freshworks",
        location: "Chennai",
        job_type: JobType::FullTime,
        experience_level: ExperienceLevel::MidLevel,
        salary: (100_000, 130_000),
        description: "Run Kubernetes clusters, Terraform-managed AWS accounts and the CI/CD \
                      pipelines behind our SaaS products.",
        skills: ["Kubernetes", "Terraform", "CI/CD"],
        posted_days_ago: 8,
    },
    SampleJob {
        title: "Technical Writer",
        company: "Postman",
        location: "Remote",
        job_type: JobType::PartTime,
        experience_level: ExperienceLevel::Entry,
        salary: (30_000, 45_000),
        description: "Write API guides and tutorials for developers adopting the Postman \
                      platform.",
        skills: ["Technical Writing", "REST APIs", "Markdown"],
        posted_days_ago: 12,
    },
];

/// The sample postings, newest first, with ids counting up from the oldest
/// so the store's next id (count + 1) stays unique.
pub fn sample_jobs() -> Vec<Job> {
    let now = Utc::now();
    let total = SAMPLE_JOBS.len();

    SAMPLE_JOBS
        .iter()
        .enumerate()
        .map(|(index, sample)| {
            NewJob {
                title: sample.title.to_string(),
                company: sample.company.to_string(),
                logo_url: logo_url_for(sample.company),
                location: sample.location.to_string(),
                job_type: sample.job_type,
                experience_level: sample.experience_level,
                salary_min: sample.salary.0,
                salary_max: sample.salary.1,
                description: sample.description.to_string(),
                apply_url: "#".to_string(),
                deadline: now - Duration::days(sample.posted_days_ago),
                skills: sample.skills.iter().map(|s| s.to_string()).collect(),
            }
            .with_id((total - index).to_string())
        })
        .collect()
}

#[cfg(test)]
pub(crate) fn sample_new_job(title: &str) -> NewJob {
    NewJob {
        title: title.to_string(),
        company: "Acme".to_string(),
        logo_url: logo_url_for("Acme"),
        location: "Remote".to_string(),
        job_type: JobType::FullTime,
        experience_level: ExperienceLevel::MidLevel,
        salary_min: 10_000,
        salary_max: 12_000,
        description: "Build and maintain backend services.".to_string(),
        apply_url: "#".to_string(),
        deadline: Utc::now(),
        skills: vec!["Go".to_string(), "SQL".to_string(), "Docker".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::store::JobStore;

    #[test]
    fn test_sample_ids_count_down_from_total() {
        let jobs = sample_jobs();
        let ids: Vec<&str> = jobs.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["6", "5", "4", "3", "2", "1"]);
    }

    #[test]
    fn test_sample_jobs_hold_invariants() {
        for job in sample_jobs() {
            assert!(job.salary_min <= job.salary_max, "{}", job.title);
            assert_eq!(job.skills.len(), 3, "{}", job.title);
        }
    }

    #[tokio::test]
    async fn test_insert_after_seed_continues_ids() {
        let store = JobStore::with_jobs(sample_jobs());
        let job = store.insert(sample_new_job("Fresh")).await;
        assert_eq!(job.id, "7");
    }
}
