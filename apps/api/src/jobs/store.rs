//! Job Record Store: the single in-memory owner of the session's postings.
//!
//! Cloning a `JobStore` clones the handle, not the data: every consumer that
//! holds a clone observes the same list.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::job::{Job, NewJob};

#[derive(Debug, Clone, Default)]
pub struct JobStore {
    jobs: Arc<RwLock<Vec<Job>>>,
}

impl JobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with `jobs`, kept in the given order.
    pub fn with_jobs(jobs: Vec<Job>) -> Self {
        Self {
            jobs: Arc::new(RwLock::new(jobs)),
        }
    }

    /// Snapshot of all postings, newest first.
    pub async fn list(&self) -> Vec<Job> {
        self.jobs.read().await.clone()
    }

    pub async fn get(&self, id: &str) -> Option<Job> {
        self.jobs.read().await.iter().find(|j| j.id == id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.jobs.read().await.len()
    }

    /// Assigns the next id (current count + 1) and prepends the posting.
    /// Both happen under one write lock, so concurrent inserts never share an id.
    pub async fn insert(&self, new_job: NewJob) -> Job {
        let mut jobs = self.jobs.write().await;
        let job = new_job.with_id((jobs.len() + 1).to_string());
        jobs.insert(0, job.clone());
        job
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::seed::sample_new_job;
    use std::collections::HashSet;

    #[tokio::test]
    async fn test_insert_prepends_and_assigns_running_ids() {
        let store = JobStore::new();
        let first = store.insert(sample_new_job("First")).await;
        let second = store.insert(sample_new_job("Second")).await;

        assert_eq!(first.id, "1");
        assert_eq!(second.id, "2");

        let listed = store.list().await;
        assert_eq!(listed[0].title, "Second");
        assert_eq!(listed[1].title, "First");
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let store = JobStore::new();
        store.insert(sample_new_job("Only")).await;

        assert_eq!(store.get("1").await.map(|j| j.title), Some("Only".to_string()));
        assert!(store.get("2").await.is_none());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = JobStore::new();
        let other_handle = store.clone();
        store.insert(sample_new_job("Shared")).await;
        assert_eq!(other_handle.len().await, 1);
    }

    #[tokio::test]
    async fn test_concurrent_inserts_get_unique_ids() {
        let store = JobStore::new();
        let mut handles = Vec::new();
        for i in 0..32 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.insert(sample_new_job(&format!("Job {i}"))).await.id
            }));
        }

        let mut ids = HashSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap());
        }
        assert_eq!(ids.len(), 32);
        assert_eq!(store.len().await, 32);
    }
}
