use std::sync::Arc;

use uuid::Uuid;

use crate::dto::job_dto::{CreateJobPayload, JobListQuery};
use crate::error::{Error, Result};
use crate::middleware::auth::AuthUser;
use crate::models::job::{Job, JobFilter};
use crate::models::user::UserRole;
use crate::store::JobStore;

#[derive(Clone)]
pub struct JobService {
    jobs: Arc<dyn JobStore>,
}

impl JobService {
    pub fn new(jobs: Arc<dyn JobStore>) -> Self {
        Self { jobs }
    }

    pub async fn create(&self, user: &AuthUser, payload: CreateJobPayload) -> Result<Job> {
        if user.role != UserRole::Employer {
            return Err(Error::Forbidden(
                "Only employers can post jobs".to_string(),
            ));
        }
        self.jobs.insert_job(user.id, &payload).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Job> {
        self.jobs
            .find_job(id)
            .await?
            .ok_or_else(|| Error::NotFound("Job not found".to_string()))
    }

    pub async fn list_open(&self, query: JobListQuery) -> Result<Vec<Job>> {
        let filter = JobFilter {
            q: query.q,
            location: query.location,
            limit: query.limit.unwrap_or(20).clamp(1, 100),
        };
        self.jobs.list_open_jobs(&filter).await
    }

    pub async fn list_mine(&self, user: &AuthUser) -> Result<Vec<Job>> {
        if user.role != UserRole::Employer {
            return Err(Error::Forbidden(
                "Only employers have job postings".to_string(),
            ));
        }
        self.jobs.list_employer_jobs(user.id).await
    }
}
