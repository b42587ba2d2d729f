pub mod memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::application_dto::ApplyPayload;
use crate::dto::interview_dto::{ScheduleInterviewPayload, UpdateInterviewPayload};
use crate::dto::job_dto::CreateJobPayload;
use crate::dto::profile_dto::{UpsertEmployerProfilePayload, UpsertSeekerProfilePayload};
use crate::error::Result;
use crate::models::application::{ApplicationStatus, JobApplication};
use crate::models::interview::{InterviewInvitation, InterviewStatus};
use crate::models::job::{Job, JobFilter};
use crate::models::message::Message;
use crate::models::notification::{Notification, NotificationPayload};
use crate::models::profile::{CandidatePage, CandidateSearch, EmployerProfile, JobSeekerProfile};
use crate::models::user::User;

pub use self::memory::MemoryStore;
pub use self::postgres::PgStore;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_user(&self, id: Uuid) -> Result<Option<User>>;
    async fn upsert_seeker_profile(
        &self,
        user_id: Uuid,
        input: &UpsertSeekerProfilePayload,
    ) -> Result<JobSeekerProfile>;
    async fn seeker_profile(&self, user_id: Uuid) -> Result<Option<JobSeekerProfile>>;
    async fn upsert_employer_profile(
        &self,
        user_id: Uuid,
        input: &UpsertEmployerProfilePayload,
    ) -> Result<EmployerProfile>;
    async fn employer_profile(&self, user_id: Uuid) -> Result<Option<EmployerProfile>>;
    async fn search_candidates(&self, search: &CandidateSearch) -> Result<CandidatePage>;
}

#[async_trait]
pub trait JobStore: Send + Sync {
    async fn insert_job(&self, employer_id: Uuid, input: &CreateJobPayload) -> Result<Job>;
    async fn find_job(&self, id: Uuid) -> Result<Option<Job>>;
    async fn list_open_jobs(&self, filter: &JobFilter) -> Result<Vec<Job>>;
    async fn list_employer_jobs(&self, employer_id: Uuid) -> Result<Vec<Job>>;
}

#[async_trait]
pub trait ApplicationStore: Send + Sync {
    async fn insert_application(
        &self,
        job_id: Uuid,
        seeker_id: Uuid,
        input: &ApplyPayload,
    ) -> Result<JobApplication>;
    async fn find_application(&self, id: Uuid) -> Result<Option<JobApplication>>;
    /// Application together with the job it targets, for ownership checks.
    async fn find_application_with_job(&self, id: Uuid) -> Result<Option<(JobApplication, Job)>>;
    async fn application_exists(&self, job_id: Uuid, seeker_id: Uuid) -> Result<bool>;
    async fn set_application_status(
        &self,
        id: Uuid,
        status: ApplicationStatus,
    ) -> Result<JobApplication>;
    async fn list_for_seeker(&self, seeker_id: Uuid) -> Result<Vec<JobApplication>>;
    async fn list_for_job(&self, job_id: Uuid) -> Result<Vec<JobApplication>>;
}

#[async_trait]
pub trait InterviewStore: Send + Sync {
    async fn insert_interview(
        &self,
        application_id: Uuid,
        input: &ScheduleInterviewPayload,
    ) -> Result<InterviewInvitation>;
    async fn find_interview(&self, id: Uuid) -> Result<Option<InterviewInvitation>>;
    async fn update_interview(
        &self,
        id: Uuid,
        input: &UpdateInterviewPayload,
    ) -> Result<InterviewInvitation>;
    async fn set_interview_status(
        &self,
        id: Uuid,
        status: InterviewStatus,
    ) -> Result<InterviewInvitation>;
    async fn delete_interview(&self, id: Uuid) -> Result<()>;
    async fn count_for_application(&self, application_id: Uuid) -> Result<i64>;
}

#[async_trait]
pub trait NotificationStore: Send + Sync {
    async fn insert_notification(
        &self,
        recipient: Uuid,
        payload: NotificationPayload,
    ) -> Result<Notification>;
    /// Returns the updated row, or None when the notification does not
    /// belong to the user or is already read.
    async fn mark_read(&self, id: Uuid, user_id: Uuid) -> Result<Option<Notification>>;
    async fn mark_all_read(&self, user_id: Uuid) -> Result<u64>;
    async fn latest_for_user(&self, user_id: Uuid, limit: i64) -> Result<Vec<Notification>>;
    async fn unread_count(&self, user_id: Uuid) -> Result<i64>;
}

#[async_trait]
pub trait MessageStore: Send + Sync {
    async fn insert_message(&self, sender_id: Uuid, receiver_id: Uuid, body: &str)
        -> Result<Message>;
    async fn conversation(&self, user_id: Uuid, peer_id: Uuid) -> Result<Vec<Message>>;
    async fn unread_count(&self, user_id: Uuid) -> Result<i64>;
    async fn mark_conversation_read(&self, receiver_id: Uuid, sender_id: Uuid) -> Result<u64>;
}

/// Storage backends bundled per aggregate so services depend on traits,
/// not on a concrete database.
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub jobs: Arc<dyn JobStore>,
    pub applications: Arc<dyn ApplicationStore>,
    pub interviews: Arc<dyn InterviewStore>,
    pub notifications: Arc<dyn NotificationStore>,
    pub messages: Arc<dyn MessageStore>,
}

impl Stores {
    pub fn postgres(pool: PgPool) -> Self {
        let store = Arc::new(PgStore::new(pool));
        Self {
            users: store.clone(),
            jobs: store.clone(),
            applications: store.clone(),
            interviews: store.clone(),
            notifications: store.clone(),
            messages: store,
        }
    }

    pub fn memory(store: Arc<MemoryStore>) -> Self {
        Self {
            users: store.clone(),
            jobs: store.clone(),
            applications: store.clone(),
            interviews: store.clone(),
            notifications: store.clone(),
            messages: store,
        }
    }
}
