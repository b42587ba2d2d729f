use std::sync::Arc;

use uuid::Uuid;

use crate::dto::application_dto::ApplyPayload;
use crate::error::{Error, Result};
use crate::middleware::auth::AuthUser;
use crate::models::application::{ApplicationStatus, JobApplication};
use crate::models::notification::NotificationPayload;
use crate::models::user::UserRole;
use crate::services::notification_service::NotificationSender;
use crate::store::{ApplicationStore, JobStore, UserStore};

#[derive(Clone)]
pub struct ApplicationService {
    users: Arc<dyn UserStore>,
    jobs: Arc<dyn JobStore>,
    applications: Arc<dyn ApplicationStore>,
    notifier: Arc<dyn NotificationSender>,
}

impl ApplicationService {
    pub fn new(
        users: Arc<dyn UserStore>,
        jobs: Arc<dyn JobStore>,
        applications: Arc<dyn ApplicationStore>,
        notifier: Arc<dyn NotificationSender>,
    ) -> Self {
        Self {
            users,
            jobs,
            applications,
            notifier,
        }
    }

    pub async fn apply(
        &self,
        user: &AuthUser,
        job_id: Uuid,
        payload: ApplyPayload,
    ) -> Result<JobApplication> {
        if user.role != UserRole::JobSeeker {
            return Err(Error::Forbidden(
                "Only job seekers can apply to jobs".to_string(),
            ));
        }
        let account = self
            .users
            .find_user(user.id)
            .await?
            .ok_or_else(|| Error::Unauthorized("Unknown user".to_string()))?;
        if !account.is_active() {
            return Err(Error::Forbidden("Account is suspended".to_string()));
        }
        let job = self
            .jobs
            .find_job(job_id)
            .await?
            .ok_or_else(|| Error::NotFound("Job not found".to_string()))?;
        if !job.accepts_applications() {
            return Err(Error::BadRequest(
                "Job is not accepting applications".to_string(),
            ));
        }
        if self.applications.application_exists(job_id, user.id).await? {
            return Err(Error::BadRequest(
                "You have already applied to this job".to_string(),
            ));
        }

        let application = self
            .applications
            .insert_application(job_id, user.id, &payload)
            .await?;

        let notice = NotificationPayload::ApplicationReceived {
            job_title: job.title,
            applicant_name: account.name,
        };
        if let Err(e) = self.notifier.dispatch(job.employer_id, notice).await {
            tracing::error!(
                "Failed to dispatch application_received notification: {:?}",
                e
            );
        }

        Ok(application)
    }

    /// Direct status change by the employer. Interview scheduling and
    /// withdrawal own their values; this never notifies the applicant.
    pub async fn update_status(
        &self,
        user: &AuthUser,
        application_id: Uuid,
        status: ApplicationStatus,
    ) -> Result<JobApplication> {
        if user.role != UserRole::Employer {
            return Err(Error::Forbidden(
                "Only employers can update application status".to_string(),
            ));
        }
        let (_, job) = self
            .applications
            .find_application_with_job(application_id)
            .await?
            .ok_or_else(|| Error::NotFound("Application not found".to_string()))?;
        if job.employer_id != user.id {
            return Err(Error::Unauthorized(
                "You do not own this job posting".to_string(),
            ));
        }
        if !status.settable_by_employer() {
            return Err(Error::BadRequest(
                "Status cannot be set directly".to_string(),
            ));
        }

        self.applications
            .set_application_status(application_id, status)
            .await
    }

    pub async fn withdraw(&self, user: &AuthUser, application_id: Uuid) -> Result<JobApplication> {
        if user.role != UserRole::JobSeeker {
            return Err(Error::Forbidden(
                "Only job seekers can withdraw applications".to_string(),
            ));
        }
        let application = self
            .applications
            .find_application(application_id)
            .await?
            .ok_or_else(|| Error::NotFound("Application not found".to_string()))?;
        if application.seeker_id != user.id {
            return Err(Error::Unauthorized(
                "This application belongs to another applicant".to_string(),
            ));
        }

        self.applications
            .set_application_status(application_id, ApplicationStatus::Withdrawn)
            .await
    }

    pub async fn get(&self, user: &AuthUser, application_id: Uuid) -> Result<JobApplication> {
        let (application, job) = self
            .applications
            .find_application_with_job(application_id)
            .await?
            .ok_or_else(|| Error::NotFound("Application not found".to_string()))?;
        if application.seeker_id != user.id && job.employer_id != user.id {
            return Err(Error::Unauthorized(
                "You are not a party to this application".to_string(),
            ));
        }
        Ok(application)
    }

    pub async fn list_mine(&self, user: &AuthUser) -> Result<Vec<JobApplication>> {
        if user.role != UserRole::JobSeeker {
            return Err(Error::Forbidden(
                "Only job seekers have an application list".to_string(),
            ));
        }
        self.applications.list_for_seeker(user.id).await
    }

    pub async fn list_for_job(&self, user: &AuthUser, job_id: Uuid) -> Result<Vec<JobApplication>> {
        if user.role != UserRole::Employer {
            return Err(Error::Forbidden(
                "Only employers can list applications for a job".to_string(),
            ));
        }
        let job = self
            .jobs
            .find_job(job_id)
            .await?
            .ok_or_else(|| Error::NotFound("Job not found".to_string()))?;
        if job.employer_id != user.id {
            return Err(Error::Unauthorized(
                "You do not own this job posting".to_string(),
            ));
        }
        self.applications.list_for_job(job_id).await
    }
}
