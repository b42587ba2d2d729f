use std::sync::Arc;

use uuid::Uuid;

use crate::dto::interview_dto::{
    InterviewDecisionPayload, ScheduleInterviewPayload, UpdateInterviewPayload,
};
use crate::error::{Error, Result};
use crate::middleware::auth::AuthUser;
use crate::models::application::ApplicationStatus;
use crate::models::interview::{InterviewInvitation, InterviewStatus};
use crate::models::notification::NotificationPayload;
use crate::models::user::UserRole;
use crate::services::notification_service::NotificationSender;
use crate::store::{ApplicationStore, InterviewStore};
use crate::utils::time;

#[derive(Clone)]
pub struct InterviewService {
    interviews: Arc<dyn InterviewStore>,
    applications: Arc<dyn ApplicationStore>,
    notifier: Arc<dyn NotificationSender>,
}

impl InterviewService {
    pub fn new(
        interviews: Arc<dyn InterviewStore>,
        applications: Arc<dyn ApplicationStore>,
        notifier: Arc<dyn NotificationSender>,
    ) -> Self {
        Self {
            interviews,
            applications,
            notifier,
        }
    }

    pub async fn schedule(
        &self,
        user: &AuthUser,
        application_id: Uuid,
        payload: ScheduleInterviewPayload,
    ) -> Result<InterviewInvitation> {
        if user.role != UserRole::Employer {
            return Err(Error::Forbidden(
                "Only employers can schedule interviews".to_string(),
            ));
        }
        let (application, job) = self
            .applications
            .find_application_with_job(application_id)
            .await?
            .ok_or_else(|| Error::NotFound("Application not found".to_string()))?;
        if job.employer_id != user.id {
            return Err(Error::Unauthorized(
                "You do not own this job posting".to_string(),
            ));
        }
        if payload.scheduled_at <= time::now() {
            return Err(Error::BadRequest(
                "Interview must be scheduled in the future".to_string(),
            ));
        }

        let invitation = self
            .interviews
            .insert_interview(application_id, &payload)
            .await?;
        self.applications
            .set_application_status(application_id, ApplicationStatus::InterviewScheduled)
            .await?;

        let notice = NotificationPayload::InterviewScheduled {
            job_title: job.title,
            employer_name: job.company,
            scheduled_at: invitation.scheduled_at,
            location: invitation.location.clone(),
            interview_type: invitation.interview_type,
        };
        if let Err(e) = self.notifier.dispatch(application.seeker_id, notice).await {
            tracing::error!("Failed to dispatch interview_scheduled notification: {:?}", e);
        }

        Ok(invitation)
    }

    pub async fn reschedule(
        &self,
        user: &AuthUser,
        interview_id: Uuid,
        payload: UpdateInterviewPayload,
    ) -> Result<InterviewInvitation> {
        if user.role != UserRole::Employer {
            return Err(Error::Forbidden(
                "Only employers can reschedule interviews".to_string(),
            ));
        }
        let interview = self
            .interviews
            .find_interview(interview_id)
            .await?
            .ok_or_else(|| Error::NotFound("Interview not found".to_string()))?;
        let (application, job) = self
            .applications
            .find_application_with_job(interview.application_id)
            .await?
            .ok_or_else(|| Error::NotFound("Application not found".to_string()))?;
        if job.employer_id != user.id {
            return Err(Error::Unauthorized(
                "You do not own this job posting".to_string(),
            ));
        }
        if payload.scheduled_at <= time::now() {
            return Err(Error::BadRequest(
                "Interview must be scheduled in the future".to_string(),
            ));
        }

        // The invitation status is left alone: a reschedule does not reopen
        // an accepted or declined invitation.
        let updated = self.interviews.update_interview(interview_id, &payload).await?;

        let notice = NotificationPayload::InterviewRescheduled {
            job_title: job.title,
            scheduled_at: updated.scheduled_at,
            location: updated.location.clone(),
            interview_type: updated.interview_type,
        };
        if let Err(e) = self.notifier.dispatch(application.seeker_id, notice).await {
            tracing::error!(
                "Failed to dispatch interview_rescheduled notification: {:?}",
                e
            );
        }

        Ok(updated)
    }

    pub async fn cancel(&self, user: &AuthUser, interview_id: Uuid) -> Result<()> {
        if user.role != UserRole::Employer {
            return Err(Error::Forbidden(
                "Only employers can cancel interviews".to_string(),
            ));
        }
        let interview = self
            .interviews
            .find_interview(interview_id)
            .await?
            .ok_or_else(|| Error::NotFound("Interview not found".to_string()))?;
        let (application, job) = self
            .applications
            .find_application_with_job(interview.application_id)
            .await?
            .ok_or_else(|| Error::NotFound("Application not found".to_string()))?;
        if job.employer_id != user.id {
            return Err(Error::Unauthorized(
                "You do not own this job posting".to_string(),
            ));
        }

        self.interviews.delete_interview(interview_id).await?;

        let remaining = self
            .interviews
            .count_for_application(interview.application_id)
            .await?;
        if remaining == 0 {
            self.applications
                .set_application_status(interview.application_id, ApplicationStatus::UnderReview)
                .await?;
        }

        let notice = NotificationPayload::InterviewCancelled {
            job_title: job.title,
            employer_name: job.company,
        };
        if let Err(e) = self.notifier.dispatch(application.seeker_id, notice).await {
            tracing::error!("Failed to dispatch interview_cancelled notification: {:?}", e);
        }

        Ok(())
    }

    /// The applicant accepts or declines a pending invitation. Touches only
    /// the invitation row; no notification goes out.
    pub async fn respond(
        &self,
        user: &AuthUser,
        interview_id: Uuid,
        payload: InterviewDecisionPayload,
    ) -> Result<InterviewInvitation> {
        if user.role != UserRole::JobSeeker {
            return Err(Error::Forbidden(
                "Only job seekers can respond to interview invitations".to_string(),
            ));
        }
        if !matches!(
            payload.decision,
            InterviewStatus::Accepted | InterviewStatus::Declined
        ) {
            return Err(Error::BadRequest(
                "Decision must be accepted or declined".to_string(),
            ));
        }
        let interview = self
            .interviews
            .find_interview(interview_id)
            .await?
            .ok_or_else(|| Error::NotFound("Interview not found".to_string()))?;
        let application = self
            .applications
            .find_application(interview.application_id)
            .await?
            .ok_or_else(|| Error::NotFound("Application not found".to_string()))?;
        if application.seeker_id != user.id {
            return Err(Error::Unauthorized(
                "This invitation belongs to another applicant".to_string(),
            ));
        }
        if interview.status != InterviewStatus::Pending {
            return Err(Error::BadRequest(
                "Invitation has already been answered".to_string(),
            ));
        }

        self.interviews
            .set_interview_status(interview_id, payload.decision)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::application_dto::ApplyPayload;
    use crate::dto::job_dto::CreateJobPayload;
    use crate::models::notification::Notification;
    use crate::models::user::{UserRole, UserStatus};
    use crate::store::memory::MemoryStore;
    use crate::store::{ApplicationStore, JobStore};
    use async_trait::async_trait;
    use chrono::Duration;

    mockall::mock! {
        Sender {}

        #[async_trait]
        impl NotificationSender for Sender {
            async fn dispatch(
                &self,
                recipient: Uuid,
                payload: NotificationPayload,
            ) -> Result<Notification>;
        }
    }

    fn schedule_payload() -> ScheduleInterviewPayload {
        ScheduleInterviewPayload {
            scheduled_at: time::now() + Duration::days(3),
            location: "HQ, 4th floor".to_string(),
            interview_type: crate::models::interview::InterviewType::Video,
            notes: None,
        }
    }

    async fn seeded_application(
        store: &Arc<MemoryStore>,
    ) -> (AuthUser, Uuid, Uuid) {
        let employer = store
            .seed_user(
                "Grace Field",
                "grace@initech.example",
                UserRole::Employer,
                UserStatus::Active,
            )
            .await;
        let seeker = store
            .seed_user(
                "Ravi Patel",
                "ravi@example.com",
                UserRole::JobSeeker,
                UserStatus::Active,
            )
            .await;
        let job = store
            .insert_job(
                employer.id,
                &CreateJobPayload {
                    title: "Backend Engineer".to_string(),
                    company: "Initech".to_string(),
                    location: "Remote".to_string(),
                    employment_type: None,
                    salary_from: None,
                    salary_to: None,
                    description: None,
                    status: None,
                },
            )
            .await
            .unwrap();
        let application = store
            .insert_application(
                job.id,
                seeker.id,
                &ApplyPayload {
                    cover_letter: "Hello".to_string(),
                    resume_path: None,
                },
            )
            .await
            .unwrap();
        let caller = AuthUser {
            id: employer.id,
            role: UserRole::Employer,
        };
        (caller, application.id, seeker.id)
    }

    #[tokio::test]
    async fn schedule_survives_dispatch_failure() {
        let store = Arc::new(MemoryStore::new());
        let (employer, application_id, _) = seeded_application(&store).await;

        let mut sender = MockSender::new();
        sender
            .expect_dispatch()
            .returning(|_, _| Err(Error::Internal("notification backend down".to_string())));

        let service = InterviewService::new(store.clone(), store.clone(), Arc::new(sender));
        let invitation = service
            .schedule(&employer, application_id, schedule_payload())
            .await
            .unwrap();

        assert_eq!(invitation.status, InterviewStatus::Pending);
        let application = store
            .find_application(application_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(application.status, ApplicationStatus::InterviewScheduled);
    }

    #[tokio::test]
    async fn schedule_by_non_owner_mutates_nothing() {
        let store = Arc::new(MemoryStore::new());
        let (_, application_id, _) = seeded_application(&store).await;
        let intruder = store
            .seed_user(
                "Other Corp",
                "other@corp.example",
                UserRole::Employer,
                UserStatus::Active,
            )
            .await;

        let mut sender = MockSender::new();
        sender.expect_dispatch().never();

        let service = InterviewService::new(store.clone(), store.clone(), Arc::new(sender));
        let caller = AuthUser {
            id: intruder.id,
            role: UserRole::Employer,
        };
        let err = service
            .schedule(&caller, application_id, schedule_payload())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Unauthorized(_)));
        let application = store
            .find_application(application_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(application.status, ApplicationStatus::Pending);
        assert_eq!(
            store.count_for_application(application_id).await.unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn schedule_rejects_past_times() {
        let store = Arc::new(MemoryStore::new());
        let (employer, application_id, _) = seeded_application(&store).await;

        let mut sender = MockSender::new();
        sender.expect_dispatch().never();

        let service = InterviewService::new(store.clone(), store.clone(), Arc::new(sender));
        let mut payload = schedule_payload();
        payload.scheduled_at = time::now() - Duration::hours(1);
        let err = service
            .schedule(&employer, application_id, payload)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::BadRequest(_)));
    }
}
