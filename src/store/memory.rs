use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::types::Json;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::dto::application_dto::ApplyPayload;
use crate::dto::interview_dto::{ScheduleInterviewPayload, UpdateInterviewPayload};
use crate::dto::job_dto::CreateJobPayload;
use crate::dto::profile_dto::{UpsertEmployerProfilePayload, UpsertSeekerProfilePayload};
use crate::error::{Error, Result};
use crate::models::application::{ApplicationStatus, JobApplication};
use crate::models::interview::{InterviewInvitation, InterviewStatus};
use crate::models::job::{Job, JobFilter, JobStatus};
use crate::models::message::Message;
use crate::models::notification::{NotifiableKind, Notification, NotificationPayload};
use crate::models::profile::{
    CandidateHit, CandidatePage, CandidateSearch, EmployerProfile, JobSeekerProfile,
};
use crate::models::user::{User, UserRole, UserStatus};
use crate::utils::time;

use super::{
    ApplicationStore, InterviewStore, JobStore, MessageStore, NotificationStore, UserStore,
};

/// Keeps the whole dataset behind one lock so cross-table reads stay
/// consistent. Mirrors the Postgres backend row for row.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    users: HashMap<Uuid, User>,
    seeker_profiles: HashMap<Uuid, JobSeekerProfile>,
    employer_profiles: HashMap<Uuid, EmployerProfile>,
    jobs: HashMap<Uuid, Job>,
    applications: HashMap<Uuid, JobApplication>,
    interviews: HashMap<Uuid, InterviewInvitation>,
    notifications: Vec<Notification>,
    messages: Vec<Message>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Test seam: user rows are provisioned out of band in production.
    pub async fn seed_user(
        &self,
        name: &str,
        email: &str,
        role: UserRole,
        status: UserStatus,
    ) -> User {
        let now = time::now();
        let user = User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            role,
            status,
            created_at: now,
            updated_at: now,
        };
        let mut inner = self.inner.lock().await;
        inner.users.insert(user.id, user.clone());
        user
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_user(&self, id: Uuid) -> Result<Option<User>> {
        let inner = self.inner.lock().await;
        Ok(inner.users.get(&id).cloned())
    }

    async fn upsert_seeker_profile(
        &self,
        user_id: Uuid,
        input: &UpsertSeekerProfilePayload,
    ) -> Result<JobSeekerProfile> {
        let profile = JobSeekerProfile {
            user_id,
            headline: input.headline.clone(),
            skills: input.skills.clone(),
            experience_years: input.experience_years,
            location: input.location.clone(),
            resume_url: input.resume_url.clone(),
            updated_at: time::now(),
        };
        let mut inner = self.inner.lock().await;
        inner.seeker_profiles.insert(user_id, profile.clone());
        Ok(profile)
    }

    async fn seeker_profile(&self, user_id: Uuid) -> Result<Option<JobSeekerProfile>> {
        let inner = self.inner.lock().await;
        Ok(inner.seeker_profiles.get(&user_id).cloned())
    }

    async fn upsert_employer_profile(
        &self,
        user_id: Uuid,
        input: &UpsertEmployerProfilePayload,
    ) -> Result<EmployerProfile> {
        let profile = EmployerProfile {
            user_id,
            company_name: input.company_name.clone(),
            website: input.website.clone(),
            about: input.about.clone(),
            updated_at: time::now(),
        };
        let mut inner = self.inner.lock().await;
        inner.employer_profiles.insert(user_id, profile.clone());
        Ok(profile)
    }

    async fn employer_profile(&self, user_id: Uuid) -> Result<Option<EmployerProfile>> {
        let inner = self.inner.lock().await;
        Ok(inner.employer_profiles.get(&user_id).cloned())
    }

    async fn search_candidates(&self, search: &CandidateSearch) -> Result<CandidatePage> {
        let inner = self.inner.lock().await;
        let mut rows: Vec<(&User, &JobSeekerProfile)> = inner
            .users
            .values()
            .filter(|u| u.role == UserRole::JobSeeker)
            .filter_map(|u| inner.seeker_profiles.get(&u.id).map(|p| (u, p)))
            .collect();

        if let Some(term) = &search.term {
            let needle = term.to_lowercase();
            rows.retain(|(u, p)| {
                u.name.to_lowercase().contains(&needle)
                    || p.skills
                        .as_ref()
                        .map_or(false, |s| s.to_lowercase().contains(&needle))
            });
        }
        if let Some(band) = search.band {
            rows.retain(|(_, p)| band.contains(p.experience_years));
        }

        rows.sort_by(|a, b| {
            a.0.created_at
                .cmp(&b.0.created_at)
                .then(a.0.id.cmp(&b.0.id))
        });

        let total = rows.len() as i64;
        let items = rows
            .into_iter()
            .skip(search.offset() as usize)
            .take(search.per_page as usize)
            .map(|(u, p)| CandidateHit {
                user_id: u.id,
                name: u.name.clone(),
                headline: p.headline.clone(),
                skills: p.skills.clone(),
                experience_years: p.experience_years,
                location: p.location.clone(),
            })
            .collect();

        Ok(CandidatePage {
            items,
            total,
            page: search.page,
            per_page: search.per_page,
        })
    }
}

#[async_trait]
impl JobStore for MemoryStore {
    async fn insert_job(&self, employer_id: Uuid, input: &CreateJobPayload) -> Result<Job> {
        let now = time::now();
        let job = Job {
            id: Uuid::new_v4(),
            employer_id,
            title: input.title.clone(),
            company: input.company.clone(),
            location: input.location.clone(),
            employment_type: input.employment_type.clone(),
            salary_from: input.salary_from,
            salary_to: input.salary_to,
            description: input.description.clone(),
            status: input.status.unwrap_or(JobStatus::Open),
            created_at: now,
            updated_at: now,
        };
        let mut inner = self.inner.lock().await;
        inner.jobs.insert(job.id, job.clone());
        Ok(job)
    }

    async fn find_job(&self, id: Uuid) -> Result<Option<Job>> {
        let inner = self.inner.lock().await;
        Ok(inner.jobs.get(&id).cloned())
    }

    async fn list_open_jobs(&self, filter: &JobFilter) -> Result<Vec<Job>> {
        let inner = self.inner.lock().await;
        let mut jobs: Vec<Job> = inner
            .jobs
            .values()
            .filter(|j| j.status == JobStatus::Open)
            .filter(|j| {
                filter.q.as_ref().map_or(true, |q| {
                    let needle = q.to_lowercase();
                    j.title.to_lowercase().contains(&needle)
                        || j.company.to_lowercase().contains(&needle)
                })
            })
            .filter(|j| {
                filter
                    .location
                    .as_ref()
                    .map_or(true, |l| j.location.to_lowercase().contains(&l.to_lowercase()))
            })
            .cloned()
            .collect();

        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        jobs.truncate(filter.limit as usize);
        Ok(jobs)
    }

    async fn list_employer_jobs(&self, employer_id: Uuid) -> Result<Vec<Job>> {
        let inner = self.inner.lock().await;
        let mut jobs: Vec<Job> = inner
            .jobs
            .values()
            .filter(|j| j.employer_id == employer_id)
            .cloned()
            .collect();
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(jobs)
    }
}

#[async_trait]
impl ApplicationStore for MemoryStore {
    async fn insert_application(
        &self,
        job_id: Uuid,
        seeker_id: Uuid,
        input: &ApplyPayload,
    ) -> Result<JobApplication> {
        let now = time::now();
        let application = JobApplication {
            id: Uuid::new_v4(),
            job_id,
            seeker_id,
            status: ApplicationStatus::Pending,
            cover_letter: input.cover_letter.clone(),
            resume_path: input.resume_path.clone(),
            created_at: now,
            updated_at: now,
        };
        let mut inner = self.inner.lock().await;
        inner
            .applications
            .insert(application.id, application.clone());
        Ok(application)
    }

    async fn find_application(&self, id: Uuid) -> Result<Option<JobApplication>> {
        let inner = self.inner.lock().await;
        Ok(inner.applications.get(&id).cloned())
    }

    async fn find_application_with_job(&self, id: Uuid) -> Result<Option<(JobApplication, Job)>> {
        let inner = self.inner.lock().await;
        let Some(application) = inner.applications.get(&id).cloned() else {
            return Ok(None);
        };
        let Some(job) = inner.jobs.get(&application.job_id).cloned() else {
            return Ok(None);
        };
        Ok(Some((application, job)))
    }

    async fn application_exists(&self, job_id: Uuid, seeker_id: Uuid) -> Result<bool> {
        let inner = self.inner.lock().await;
        Ok(inner
            .applications
            .values()
            .any(|a| a.job_id == job_id && a.seeker_id == seeker_id))
    }

    async fn set_application_status(
        &self,
        id: Uuid,
        status: ApplicationStatus,
    ) -> Result<JobApplication> {
        let mut inner = self.inner.lock().await;
        let application = inner
            .applications
            .get_mut(&id)
            .ok_or_else(|| Error::NotFound("Resource not found".to_string()))?;
        application.status = status;
        application.updated_at = time::now();
        Ok(application.clone())
    }

    async fn list_for_seeker(&self, seeker_id: Uuid) -> Result<Vec<JobApplication>> {
        let inner = self.inner.lock().await;
        let mut applications: Vec<JobApplication> = inner
            .applications
            .values()
            .filter(|a| a.seeker_id == seeker_id)
            .cloned()
            .collect();
        applications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(applications)
    }

    async fn list_for_job(&self, job_id: Uuid) -> Result<Vec<JobApplication>> {
        let inner = self.inner.lock().await;
        let mut applications: Vec<JobApplication> = inner
            .applications
            .values()
            .filter(|a| a.job_id == job_id)
            .cloned()
            .collect();
        applications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(applications)
    }
}

#[async_trait]
impl InterviewStore for MemoryStore {
    async fn insert_interview(
        &self,
        application_id: Uuid,
        input: &ScheduleInterviewPayload,
    ) -> Result<InterviewInvitation> {
        let now = time::now();
        let invitation = InterviewInvitation {
            id: Uuid::new_v4(),
            application_id,
            scheduled_at: input.scheduled_at,
            location: input.location.clone(),
            interview_type: input.interview_type,
            status: InterviewStatus::Pending,
            notes: input.notes.clone(),
            created_at: now,
            updated_at: now,
        };
        let mut inner = self.inner.lock().await;
        inner.interviews.insert(invitation.id, invitation.clone());
        Ok(invitation)
    }

    async fn find_interview(&self, id: Uuid) -> Result<Option<InterviewInvitation>> {
        let inner = self.inner.lock().await;
        Ok(inner.interviews.get(&id).cloned())
    }

    async fn update_interview(
        &self,
        id: Uuid,
        input: &UpdateInterviewPayload,
    ) -> Result<InterviewInvitation> {
        let mut inner = self.inner.lock().await;
        let invitation = inner
            .interviews
            .get_mut(&id)
            .ok_or_else(|| Error::NotFound("Resource not found".to_string()))?;
        invitation.scheduled_at = input.scheduled_at;
        invitation.location = input.location.clone();
        invitation.interview_type = input.interview_type;
        invitation.notes = input.notes.clone();
        invitation.updated_at = time::now();
        Ok(invitation.clone())
    }

    async fn set_interview_status(
        &self,
        id: Uuid,
        status: InterviewStatus,
    ) -> Result<InterviewInvitation> {
        let mut inner = self.inner.lock().await;
        let invitation = inner
            .interviews
            .get_mut(&id)
            .ok_or_else(|| Error::NotFound("Resource not found".to_string()))?;
        invitation.status = status;
        invitation.updated_at = time::now();
        Ok(invitation.clone())
    }

    async fn delete_interview(&self, id: Uuid) -> Result<()> {
        let mut inner = self.inner.lock().await;
        inner.interviews.remove(&id);
        Ok(())
    }

    async fn count_for_application(&self, application_id: Uuid) -> Result<i64> {
        let inner = self.inner.lock().await;
        Ok(inner
            .interviews
            .values()
            .filter(|i| i.application_id == application_id)
            .count() as i64)
    }
}

#[async_trait]
impl NotificationStore for MemoryStore {
    async fn insert_notification(
        &self,
        recipient: Uuid,
        payload: NotificationPayload,
    ) -> Result<Notification> {
        let notification = Notification {
            id: Uuid::new_v4(),
            notifiable_kind: NotifiableKind::User,
            notifiable_id: recipient,
            kind: payload.kind(),
            payload: Json(payload),
            read_at: None,
            created_at: time::now(),
        };
        let mut inner = self.inner.lock().await;
        inner.notifications.push(notification.clone());
        Ok(notification)
    }

    async fn mark_read(&self, id: Uuid, user_id: Uuid) -> Result<Option<Notification>> {
        let mut inner = self.inner.lock().await;
        let hit = inner
            .notifications
            .iter_mut()
            .find(|n| n.id == id && n.notifiable_id == user_id && n.read_at.is_none());
        match hit {
            Some(notification) => {
                notification.read_at = Some(time::now());
                Ok(Some(notification.clone()))
            }
            None => Ok(None),
        }
    }

    async fn mark_all_read(&self, user_id: Uuid) -> Result<u64> {
        let mut inner = self.inner.lock().await;
        let now = time::now();
        let mut updated = 0;
        for notification in inner
            .notifications
            .iter_mut()
            .filter(|n| n.notifiable_id == user_id && n.read_at.is_none())
        {
            notification.read_at = Some(now);
            updated += 1;
        }
        Ok(updated)
    }

    async fn latest_for_user(&self, user_id: Uuid, limit: i64) -> Result<Vec<Notification>> {
        let inner = self.inner.lock().await;
        Ok(inner
            .notifications
            .iter()
            .rev()
            .filter(|n| n.notifiable_id == user_id)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn unread_count(&self, user_id: Uuid) -> Result<i64> {
        let inner = self.inner.lock().await;
        Ok(inner
            .notifications
            .iter()
            .filter(|n| n.notifiable_id == user_id && n.read_at.is_none())
            .count() as i64)
    }
}

#[async_trait]
impl MessageStore for MemoryStore {
    async fn insert_message(
        &self,
        sender_id: Uuid,
        receiver_id: Uuid,
        body: &str,
    ) -> Result<Message> {
        let message = Message {
            id: Uuid::new_v4(),
            sender_id,
            receiver_id,
            body: body.to_string(),
            sent_at: time::now(),
            read_at: None,
        };
        let mut inner = self.inner.lock().await;
        inner.messages.push(message.clone());
        Ok(message)
    }

    async fn conversation(&self, user_id: Uuid, peer_id: Uuid) -> Result<Vec<Message>> {
        let inner = self.inner.lock().await;
        Ok(inner
            .messages
            .iter()
            .filter(|m| {
                (m.sender_id == user_id && m.receiver_id == peer_id)
                    || (m.sender_id == peer_id && m.receiver_id == user_id)
            })
            .cloned()
            .collect())
    }

    async fn unread_count(&self, user_id: Uuid) -> Result<i64> {
        let inner = self.inner.lock().await;
        Ok(inner
            .messages
            .iter()
            .filter(|m| m.receiver_id == user_id && m.read_at.is_none())
            .count() as i64)
    }

    async fn mark_conversation_read(&self, receiver_id: Uuid, sender_id: Uuid) -> Result<u64> {
        let mut inner = self.inner.lock().await;
        let now = time::now();
        let mut updated = 0;
        for message in inner.messages.iter_mut().filter(|m| {
            m.receiver_id == receiver_id && m.sender_id == sender_id && m.read_at.is_none()
        }) {
            message.read_at = Some(now);
            updated += 1;
        }
        Ok(updated)
    }
}
