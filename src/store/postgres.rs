use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::application_dto::ApplyPayload;
use crate::dto::interview_dto::{ScheduleInterviewPayload, UpdateInterviewPayload};
use crate::dto::job_dto::CreateJobPayload;
use crate::dto::profile_dto::{UpsertEmployerProfilePayload, UpsertSeekerProfilePayload};
use crate::error::Result;
use crate::models::application::{ApplicationStatus, JobApplication};
use crate::models::interview::{InterviewInvitation, InterviewStatus};
use crate::models::job::{Job, JobFilter, JobStatus};
use crate::models::message::Message;
use crate::models::notification::{NotifiableKind, Notification, NotificationPayload};
use crate::models::profile::{
    CandidateHit, CandidatePage, CandidateSearch, EmployerProfile, JobSeekerProfile,
};
use crate::models::user::User;

use super::{
    ApplicationStore, InterviewStore, JobStore, MessageStore, NotificationStore, UserStore,
};

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn find_user(&self, id: Uuid) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn upsert_seeker_profile(
        &self,
        user_id: Uuid,
        input: &UpsertSeekerProfilePayload,
    ) -> Result<JobSeekerProfile> {
        let profile = sqlx::query_as::<_, JobSeekerProfile>(
            r#"
            INSERT INTO job_seeker_profiles (user_id, headline, skills, experience_years, location, resume_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id) DO UPDATE SET
                headline = EXCLUDED.headline,
                skills = EXCLUDED.skills,
                experience_years = EXCLUDED.experience_years,
                location = EXCLUDED.location,
                resume_url = EXCLUDED.resume_url,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(&input.headline)
        .bind(&input.skills)
        .bind(input.experience_years)
        .bind(&input.location)
        .bind(&input.resume_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(profile)
    }

    async fn seeker_profile(&self, user_id: Uuid) -> Result<Option<JobSeekerProfile>> {
        let profile = sqlx::query_as::<_, JobSeekerProfile>(
            "SELECT * FROM job_seeker_profiles WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }

    async fn upsert_employer_profile(
        &self,
        user_id: Uuid,
        input: &UpsertEmployerProfilePayload,
    ) -> Result<EmployerProfile> {
        let profile = sqlx::query_as::<_, EmployerProfile>(
            r#"
            INSERT INTO employer_profiles (user_id, company_name, website, about)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id) DO UPDATE SET
                company_name = EXCLUDED.company_name,
                website = EXCLUDED.website,
                about = EXCLUDED.about,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(&input.company_name)
        .bind(&input.website)
        .bind(&input.about)
        .fetch_one(&self.pool)
        .await?;

        Ok(profile)
    }

    async fn employer_profile(&self, user_id: Uuid) -> Result<Option<EmployerProfile>> {
        let profile = sqlx::query_as::<_, EmployerProfile>(
            "SELECT * FROM employer_profiles WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }

    async fn search_candidates(&self, search: &CandidateSearch) -> Result<CandidatePage> {
        let mut filters = vec!["u.role = 'job_seeker'".to_string()];
        let mut args: Vec<String> = Vec::new();

        if let Some(term) = &search.term {
            let first = args.len() + 1;
            let second = first + 1;
            filters.push(format!(
                "(u.name ILIKE ${} OR p.skills ILIKE ${})",
                first, second
            ));
            args.push(format!("%{}%", term));
            args.push(format!("%{}%", term));
        }
        if let Some(band) = search.band {
            let (lo, hi) = band.bounds();
            filters.push(format!("p.experience_years >= {}", lo));
            if let Some(hi) = hi {
                filters.push(format!("p.experience_years <= {}", hi));
            }
        }

        let where_clause = format!("WHERE {}", filters.join(" AND "));

        let items_query = format!(
            "SELECT u.id AS user_id, u.name, p.headline, p.skills, p.experience_years, p.location
             FROM users u
             JOIN job_seeker_profiles p ON p.user_id = u.id
             {}
             ORDER BY u.created_at ASC, u.id ASC
             LIMIT ${} OFFSET ${}",
            where_clause,
            args.len() + 1,
            args.len() + 2
        );

        let total_query = format!(
            "SELECT COUNT(*)
             FROM users u
             JOIN job_seeker_profiles p ON p.user_id = u.id
             {}",
            where_clause
        );

        let mut items_statement = sqlx::query_as::<_, CandidateHit>(&items_query);
        for value in &args {
            items_statement = items_statement.bind(value);
        }
        items_statement = items_statement.bind(search.per_page).bind(search.offset());
        let items = items_statement.fetch_all(&self.pool).await?;

        let mut total_statement = sqlx::query_scalar::<_, i64>(&total_query);
        for value in &args {
            total_statement = total_statement.bind(value);
        }
        let total = total_statement.fetch_one(&self.pool).await?;

        Ok(CandidatePage {
            items,
            total,
            page: search.page,
            per_page: search.per_page,
        })
    }
}

#[async_trait]
impl JobStore for PgStore {
    async fn insert_job(&self, employer_id: Uuid, input: &CreateJobPayload) -> Result<Job> {
        let status = input.status.unwrap_or(JobStatus::Open);
        let job = sqlx::query_as::<_, Job>(
            r#"
            INSERT INTO jobs (
                employer_id, title, company, location, employment_type,
                salary_from, salary_to, description, status
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(employer_id)
        .bind(&input.title)
        .bind(&input.company)
        .bind(&input.location)
        .bind(&input.employment_type)
        .bind(input.salary_from)
        .bind(input.salary_to)
        .bind(&input.description)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok(job)
    }

    async fn find_job(&self, id: Uuid) -> Result<Option<Job>> {
        let job = sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(job)
    }

    async fn list_open_jobs(&self, filter: &JobFilter) -> Result<Vec<Job>> {
        let mut filters = vec!["status = 'open'".to_string()];
        let mut args: Vec<String> = Vec::new();

        if let Some(q) = &filter.q {
            let first = args.len() + 1;
            let second = first + 1;
            filters.push(format!(
                "(title ILIKE ${} OR company ILIKE ${})",
                first, second
            ));
            args.push(format!("%{}%", q));
            args.push(format!("%{}%", q));
        }
        if let Some(location) = &filter.location {
            filters.push(format!("location ILIKE ${}", args.len() + 1));
            args.push(format!("%{}%", location));
        }

        let query = format!(
            "SELECT * FROM jobs
             WHERE {}
             ORDER BY created_at DESC
             LIMIT ${}",
            filters.join(" AND "),
            args.len() + 1
        );

        let mut statement = sqlx::query_as::<_, Job>(&query);
        for value in &args {
            statement = statement.bind(value);
        }
        statement = statement.bind(filter.limit);
        let jobs = statement.fetch_all(&self.pool).await?;

        Ok(jobs)
    }

    async fn list_employer_jobs(&self, employer_id: Uuid) -> Result<Vec<Job>> {
        let jobs = sqlx::query_as::<_, Job>(
            r#"
            SELECT * FROM jobs
            WHERE employer_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(employer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(jobs)
    }
}

#[async_trait]
impl ApplicationStore for PgStore {
    async fn insert_application(
        &self,
        job_id: Uuid,
        seeker_id: Uuid,
        input: &ApplyPayload,
    ) -> Result<JobApplication> {
        let application = sqlx::query_as::<_, JobApplication>(
            r#"
            INSERT INTO job_applications (job_id, seeker_id, cover_letter, resume_path)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(job_id)
        .bind(seeker_id)
        .bind(&input.cover_letter)
        .bind(&input.resume_path)
        .fetch_one(&self.pool)
        .await?;

        Ok(application)
    }

    async fn find_application(&self, id: Uuid) -> Result<Option<JobApplication>> {
        let application =
            sqlx::query_as::<_, JobApplication>("SELECT * FROM job_applications WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(application)
    }

    async fn find_application_with_job(&self, id: Uuid) -> Result<Option<(JobApplication, Job)>> {
        let Some(application) = self.find_application(id).await? else {
            return Ok(None);
        };
        let Some(job) = self.find_job(application.job_id).await? else {
            return Ok(None);
        };

        Ok(Some((application, job)))
    }

    async fn application_exists(&self, job_id: Uuid, seeker_id: Uuid) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM job_applications WHERE job_id = $1 AND seeker_id = $2)",
        )
        .bind(job_id)
        .bind(seeker_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn set_application_status(
        &self,
        id: Uuid,
        status: ApplicationStatus,
    ) -> Result<JobApplication> {
        let application = sqlx::query_as::<_, JobApplication>(
            r#"
            UPDATE job_applications
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok(application)
    }

    async fn list_for_seeker(&self, seeker_id: Uuid) -> Result<Vec<JobApplication>> {
        let applications = sqlx::query_as::<_, JobApplication>(
            r#"
            SELECT * FROM job_applications
            WHERE seeker_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(seeker_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(applications)
    }

    async fn list_for_job(&self, job_id: Uuid) -> Result<Vec<JobApplication>> {
        let applications = sqlx::query_as::<_, JobApplication>(
            r#"
            SELECT * FROM job_applications
            WHERE job_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(job_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(applications)
    }
}

#[async_trait]
impl InterviewStore for PgStore {
    async fn insert_interview(
        &self,
        application_id: Uuid,
        input: &ScheduleInterviewPayload,
    ) -> Result<InterviewInvitation> {
        let invitation = sqlx::query_as::<_, InterviewInvitation>(
            r#"
            INSERT INTO interview_invitations (application_id, scheduled_at, location, interview_type, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(application_id)
        .bind(input.scheduled_at)
        .bind(&input.location)
        .bind(input.interview_type)
        .bind(&input.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(invitation)
    }

    async fn find_interview(&self, id: Uuid) -> Result<Option<InterviewInvitation>> {
        let invitation = sqlx::query_as::<_, InterviewInvitation>(
            "SELECT * FROM interview_invitations WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(invitation)
    }

    async fn update_interview(
        &self,
        id: Uuid,
        input: &UpdateInterviewPayload,
    ) -> Result<InterviewInvitation> {
        let invitation = sqlx::query_as::<_, InterviewInvitation>(
            r#"
            UPDATE interview_invitations
            SET scheduled_at = $2, location = $3, interview_type = $4, notes = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(input.scheduled_at)
        .bind(&input.location)
        .bind(input.interview_type)
        .bind(&input.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(invitation)
    }

    async fn set_interview_status(
        &self,
        id: Uuid,
        status: InterviewStatus,
    ) -> Result<InterviewInvitation> {
        let invitation = sqlx::query_as::<_, InterviewInvitation>(
            r#"
            UPDATE interview_invitations
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok(invitation)
    }

    async fn delete_interview(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM interview_invitations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn count_for_application(&self, application_id: Uuid) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM interview_invitations WHERE application_id = $1",
        )
        .bind(application_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}

#[async_trait]
impl NotificationStore for PgStore {
    async fn insert_notification(
        &self,
        recipient: Uuid,
        payload: NotificationPayload,
    ) -> Result<Notification> {
        let notification = sqlx::query_as::<_, Notification>(
            r#"
            INSERT INTO notifications (id, notifiable_kind, notifiable_id, kind, payload)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(NotifiableKind::User)
        .bind(recipient)
        .bind(payload.kind())
        .bind(Json(payload))
        .fetch_one(&self.pool)
        .await?;

        Ok(notification)
    }

    async fn mark_read(&self, id: Uuid, user_id: Uuid) -> Result<Option<Notification>> {
        let notification = sqlx::query_as::<_, Notification>(
            r#"
            UPDATE notifications
            SET read_at = NOW()
            WHERE id = $1 AND notifiable_id = $2 AND read_at IS NULL
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(notification)
    }

    async fn mark_all_read(&self, user_id: Uuid) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE notifications
            SET read_at = NOW()
            WHERE notifiable_id = $1 AND read_at IS NULL
            "#,
        )
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn latest_for_user(&self, user_id: Uuid, limit: i64) -> Result<Vec<Notification>> {
        let notifications = sqlx::query_as::<_, Notification>(
            r#"
            SELECT * FROM notifications
            WHERE notifiable_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(notifications)
    }

    async fn unread_count(&self, user_id: Uuid) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM notifications WHERE notifiable_id = $1 AND read_at IS NULL",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}

#[async_trait]
impl MessageStore for PgStore {
    async fn insert_message(
        &self,
        sender_id: Uuid,
        receiver_id: Uuid,
        body: &str,
    ) -> Result<Message> {
        let message = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (sender_id, receiver_id, body)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(sender_id)
        .bind(receiver_id)
        .bind(body)
        .fetch_one(&self.pool)
        .await?;

        Ok(message)
    }

    async fn conversation(&self, user_id: Uuid, peer_id: Uuid) -> Result<Vec<Message>> {
        let messages = sqlx::query_as::<_, Message>(
            r#"
            SELECT * FROM messages
            WHERE (sender_id = $1 AND receiver_id = $2)
               OR (sender_id = $2 AND receiver_id = $1)
            ORDER BY sent_at ASC
            "#,
        )
        .bind(user_id)
        .bind(peer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    async fn unread_count(&self, user_id: Uuid) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM messages WHERE receiver_id = $1 AND read_at IS NULL",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn mark_conversation_read(&self, receiver_id: Uuid, sender_id: Uuid) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE messages
            SET read_at = NOW()
            WHERE receiver_id = $1 AND sender_id = $2 AND read_at IS NULL
            "#,
        )
        .bind(receiver_id)
        .bind(sender_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
