use std::sync::Arc;

use serde::Serialize;

use crate::dto::profile_dto::{UpsertEmployerProfilePayload, UpsertSeekerProfilePayload};
use crate::error::{Error, Result};
use crate::middleware::auth::AuthUser;
use crate::models::profile::{EmployerProfile, JobSeekerProfile};
use crate::models::user::UserRole;
use crate::store::UserStore;

/// The caller's own profile, shaped by role. Admins and moderators carry
/// no marketplace profile.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileView {
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seeker: Option<JobSeekerProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employer: Option<EmployerProfile>,
}

#[derive(Clone)]
pub struct ProfileService {
    users: Arc<dyn UserStore>,
}

impl ProfileService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    pub async fn upsert_seeker(
        &self,
        user: &AuthUser,
        payload: UpsertSeekerProfilePayload,
    ) -> Result<JobSeekerProfile> {
        if user.role != UserRole::JobSeeker {
            return Err(Error::Forbidden(
                "Only job seekers have a seeker profile".to_string(),
            ));
        }
        self.users.upsert_seeker_profile(user.id, &payload).await
    }

    pub async fn upsert_employer(
        &self,
        user: &AuthUser,
        payload: UpsertEmployerProfilePayload,
    ) -> Result<EmployerProfile> {
        if user.role != UserRole::Employer {
            return Err(Error::Forbidden(
                "Only employers have an employer profile".to_string(),
            ));
        }
        self.users.upsert_employer_profile(user.id, &payload).await
    }

    pub async fn own(&self, user: &AuthUser) -> Result<ProfileView> {
        let mut view = ProfileView {
            role: user.role,
            seeker: None,
            employer: None,
        };
        match user.role {
            UserRole::JobSeeker => view.seeker = self.users.seeker_profile(user.id).await?,
            UserRole::Employer => view.employer = self.users.employer_profile(user.id).await?,
            UserRole::Admin | UserRole::Moderator => {}
        }
        Ok(view)
    }
}
