use std::sync::Arc;

use crate::dto::search_dto::CandidateSearchQuery;
use crate::error::{Error, Result};
use crate::middleware::auth::AuthUser;
use crate::models::profile::{CandidatePage, CandidateSearch};
use crate::models::user::UserRole;
use crate::store::UserStore;

#[derive(Clone)]
pub struct SearchService {
    users: Arc<dyn UserStore>,
}

impl SearchService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    pub async fn search(
        &self,
        user: &AuthUser,
        query: CandidateSearchQuery,
    ) -> Result<CandidatePage> {
        if user.role != UserRole::Employer {
            return Err(Error::Forbidden(
                "Only employers can search candidates".to_string(),
            ));
        }
        let search = CandidateSearch {
            term: query.q,
            band: query.experience,
            page: query.page.unwrap_or(1).max(1),
            per_page: query.per_page.unwrap_or(20).clamp(1, 100),
        };
        self.users.search_candidates(&search).await
    }
}
