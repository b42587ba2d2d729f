use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct JobSeekerProfile {
    pub user_id: Uuid,
    pub headline: Option<String>,
    pub skills: Option<String>,
    pub experience_years: i32,
    pub location: Option<String>,
    pub resume_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct EmployerProfile {
    pub user_id: Uuid,
    pub company_name: String,
    pub website: Option<String>,
    pub about: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Named experience ranges used by candidate search instead of raw years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceBand {
    Entry,
    Mid,
    Senior,
    Expert,
}

impl ExperienceBand {
    /// Inclusive lower bound and optional inclusive upper bound, in years.
    pub fn bounds(&self) -> (i32, Option<i32>) {
        match self {
            ExperienceBand::Entry => (0, Some(2)),
            ExperienceBand::Mid => (3, Some(5)),
            ExperienceBand::Senior => (6, Some(10)),
            ExperienceBand::Expert => (11, None),
        }
    }

    pub fn contains(&self, years: i32) -> bool {
        let (lo, hi) = self.bounds();
        years >= lo && hi.map_or(true, |h| years <= h)
    }
}

/// Normalized search input after paging clamps have been applied.
#[derive(Debug, Clone)]
pub struct CandidateSearch {
    pub term: Option<String>,
    pub band: Option<ExperienceBand>,
    pub page: i64,
    pub per_page: i64,
}

impl CandidateSearch {
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.per_page
    }
}

/// One row of a candidate search result. Contact details stay private,
/// only the public name travels with the profile.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct CandidateHit {
    pub user_id: Uuid,
    pub name: String,
    pub headline: Option<String>,
    pub skills: Option<String>,
    pub experience_years: i32,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CandidatePage {
    pub items: Vec<CandidateHit>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_cover_expected_ranges() {
        assert_eq!(ExperienceBand::Entry.bounds(), (0, Some(2)));
        assert_eq!(ExperienceBand::Mid.bounds(), (3, Some(5)));
        assert_eq!(ExperienceBand::Senior.bounds(), (6, Some(10)));
        assert_eq!(ExperienceBand::Expert.bounds(), (11, None));
    }

    #[test]
    fn band_membership_at_boundaries() {
        assert!(ExperienceBand::Entry.contains(0));
        assert!(ExperienceBand::Entry.contains(2));
        assert!(!ExperienceBand::Entry.contains(3));
        assert!(ExperienceBand::Mid.contains(3));
        assert!(ExperienceBand::Senior.contains(10));
        assert!(!ExperienceBand::Senior.contains(11));
        assert!(ExperienceBand::Expert.contains(11));
        assert!(ExperienceBand::Expert.contains(40));
    }
}
