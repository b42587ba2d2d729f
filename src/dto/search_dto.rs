use serde::{Deserialize, Serialize};

use crate::models::profile::ExperienceBand;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CandidateSearchQuery {
    /// Matched against candidate names and profile skills, case-insensitive.
    pub q: Option<String>,
    pub experience: Option<ExperienceBand>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}
