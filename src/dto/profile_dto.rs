use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpsertSeekerProfilePayload {
    pub headline: Option<String>,
    pub skills: Option<String>,
    #[validate(range(min = 0, max = 70))]
    pub experience_years: i32,
    pub location: Option<String>,
    pub resume_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpsertEmployerProfilePayload {
    #[validate(length(min = 1))]
    pub company_name: String,
    pub website: Option<String>,
    pub about: Option<String>,
}
