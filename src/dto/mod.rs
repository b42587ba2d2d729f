pub mod application_dto;
pub mod interview_dto;
pub mod job_dto;
pub mod message_dto;
pub mod notification_dto;
pub mod profile_dto;
pub mod search_dto;
