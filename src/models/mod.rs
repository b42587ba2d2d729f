pub mod application;
pub mod interview;
pub mod job;
pub mod message;
pub mod notification;
pub mod profile;
pub mod user;
