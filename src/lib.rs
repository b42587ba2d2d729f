pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod utils;

use std::sync::Arc;

use sqlx::PgPool;

use crate::services::{
    application_service::ApplicationService,
    interview_service::InterviewService,
    job_service::JobService,
    message_service::MessageService,
    notification_service::{NotificationSender, NotificationService},
    profile_service::ProfileService,
    search_service::SearchService,
};
use crate::store::Stores;

#[derive(Clone)]
pub struct AppState {
    pub jobs: JobService,
    pub applications: ApplicationService,
    pub interviews: InterviewService,
    pub notifications: NotificationService,
    pub messages: MessageService,
    pub profiles: ProfileService,
    pub search: SearchService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self::with_stores(Stores::postgres(pool))
    }

    /// Builds the state on any store bundle; the notification service doubles
    /// as the dispatcher injected into the workflow services.
    pub fn with_stores(stores: Stores) -> Self {
        let notifier: Arc<dyn NotificationSender> =
            Arc::new(NotificationService::new(stores.notifications.clone()));
        Self::assemble(stores, notifier)
    }

    /// Same wiring with a caller-supplied dispatcher.
    pub fn with_notifier(stores: Stores, notifier: Arc<dyn NotificationSender>) -> Self {
        Self::assemble(stores, notifier)
    }

    fn assemble(stores: Stores, notifier: Arc<dyn NotificationSender>) -> Self {
        let jobs = JobService::new(stores.jobs.clone());
        let applications = ApplicationService::new(
            stores.users.clone(),
            stores.jobs.clone(),
            stores.applications.clone(),
            notifier.clone(),
        );
        let interviews = InterviewService::new(
            stores.interviews.clone(),
            stores.applications.clone(),
            notifier,
        );
        let notifications = NotificationService::new(stores.notifications.clone());
        let messages = MessageService::new(stores.users.clone(), stores.messages.clone());
        let profiles = ProfileService::new(stores.users.clone());
        let search = SearchService::new(stores.users);

        Self {
            jobs,
            applications,
            interviews,
            notifications,
            messages,
            profiles,
            search,
        }
    }
}
