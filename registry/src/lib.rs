use std::sync::Arc;

use adapter::{
    database::ConnectionPool,
    repository::{
        admin_log::AdminLogRepositoryImpl, auth::AuthRepositoryImpl,
        feedback::FeedbackRepositoryImpl, guest::GuestRepositoryImpl,
        health::HealthCheckRepositoryImpl, hostel::HostelRepositoryImpl, user::UserRepositoryImpl,
    },
};
use kernel::repository::{
    admin_log::AdminLogRepository, auth::AuthRepository, feedback::FeedbackRepository,
    guest::GuestRepository, health::HealthCheckRepository, hostel::HostelRepository,
    user::UserRepository,
};
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    user_repository: Arc<dyn UserRepository>,
    feedback_repository: Arc<dyn FeedbackRepository>,
    admin_log_repository: Arc<dyn AdminLogRepository>,
    hostel_repository: Arc<dyn HostelRepository>,
    guest_repository: Arc<dyn GuestRepository>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, app_config: AppConfig) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let auth_repository = Arc::new(AuthRepositoryImpl::new(
            pool.clone(),
            app_config.admin.clone(),
        ));
        let user_repository = Arc::new(UserRepositoryImpl::new(pool.clone()));
        let feedback_repository = Arc::new(FeedbackRepositoryImpl::new(pool.clone()));
        let admin_log_repository = Arc::new(AdminLogRepositoryImpl::new(pool.clone()));
        let hostel_repository = Arc::new(HostelRepositoryImpl::new(pool.clone()));
        let guest_repository = Arc::new(GuestRepositoryImpl::new(pool.clone()));
        Self {
            health_check_repository,
            auth_repository,
            user_repository,
            feedback_repository,
            admin_log_repository,
            hostel_repository,
            guest_repository,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn feedback_repository(&self) -> Arc<dyn FeedbackRepository> {
        self.feedback_repository.clone()
    }

    pub fn admin_log_repository(&self) -> Arc<dyn AdminLogRepository> {
        self.admin_log_repository.clone()
    }

    pub fn hostel_repository(&self) -> Arc<dyn HostelRepository> {
        self.hostel_repository.clone()
    }

    pub fn guest_repository(&self) -> Arc<dyn GuestRepository> {
        self.guest_repository.clone()
    }
}
