pub mod activity_log_repository;
pub mod factory;

pub use activity_log_repository::ActivityLogRepositoryImpl;
pub use factory::{ActivityLogRepoFactory, ActivityLogRepositories};
