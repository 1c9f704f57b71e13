pub mod postgres_repositories;
pub mod repository;

pub use postgres_repositories::PostgresRepositories;
pub use repository::activity_log::activity_log_repository::ActivityLogRepositoryImpl;

#[cfg(test)]
pub mod test_helper;
