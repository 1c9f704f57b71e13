pub mod activity_log_store;
pub mod domain;

// Re-exports
pub use activity_log_store::*;
pub use domain::*;
