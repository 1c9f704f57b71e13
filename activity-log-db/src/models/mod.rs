pub mod activity_log;
pub mod common_enums;
pub mod dedup_key;
pub mod identifiable;

// Re-exports
pub use activity_log::*;
pub use common_enums::*;
pub use dedup_key::*;
pub use identifiable::*;
