pub mod create;
pub mod find_by_coc;
pub mod find_by_dedup_key;
pub mod load_batch;

// Re-exports
pub use create::*;
pub use find_by_coc::*;
pub use find_by_dedup_key::*;
pub use load_batch::*;
