pub mod create;
pub mod find_by_coc;
pub mod find_by_dedup_key;
pub mod load_batch;
pub mod repo_impl;
#[cfg(test)]
pub mod test_utils;

pub use repo_impl::ActivityLogRepositoryImpl;
