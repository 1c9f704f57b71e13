pub mod activity_log;
pub mod db_init;
