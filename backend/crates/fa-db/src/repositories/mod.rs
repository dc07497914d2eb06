pub mod activity_log_filter;
pub mod activity_log_repository;
pub mod user_repository;
