pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::database::{MIGRATOR, connect, connect_in_memory, run_migrations};
pub use error::{DbError, Result};
pub use repositories::activity_log_filter::{ActivityLogFilter, DEFAULT_ACTIVITY_LIMIT};
pub use repositories::activity_log_repository::ActivityLogRepository;
pub use repositories::user_repository::UserRepository;
