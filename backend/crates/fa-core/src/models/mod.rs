pub mod activity_log;
pub mod face_descriptor;
pub mod identity;
pub mod user;
