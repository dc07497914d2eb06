pub mod error;
pub mod matcher;
pub mod models;
pub mod store;

pub use error::{CoreError, Result};
pub use matcher::distance::euclidean_distance;
pub use matcher::face_match::FaceMatch;
pub use matcher::face_matcher::FaceMatcher;
pub use matcher::match_error::MatchError;
pub use matcher::matcher_config::{
    DEFAULT_MATCH_THRESHOLD, DEFAULT_MIN_DESCRIPTOR_LENGTH, MatcherConfig,
};
pub use models::activity_log::{ActivityAction, ActivityLog};
pub use models::face_descriptor::FaceDescriptor;
pub use models::identity::Identity;
pub use models::user::User;
pub use store::activity_log_writer::ActivityLogWriter;
pub use store::descriptor_store::DescriptorStore;
pub use store::enrolled_descriptor::EnrolledDescriptor;

#[cfg(test)]
mod tests;
