use crate::{EnrolledDescriptor, User};

use async_trait::async_trait;

/// Read side of user storage, as consumed by the face matcher and the login flows.
#[async_trait]
pub trait DescriptorStore: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Every user with a present, non-empty descriptor.
    ///
    /// Order is unspecified. The matcher only uses it to break exact ties.
    async fn all_enrolled_descriptors(&self) -> Result<Vec<EnrolledDescriptor>, Self::Error>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, Self::Error>;
}
