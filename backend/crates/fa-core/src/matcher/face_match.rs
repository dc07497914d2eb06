use crate::Identity;

/// Successful match. `distance` is for logs and metrics only; it must not reach clients.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceMatch {
    pub identity: Identity,
    pub distance: f64,
}
