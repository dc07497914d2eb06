use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("No face data available to match against {location}")]
    NoEnrolledUsers { location: ErrorLocation },

    /// Deliberately carries neither the best distance nor the nearest candidate.
    #[error("Face not recognized {location}")]
    NoMatch { location: ErrorLocation },

    #[error("Descriptor store failed: {source} {location}")]
    Store {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
        location: ErrorLocation,
    },
}

impl MatchError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NoEnrolledUsers { .. } => "NO_ENROLLED_USERS",
            Self::NoMatch { .. } => "FACE_NOT_RECOGNIZED",
            Self::Store { .. } => "INTERNAL_ERROR",
        }
    }

    /// Message safe to show to the person at the camera
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NoEnrolledUsers { .. } => "No face data available to match against",
            Self::NoMatch { .. } => "Face not recognized",
            Self::Store { .. } => "Face login is temporarily unavailable",
        }
    }
}
