//! Nearest-neighbour face matching.
//!
//! A query descriptor is compared against every enrolled descriptor by Euclidean
//! distance. The closest one wins if it is within the acceptance threshold.

pub mod distance;
pub mod face_match;
pub mod face_matcher;
pub mod match_error;
pub mod matcher_config;
