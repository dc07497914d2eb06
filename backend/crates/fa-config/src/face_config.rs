use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_FACE_THRESHOLD, DEFAULT_MIN_DESCRIPTOR_LENGTH,
    MAX_MIN_DESCRIPTOR_LENGTH, MIN_MIN_DESCRIPTOR_LENGTH,
};

use serde::Deserialize;

/// Face matching settings.
///
/// Both values are tied to the embedding model producing the descriptors.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FaceConfig {
    /// Maximum accepted Euclidean distance (inclusive)
    pub threshold: f64,
    /// Shortest descriptor accepted from clients
    pub min_descriptor_length: usize,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_FACE_THRESHOLD,
            min_descriptor_length: DEFAULT_MIN_DESCRIPTOR_LENGTH,
        }
    }
}

impl FaceConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(ConfigError::face(format!(
                "face.threshold must be a positive finite number, got {}",
                self.threshold
            )));
        }

        if self.min_descriptor_length < MIN_MIN_DESCRIPTOR_LENGTH
            || self.min_descriptor_length > MAX_MIN_DESCRIPTOR_LENGTH
        {
            return Err(ConfigError::face(format!(
                "face.min_descriptor_length must be {}-{}, got {}",
                MIN_MIN_DESCRIPTOR_LENGTH, MAX_MIN_DESCRIPTOR_LENGTH, self.min_descriptor_length
            )));
        }

        Ok(())
    }
}
