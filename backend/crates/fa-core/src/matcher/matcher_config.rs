/// Acceptance threshold tuned for the 128-d face-api.js embedding.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.3;
pub const DEFAULT_MIN_DESCRIPTOR_LENGTH: usize = 128;

/// Matcher tuning. Both values are specific to the embedding model in use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatcherConfig {
    /// Maximum accepted distance (inclusive)
    pub threshold: f64,
    /// Minimum number of elements a submitted descriptor must carry
    pub min_descriptor_length: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_MATCH_THRESHOLD,
            min_descriptor_length: DEFAULT_MIN_DESCRIPTOR_LENGTH,
        }
    }
}
