use crate::{
    DescriptorStore, EnrolledDescriptor, FaceDescriptor, FaceMatch, Identity, MatchError,
    MatcherConfig, Result as CoreErrorResult, euclidean_distance,
};

use std::panic::Location;

use error_location::ErrorLocation;
use log::debug;

/// Stateless nearest-neighbour matcher over a full scan of enrolled descriptors.
#[derive(Debug, Clone, Copy, Default)]
pub struct FaceMatcher {
    config: MatcherConfig,
}

impl FaceMatcher {
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Validate a client-submitted descriptor against the configured minimum length.
    #[track_caller]
    pub fn descriptor_from(&self, values: Vec<f64>) -> CoreErrorResult<FaceDescriptor> {
        FaceDescriptor::parse(values, self.config.min_descriptor_length)
    }

    /// Fetch all enrolled descriptors from `store` and pick the best match for `query`.
    pub async fn identify<S>(
        &self,
        store: &S,
        query: &FaceDescriptor,
    ) -> Result<FaceMatch, MatchError>
    where
        S: DescriptorStore + ?Sized,
    {
        let candidates = store
            .all_enrolled_descriptors()
            .await
            .map_err(|e| MatchError::Store {
                source: Box::new(e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.best_match(query, candidates)
    }

    /// Select the closest candidate and apply the threshold.
    ///
    /// Ties keep the first candidate in iteration order. A distance exactly equal to
    /// the threshold is accepted. Candidates whose length differs from the query are
    /// infinitely far away and can never win, but they do not abort the scan.
    #[track_caller]
    pub fn best_match<I>(
        &self,
        query: &FaceDescriptor,
        candidates: I,
    ) -> Result<FaceMatch, MatchError>
    where
        I: IntoIterator<Item = EnrolledDescriptor>,
    {
        let mut scanned = 0usize;
        let mut best: Option<Identity> = None;
        let mut min_distance = f64::INFINITY;

        for candidate in candidates {
            if candidate.descriptor.is_empty() {
                continue;
            }
            scanned += 1;

            let distance = euclidean_distance(query.as_slice(), candidate.descriptor.as_slice());
            if distance < min_distance {
                min_distance = distance;
                best = Some(candidate.identity);
            }
        }

        if scanned == 0 {
            return Err(MatchError::NoEnrolledUsers {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        match best {
            Some(identity) if min_distance <= self.config.threshold => {
                debug!(
                    "Face matched {} at distance {:.4} ({} candidates)",
                    identity.username, min_distance, scanned
                );
                Ok(FaceMatch {
                    identity,
                    distance: min_distance,
                })
            }
            _ => {
                debug!(
                    "No face within threshold {} ({} candidates, best {:.4})",
                    self.config.threshold, scanned, min_distance
                );
                Err(MatchError::NoMatch {
                    location: ErrorLocation::from(Location::caller()),
                })
            }
        }
    }
}
