//! Face descriptor - the fixed-length embedding produced by the capture pipeline.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Numeric feature vector representing a face.
///
/// Values read back from storage are wrapped with [`FaceDescriptor::new`] and are
/// never re-validated; untrusted input goes through [`FaceDescriptor::parse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct FaceDescriptor(Vec<f64>);

impl FaceDescriptor {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Validate a descriptor submitted by a client.
    ///
    /// Rejects sequences shorter than `min_len` and any non-finite component.
    #[track_caller]
    pub fn parse(values: Vec<f64>, min_len: usize) -> CoreErrorResult<Self> {
        if values.len() < min_len {
            return Err(CoreError::InvalidDescriptor {
                message: format!(
                    "descriptor must have at least {} elements, got {}",
                    min_len,
                    values.len()
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(CoreError::InvalidDescriptor {
                message: format!("descriptor element {} is not a finite number", index),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self(values))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl From<Vec<f64>> for FaceDescriptor {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}
