use crate::ActivityDto;

use serde::Serialize;

/// Single activity response
#[derive(Debug, Serialize)]
pub struct ActivityResponse {
    pub activity: ActivityDto,
}
