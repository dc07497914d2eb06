use crate::ActivityDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ActivityListResponse {
    pub activities: Vec<ActivityDto>,
}
