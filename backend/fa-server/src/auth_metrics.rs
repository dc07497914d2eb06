use std::time::Duration;

use metrics::{counter, histogram};

/// Metrics collector for the authentication flows
#[derive(Clone)]
pub struct AuthMetrics {
    prefix: &'static str,
}

impl AuthMetrics {
    pub fn new() -> Self {
        Self {
            prefix: "face_auth",
        }
    }

    pub fn register_success(&self) {
        counter!(format!("{}.register.success", self.prefix)).increment(1);
    }

    pub fn login_success(&self) {
        counter!(format!("{}.login.success", self.prefix)).increment(1);
    }

    pub fn login_failure(&self) {
        counter!(format!("{}.login.failure", self.prefix)).increment(1);
    }

    pub fn face_login_matched(&self) {
        counter!(format!("{}.face_login.matched", self.prefix)).increment(1);
    }

    pub fn face_login_no_match(&self) {
        counter!(format!("{}.face_login.no_match", self.prefix)).increment(1);
    }

    pub fn face_login_no_enrolled(&self) {
        counter!(format!("{}.face_login.no_enrolled", self.prefix)).increment(1);
    }

    /// Record the time spent scanning enrolled descriptors
    pub fn face_scan_duration(&self, duration: Duration) {
        histogram!(format!("{}.face_login.scan_ms", self.prefix))
            .record(duration.as_secs_f64() * 1000.0);
    }
}

impl Default for AuthMetrics {
    fn default() -> Self {
        Self::new()
    }
}
