use crate::dto::HealthRes;

/// Health check shared by every body map server surface.
#[derive(Clone)]
pub struct HealthService;

impl HealthService {
    /// Check health without creating an instance.
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Body map is alive".into(),
        }
    }
}
