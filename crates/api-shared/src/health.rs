use crate::types::HealthRes;

/// Simple health service for the outline APIs.
///
/// Provides a standardised way to report that the process is up. It does not check the
/// upstream encyclopedia.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Check health without creating an instance.
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Outline API is alive".into(),
        }
    }
}
