//! The [`Service`] trait.

use tokio_util::sync::CancellationToken;

/// The [`Service`] trait is the surface a supervisor uses to drive a long running service.
///
/// Services are single-use: once the token passed to [`Service::start`] is cancelled the service
/// is stopped for good.
pub trait Service: Send + Sync {
    /// Returns the name the service is registered and logged under.
    fn name(&self) -> &'static str;

    /// Starts the service. Background work must stop once `cancel` is cancelled.
    fn start(&self, cancel: CancellationToken) -> Result<(), ServiceError>;

    /// Returns `Ok(())` if the service is healthy.
    fn status(&self) -> Result<(), ServiceError>;
}

/// An error reported by a [`Service`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// The service could not be started.
    #[error("failed to start: {0}")]
    Start(String),
    /// The service is running but unhealthy.
    #[error("unhealthy: {0}")]
    Unhealthy(String),
}
