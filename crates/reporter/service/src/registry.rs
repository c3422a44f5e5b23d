//! Contains the [`ServiceRegistry`].

use crate::{Service, ServiceError};
use std::fmt;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// An error returned by the [`ServiceRegistry`].
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A service with the same name is already registered.
    #[error("service `{0}` is already registered")]
    DuplicateService(&'static str),
    /// A service failed to start.
    #[error("failed to start service `{name}`: {source}")]
    Start {
        /// The name of the service.
        name: &'static str,
        /// The error returned by the service.
        #[source]
        source: ServiceError,
    },
}

/// Holds the services of the process, keyed by their [`Service::name`].
///
/// Services are started in registration order. They are stopped by cancelling the token passed
/// to [`ServiceRegistry::start_all`], which every service receives a child of.
#[derive(Default)]
pub struct ServiceRegistry {
    services: Vec<Box<dyn Service>>,
}

impl fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceRegistry")
            .field("services", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

impl ServiceRegistry {
    /// Creates an empty [`ServiceRegistry`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `service`, rejecting it if its name is already taken.
    pub fn register<S: Service + 'static>(&mut self, service: S) -> Result<(), RegistryError> {
        let name = service.name();
        if self.get(name).is_some() {
            warn!(target: "registry", name, "Service already registered");
            return Err(RegistryError::DuplicateService(name));
        }
        info!(target: "registry", name, "Registered service");
        self.services.push(Box::new(service));
        Ok(())
    }

    /// Returns the service registered under `name`.
    pub fn get(&self, name: &str) -> Option<&dyn Service> {
        self.services.iter().find(|service| service.name() == name).map(|service| service.as_ref())
    }

    /// Returns the names of the registered services in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.services.iter().map(|service| service.name())
    }

    /// Returns the number of registered services.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Returns `true` if no service is registered.
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Starts every registered service with a child token of `cancel`.
    ///
    /// Stops at the first service that fails to start. Services started before it keep running
    /// until `cancel` is cancelled.
    pub fn start_all(&self, cancel: &CancellationToken) -> Result<(), RegistryError> {
        for service in &self.services {
            let name = service.name();
            info!(target: "registry", name, "Starting service");
            service
                .start(cancel.child_token())
                .map_err(|source| RegistryError::Start { name, source })?;
        }
        Ok(())
    }

    /// Returns the health of every registered service in registration order.
    pub fn statuses(&self) -> Vec<(&'static str, Result<(), ServiceError>)> {
        self.services.iter().map(|service| (service.name(), service.status())).collect()
    }
}
