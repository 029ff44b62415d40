#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Service Registry — the resolved REST declarations, per role.
//!
//! This crate stores the output of the normalization pass so that transport
//! and dispatch code can look services up by identifier. Consumer and provider
//! entries live in two independent slots. Each slot is replaced wholesale by
//! [`ServiceRegistry::install`]: readers observe either the previous map or the
//! new one, never a mix of both.

use std::collections::BTreeMap;
use std::sync::Arc;

use arc_swap::ArcSwap;
use types::{Role, ServiceDeclaration, ServiceDeclarations};

/// Map from service identifier to resolved service, as published to readers.
pub type ServiceMap = BTreeMap<String, Arc<ServiceDeclaration>>;

/// Holds one atomically swappable [`ServiceMap`] per role.
///
/// Share it behind an `Arc` between the loader that installs declarations and
/// the components that read them.
#[derive(Debug, Default)]
pub struct ServiceRegistry {
    consumer: ArcSwap<ServiceMap>,
    provider: ArcSwap<ServiceMap>,
}

impl ServiceRegistry {
    /// Create a registry with both roles empty.
    pub fn new() -> Self { Self::default() }

    fn slot(&self, role: Role) -> &ArcSwap<ServiceMap> {
        match role {
            Role::Consumer => &self.consumer,
            Role::Provider => &self.provider,
        }
    }

    /// Replace every service registered for `role` with `services`.
    ///
    /// Nothing is merged: identifiers absent from `services` stop resolving.
    pub fn install(&self, role: Role, services: ServiceDeclarations) {
        let map: ServiceMap =
            services.into_iter().map(|(id, service)| (id, Arc::new(service))).collect();
        logging::trace("registry", &format!("installing {} {} service(s)", map.len(), role));
        self.slot(role).store(Arc::new(map));
    }

    /// Resolved consumer-side service by identifier.
    pub fn consumer_service(&self, id: &str) -> Option<Arc<ServiceDeclaration>> {
        self.lookup(Role::Consumer, id)
    }

    /// Resolved provider-side service by identifier.
    pub fn provider_service(&self, id: &str) -> Option<Arc<ServiceDeclaration>> {
        self.lookup(Role::Provider, id)
    }

    /// Every consumer-side service currently installed.
    pub fn consumer_services(&self) -> Arc<ServiceMap> { self.snapshot(Role::Consumer) }

    /// Every provider-side service currently installed.
    pub fn provider_services(&self) -> Arc<ServiceMap> { self.snapshot(Role::Provider) }
}

/// Read-only interface to the [`ServiceRegistry`].
///
/// Dispatch code should depend on this trait rather than on the concrete
/// registry so it cannot install declarations by accident.
pub trait ServiceRegistryReader {
    /// Get a resolved service by role and identifier.
    ///
    /// Returns `None` if no service with the given identifier is installed.
    fn lookup(&self, role: Role, id: &str) -> Option<Arc<ServiceDeclaration>>;

    /// Get the complete map currently installed for `role`.
    fn snapshot(&self, role: Role) -> Arc<ServiceMap>;

    /// Get all service identifiers installed for `role`, in sorted order.
    fn list_services(&self, role: Role) -> Vec<String> {
        self.snapshot(role).keys().cloned().collect()
    }

    /// Get the number of services installed for `role`.
    fn service_count(&self, role: Role) -> usize { self.snapshot(role).len() }
}

impl ServiceRegistryReader for ServiceRegistry {
    fn lookup(&self, role: Role, id: &str) -> Option<Arc<ServiceDeclaration>> {
        self.slot(role).load().get(id).cloned()
    }

    fn snapshot(&self, role: Role) -> Arc<ServiceMap> { self.slot(role).load_full() }
}
