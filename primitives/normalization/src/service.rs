//! Service normalization.

use logging::WarningSink;
use types::{MethodMap, RoleDefaults, ServiceDeclaration, ServiceDeclarations};

use crate::cascade::first_non_empty;
use crate::method::normalize_method;

/// Resolve a service and every one of its methods.
///
/// The endpoint implementation for the role (`rest_client` for consumers,
/// `rest_server` for providers) falls back to the role default and then to the
/// built-in implementation. Methods are normalized once each, in declaration
/// order, and indexed by name into `method_map`; a repeated name keeps the
/// last declaration.
pub fn normalize_service(
    mut service: ServiceDeclaration,
    defaults: &RoleDefaults,
    sink: &dyn WarningSink,
) -> ServiceDeclaration {
    let role = defaults.role;
    let endpoint_impl = first_non_empty(&[
        service.endpoint_impl(role),
        &defaults.endpoint_impl,
        role.default_endpoint_impl(),
    ]);
    service.set_endpoint_impl(role, endpoint_impl);

    let mut methods = std::mem::take(&mut service.methods);
    let mut method_map = MethodMap::new();
    for method in &mut methods {
        normalize_method(method, &service, defaults, sink);
        method_map.insert(method.name.clone(), method.clone());
    }
    service.methods = methods;
    service.method_map = method_map;
    service
}

/// Resolve every service of one declaration, keeping the service identifiers.
pub fn normalize_services(
    services: ServiceDeclarations,
    defaults: &RoleDefaults,
    sink: &dyn WarningSink,
) -> ServiceDeclarations {
    services
        .into_iter()
        .map(|(id, service)| (id, normalize_service(service, defaults, sink)))
        .collect()
}
