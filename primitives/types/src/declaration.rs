//! Declaration records as authored, plus the fields derived during normalization.
//!
//! Every record decodes with container-level defaults, so any key may be
//! omitted. Fields documented as *derived* are filled in by the normalizer and
//! are never read from the input.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::role::{
    Role, DEFAULT_CONSUMER_MEDIA_TYPE, DEFAULT_PROVIDER_MEDIA_TYPE, DEFAULT_REST_CLIENT,
    DEFAULT_REST_SERVER,
};

/// Sentinel for `rest_body`: the method has no designated body argument.
pub const NO_BODY_ARGUMENT: i32 = -1;

/// Position → name mapping parsed from a `"0:id,1:name"` style string.
pub type ParamMap = BTreeMap<usize, String>;

/// Method name → resolved method.
pub type MethodMap = BTreeMap<String, MethodDeclaration>;

/// Service identifier → service declaration, as authored.
pub type ServiceDeclarations = BTreeMap<String, ServiceDeclaration>;

/// Role-level values every service and method of one declaration falls back to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleDefaults {
    /// Role the declaration was read for.
    pub role: Role,
    /// Role-level client (consumer) or server (provider) implementation.
    pub endpoint_impl: String,
    /// Role-level `rest_produces`.
    pub produces: String,
    /// Role-level `rest_consumes`.
    pub consumes: String,
}

impl RoleDefaults {
    /// Defaults carrying only the built-in values for `role`.
    pub fn builtin(role: Role) -> Self {
        Self {
            role,
            endpoint_impl: role.default_endpoint_impl().to_string(),
            produces: role.default_media_type().to_string(),
            consumes: role.default_media_type().to_string(),
        }
    }
}

/// A top-level declaration for one role.
///
/// Implemented by [`ConsumerDeclaration`] and [`ProviderDeclaration`] so the
/// normalization pass can treat both the same way.
pub trait TopLevelDeclaration {
    /// Role this declaration belongs to.
    fn role(&self) -> Role;

    /// Role-level defaults declared at the top of the record.
    fn role_defaults(&self) -> RoleDefaults;

    /// Split into the role defaults and the service table.
    fn into_parts(self) -> (RoleDefaults, ServiceDeclarations);
}

/// Consumer-side declaration: the services this process calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsumerDeclaration {
    /// Default REST client for every referenced service
    pub rest_client: String,
    /// Default media type produced by every method
    pub rest_produces: String,
    /// Default media type consumed by every method
    pub rest_consumes: String,
    /// Referenced services keyed by service identifier
    pub references: ServiceDeclarations,
}

impl Default for ConsumerDeclaration {
    fn default() -> Self {
        Self {
            rest_client: DEFAULT_REST_CLIENT.to_string(),
            rest_produces: DEFAULT_CONSUMER_MEDIA_TYPE.to_string(),
            rest_consumes: DEFAULT_CONSUMER_MEDIA_TYPE.to_string(),
            references: ServiceDeclarations::new(),
        }
    }
}

impl TopLevelDeclaration for ConsumerDeclaration {
    fn role(&self) -> Role { Role::Consumer }

    fn role_defaults(&self) -> RoleDefaults {
        RoleDefaults {
            role: Role::Consumer,
            endpoint_impl: self.rest_client.clone(),
            produces: self.rest_produces.clone(),
            consumes: self.rest_consumes.clone(),
        }
    }

    fn into_parts(self) -> (RoleDefaults, ServiceDeclarations) {
        let defaults = self.role_defaults();
        (defaults, self.references)
    }
}

/// Provider-side declaration: the services this process exposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderDeclaration {
    /// Default REST server for every exposed service
    pub rest_server: String,
    /// Default media type produced by every method
    pub rest_produces: String,
    /// Default media type consumed by every method
    pub rest_consumes: String,
    /// Exposed services keyed by service identifier
    pub services: ServiceDeclarations,
}

impl Default for ProviderDeclaration {
    fn default() -> Self {
        Self {
            rest_server: DEFAULT_REST_SERVER.to_string(),
            rest_produces: DEFAULT_PROVIDER_MEDIA_TYPE.to_string(),
            rest_consumes: DEFAULT_PROVIDER_MEDIA_TYPE.to_string(),
            services: ServiceDeclarations::new(),
        }
    }
}

impl TopLevelDeclaration for ProviderDeclaration {
    fn role(&self) -> Role { Role::Provider }

    fn role_defaults(&self) -> RoleDefaults {
        RoleDefaults {
            role: Role::Provider,
            endpoint_impl: self.rest_server.clone(),
            produces: self.rest_produces.clone(),
            consumes: self.rest_consumes.clone(),
        }
    }

    fn into_parts(self) -> (RoleDefaults, ServiceDeclarations) {
        let defaults = self.role_defaults();
        (defaults, self.services)
    }
}

/// One remote-callable service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceDeclaration {
    /// Interface identifier (required by convention, not validated)
    pub interface: String,
    /// Remote URL
    pub url: String,
    /// Base path prepended to every method path
    pub rest_path: String,
    /// Service-level `produces` override
    pub rest_produces: String,
    /// Service-level `consumes` override
    pub rest_consumes: String,
    /// Service-level HTTP verb override
    pub rest_method: String,
    /// REST client override (consumer role)
    pub rest_client: String,
    /// REST server override (provider role)
    pub rest_server: String,
    /// Methods in declaration order
    pub methods: Vec<MethodDeclaration>,
    /// Derived: method name → resolved method
    #[serde(skip_deserializing)]
    pub method_map: MethodMap,
}

impl ServiceDeclaration {
    /// Endpoint implementation relevant to `role` (client for consumers, server for providers).
    pub fn endpoint_impl(&self, role: Role) -> &str {
        match role {
            Role::Consumer => &self.rest_client,
            Role::Provider => &self.rest_server,
        }
    }

    /// Overwrite the endpoint implementation relevant to `role`.
    pub fn set_endpoint_impl(&mut self, role: Role, value: String) {
        match role {
            Role::Consumer => self.rest_client = value,
            Role::Provider => self.rest_server = value,
        }
    }

    /// Resolved method by name.
    pub fn method(&self, name: &str) -> Option<&MethodDeclaration> { self.method_map.get(name) }
}

/// HTTP settings shared by the method record (`rest` key).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonHttpConfig {
    /// Path segment; after normalization, the absolute path
    pub path: String,
    /// HTTP verb
    pub method: String,
    /// Query parameters as `"0:name,1:other"`
    pub query_params: String,
    /// Path parameters as `"0:id"`
    pub path_params: String,
}

/// One method of a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MethodDeclaration {
    /// Method name, used as the map key
    pub name: String,
    /// Derived: owning service's interface identifier
    #[serde(skip_deserializing)]
    pub interface_name: String,
    /// Method URL
    pub url: String,
    /// Method-level `produces` override
    pub rest_produces: String,
    /// Method-level `consumes` override
    pub rest_consumes: String,
    /// Embedded HTTP settings
    pub rest: CommonHttpConfig,
    /// Index of the body argument, [`NO_BODY_ARGUMENT`] when absent
    pub rest_body: i32,
    /// Headers as `"0:Authorization,1:X-Trace"`
    pub rest_headers: String,
    /// Path parameter positions; parsed from `rest.path_params` unless pre-populated
    pub path_params_map: ParamMap,
    /// Query parameter positions; parsed from `rest.query_params` unless pre-populated
    pub query_params_map: ParamMap,
    /// Header positions; parsed from `rest_headers` unless pre-populated
    pub headers_map: ParamMap,
}

impl Default for MethodDeclaration {
    fn default() -> Self {
        Self {
            name: String::new(),
            interface_name: String::new(),
            url: String::new(),
            rest_produces: String::new(),
            rest_consumes: String::new(),
            rest: CommonHttpConfig::default(),
            rest_body: NO_BODY_ARGUMENT,
            rest_headers: String::new(),
            path_params_map: ParamMap::new(),
            query_params_map: ParamMap::new(),
            headers_map: ParamMap::new(),
        }
    }
}

impl MethodDeclaration {
    /// Create a method with the given name and all other fields defaulted.
    pub fn named(name: impl Into<String>) -> Self { Self { name: name.into(), ..Self::default() } }

    /// Position of the body argument, if one is designated.
    pub fn body_index(&self) -> Option<usize> { usize::try_from(self.rest_body).ok() }
}
