//! Type-safe role names for REST declarations.
//!
//! A declaration is read either from the consumer side (the process calls a
//! remote service) or the provider side (the process exposes one). Each role
//! carries its own built-in defaults and its own registry slot.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Built-in REST client used by consumers when nothing else is declared.
pub const DEFAULT_REST_CLIENT: &str = "resty";
/// Built-in REST server used by providers when nothing else is declared.
pub const DEFAULT_REST_SERVER: &str = "go-restful";
/// Media type consumers produce and consume unless overridden.
pub const DEFAULT_CONSUMER_MEDIA_TYPE: &str = "application/json";
/// Media type providers produce and consume unless overridden.
pub const DEFAULT_PROVIDER_MEDIA_TYPE: &str = "*/*";

/// The side of a REST call a declaration describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Calls remote services.
    Consumer,
    /// Exposes services to remote callers.
    Provider,
}

/// Metadata for a role variant.
struct RoleMetadata {
    as_str: &'static str,
    default_endpoint_impl: &'static str,
    default_media_type: &'static str,
}

const CONSUMER_METADATA: RoleMetadata = RoleMetadata {
    as_str: "consumer",
    default_endpoint_impl: DEFAULT_REST_CLIENT,
    default_media_type: DEFAULT_CONSUMER_MEDIA_TYPE,
};

const PROVIDER_METADATA: RoleMetadata = RoleMetadata {
    as_str: "provider",
    default_endpoint_impl: DEFAULT_REST_SERVER,
    default_media_type: DEFAULT_PROVIDER_MEDIA_TYPE,
};

impl Role {
    /// Both roles, consumer first.
    pub const ALL: [Role; 2] = [Role::Consumer, Role::Provider];

    fn metadata(&self) -> &'static RoleMetadata {
        match self {
            Role::Consumer => &CONSUMER_METADATA,
            Role::Provider => &PROVIDER_METADATA,
        }
    }

    /// Get the string representation of the role.
    pub fn as_str(&self) -> &'static str { self.metadata().as_str }

    /// Hardcoded endpoint implementation, the last step of the client/server cascade.
    pub fn default_endpoint_impl(&self) -> &'static str { self.metadata().default_endpoint_impl }

    /// Media type used for `rest_produces`/`rest_consumes` when the role record omits them.
    pub fn default_media_type(&self) -> &'static str { self.metadata().default_media_type }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "consumer" => Ok(Role::Consumer),
            "provider" => Ok(Role::Provider),
            _ => Err(format!("Unknown role: {} (expected consumer or provider)", s)),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.as_str()) }
}
