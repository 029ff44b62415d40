#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Core data model for REST endpoint declarations.
//!
//! This crate defines the records a human writes to describe REST services
//! (role-level defaults, services, methods and their embedded HTTP settings)
//! together with the fields the normalization pass derives from them. The
//! records are format-agnostic; any serde format can decode them.

/// Consumer/provider roles and their built-in defaults.
pub mod role;
/// Declaration records and derived lookup maps.
pub mod declaration;

/// Re-export the `Role` enum and built-in default values for convenience.
pub use role::{
    Role, DEFAULT_CONSUMER_MEDIA_TYPE, DEFAULT_PROVIDER_MEDIA_TYPE, DEFAULT_REST_CLIENT,
    DEFAULT_REST_SERVER,
};
/// Re-export the declaration records for convenience.
pub use declaration::{
    CommonHttpConfig, ConsumerDeclaration, MethodDeclaration, MethodMap, ParamMap,
    ProviderDeclaration, RoleDefaults, ServiceDeclaration, ServiceDeclarations,
    TopLevelDeclaration, NO_BODY_ARGUMENT,
};
