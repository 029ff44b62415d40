//! Method normalization.

use logging::WarningSink;
use types::{MethodDeclaration, ParamMap, RoleDefaults, ServiceDeclaration};

use crate::cascade::first_non_empty;
use crate::params::parse_params;

/// Component name reported with every warning raised here.
pub const WARNING_TARGET: &str = "normalization";

/// Resolve one method in place against its owning service and the role defaults.
///
/// After this call the method carries its service's interface identifier, its
/// absolute path (`service.rest_path` + own path, concatenated verbatim), its
/// effective media types and HTTP verb, and its parameter maps. A parameter
/// string that fails to parse is reported to `sink` and leaves only that map
/// empty.
pub fn normalize_method(
    method: &mut MethodDeclaration,
    service: &ServiceDeclaration,
    defaults: &RoleDefaults,
    sink: &dyn WarningSink,
) {
    method.interface_name = service.interface.clone();
    method.rest.path = format!("{}{}", service.rest_path, method.rest.path);

    method.rest_consumes =
        first_non_empty(&[&method.rest_consumes, &service.rest_consumes, &defaults.consumes]);
    method.rest_produces =
        first_non_empty(&[&method.rest_produces, &service.rest_produces, &defaults.produces]);
    method.rest.method = first_non_empty(&[&method.rest.method, &service.rest_method]);

    let owner = format!("{}.{}", method.interface_name, method.name);
    resolve_param_map(
        &mut method.path_params_map,
        &method.rest.path_params,
        "path params",
        &owner,
        sink,
    );
    resolve_param_map(
        &mut method.query_params_map,
        &method.rest.query_params,
        "query params",
        &owner,
        sink,
    );
    resolve_param_map(&mut method.headers_map, &method.rest_headers, "headers", &owner, sink);
}

/// Fill `map` from `source` unless it was pre-populated or there is nothing to parse.
fn resolve_param_map(
    map: &mut ParamMap,
    source: &str,
    field: &str,
    owner: &str,
    sink: &dyn WarningSink,
) {
    if !map.is_empty() || source.is_empty() {
        return;
    }
    match parse_params(source) {
        Ok(parsed) => *map = parsed,
        Err(e) => {
            sink.warn(WARNING_TARGET, &format!("{} of `{}` ignored: {}", field, owner, e));
        }
    }
}
