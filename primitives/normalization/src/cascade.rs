//! Default cascade resolution.

/// Return the first candidate with a non-zero length, or an empty string.
///
/// Candidates are ordered most specific first, e.g. method override, service
/// override, role default, built-in default.
pub fn first_non_empty(candidates: &[&str]) -> String {
    candidates.iter().find(|c| !c.is_empty()).map(|c| c.to_string()).unwrap_or_default()
}
