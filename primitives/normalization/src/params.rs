//! Parameter-string parsing.
//!
//! Positional parameters are declared as a comma-separated list of
//! `index:name` pairs, for example `"0:id,1:name"`.

use types::ParamMap;

use crate::{NormalizeError, Result};

const ENTRY_SEPARATOR: char = ',';
const PAIR_SEPARATOR: char = ':';

/// Parse `"0:id,1:name"` into `{0: "id", 1: "name"}`.
///
/// Each entry is split on its first `:`, so the name may itself contain
/// colons. An empty input yields an empty map. Any entry without a `:` or with
/// an index that is not a non-negative integer fails the whole string; no
/// partial map is ever returned. A repeated index keeps the last name.
pub fn parse_params(params: &str) -> Result<ParamMap> {
    let mut map = ParamMap::new();
    if params.is_empty() {
        return Ok(map);
    }

    for entry in params.split(ENTRY_SEPARATOR) {
        let (index, name) = entry.split_once(PAIR_SEPARATOR).ok_or_else(|| {
            malformed(params, format!("entry `{}` has no `{}` separator", entry, PAIR_SEPARATOR))
        })?;
        let index = index.parse::<usize>().map_err(|e| {
            malformed(params, format!("index `{}` is not a non-negative integer: {}", index, e))
        })?;
        map.insert(index, name.to_string());
    }

    Ok(map)
}

/// Join a map back into the `index:name` syntax, in ascending index order.
pub fn format_params(map: &ParamMap) -> String {
    map.iter()
        .map(|(index, name)| format!("{}{}{}", index, PAIR_SEPARATOR, name))
        .collect::<Vec<_>>()
        .join(&ENTRY_SEPARATOR.to_string())
}

fn malformed(input: &str, reason: String) -> NormalizeError {
    NormalizeError::MalformedParameterSpec { input: input.to_string(), reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_params() {
        let map = parse_params("0:id,1:name").expect("well-formed params should parse");
        assert_eq!(map.len(), 2);
        assert_eq!(map[&0], "id");
        assert_eq!(map[&1], "name");

        let map = parse_params("3:Authorization").expect("single entry should parse");
        assert_eq!(map.get(&3).map(String::as_str), Some("Authorization"));
    }

    #[test]
    fn test_parse_params_empty_input() {
        let map = parse_params("").expect("empty input is not an error");
        assert!(map.is_empty());
    }

    #[test]
    fn test_parse_params_splits_on_first_colon() {
        let map = parse_params("0:urn:isbn").expect("name may contain colons");
        assert_eq!(map[&0], "urn:isbn");

        let map = parse_params("2:").expect("empty name is accepted");
        assert_eq!(map[&2], "");
    }

    #[test]
    fn test_parse_params_duplicate_index_last_wins() {
        let map = parse_params("0:a,0:b").expect("duplicate index should parse");
        assert_eq!(map.len(), 1);
        assert_eq!(map[&0], "b");
    }

    #[test]
    fn test_parse_params_rejects_non_numeric_index() {
        let err = parse_params("a:id").expect_err("non-numeric index must fail");
        match err {
            NormalizeError::MalformedParameterSpec { input, reason } => {
                assert_eq!(input, "a:id");
                assert!(reason.contains("`a`"));
            }
        }

        assert!(parse_params("-1:id").is_err());
        assert!(parse_params(" 0:id").is_err());
    }

    #[test]
    fn test_parse_params_rejects_missing_separator() {
        let err = parse_params("1").expect_err("entry without `:` must fail");
        assert!(err.to_string().contains("has no `:` separator"));

        // A bad entry after a good one still fails the whole string
        assert!(parse_params("0:id,name").is_err());
        assert!(parse_params("0:id,").is_err());
    }

    #[test]
    fn test_format_params() {
        let map = parse_params("1:name,0:id").expect("params should parse");
        assert_eq!(format_params(&map), "0:id,1:name");
        assert_eq!(format_params(&ParamMap::new()), "");
    }
}
