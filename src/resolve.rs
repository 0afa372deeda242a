//! Path resolution over JSON value trees
//!
//! This module implements the resolver that follows a sequence of path
//! components through a [`serde_json::Value`], interpreting each
//! component by the kind of the value it is applied to: an object key
//! when the current value is an object, an array ordinal when it is an
//! array. Only string leaves are substitutable; a path ending anywhere
//! else is unresolved.

use serde_json::Value;

/// Resolve a component path against a JSON root
///
/// Walks the tree one component at a time. At each step:
///
/// - object: the component is looked up as a key; a missing key is
///   unresolved
/// - array: the component is parsed as a non-negative ordinal; a
///   non-numeric component or out-of-range ordinal is unresolved
/// - anything else with components remaining: unresolved
///
/// After the final component the current value must be a string; any
/// other kind (number, boolean, null, object, array) is unresolved.
/// Ordinals are accepted without sign and without surrounding
/// whitespace, so `" 1"` under an array is unresolved rather than
/// treated as index 1.
///
/// # Examples
///
/// ```rust
/// use json_placeholder::resolve_path;
/// use serde_json::json;
///
/// let root = json!({"user": {"roles": ["admin", "ops"]}});
/// let path = ["user".to_string(), "roles".to_string(), "1".to_string()];
/// assert_eq!(resolve_path(&root, &path), Some("ops"));
///
/// let path = ["user".to_string(), "roles".to_string(), "9".to_string()];
/// assert_eq!(resolve_path(&root, &path), None);
/// ```
pub fn resolve_path<'a>(root: &'a Value, components: &[String]) -> Option<&'a str> {
    let mut current = root;
    for component in components {
        match current {
            Value::Object(map) => {
                current = map.get(component.as_str())?;
            }
            Value::Array(items) => {
                let index = component.parse::<usize>().ok()?;
                current = items.get(index)?;
            }
            _ => return None,
        }
    }

    current.as_str()
}

/// Fetch an object field as a string, or `""` when absent or non-string
///
/// Convenience accessor for callers that want a field without
/// distinguishing "missing" from "not a string".
pub fn string_field<'a>(root: &'a Value, key: &str) -> &'a str {
    root.get(key).and_then(Value::as_str).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn path(components: &[&str]) -> Vec<String> {
        components.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_resolve_simple_key() {
        let root = json!({"name": "Jane Doe"});
        assert_eq!(resolve_path(&root, &path(&["name"])), Some("Jane Doe"));
    }

    #[test]
    fn test_resolve_nested_keys() {
        let root = json!({"user": {"profile": {"name": "Jane Doe"}}});
        assert_eq!(
            resolve_path(&root, &path(&["user", "profile", "name"])),
            Some("Jane Doe")
        );
    }

    #[test]
    fn test_resolve_array_index() {
        let root = json!({"list": ["p", "q", "r"]});
        assert_eq!(resolve_path(&root, &path(&["list", "0"])), Some("p"));
        assert_eq!(resolve_path(&root, &path(&["list", "2"])), Some("r"));
    }

    #[test]
    fn test_resolve_missing_key() {
        let root = json!({"name": "Jane"});
        assert_eq!(resolve_path(&root, &path(&["other"])), None);
    }

    #[test]
    fn test_resolve_index_out_of_range() {
        let root = json!({"list": ["p"]});
        assert_eq!(resolve_path(&root, &path(&["list", "5"])), None);
    }

    #[test]
    fn test_resolve_non_numeric_index() {
        let root = json!({"list": ["p", "q"]});
        assert_eq!(resolve_path(&root, &path(&["list", "first"])), None);
        assert_eq!(resolve_path(&root, &path(&["list", "-1"])), None);
        assert_eq!(resolve_path(&root, &path(&["list", " 1"])), None);
        assert_eq!(resolve_path(&root, &path(&["list", ""])), None);
    }

    #[test]
    fn test_resolve_through_scalar() {
        let root = json!({"name": "Jane"});
        assert_eq!(resolve_path(&root, &path(&["name", "first"])), None);
    }

    #[test]
    fn test_resolve_non_string_leaf() {
        let root = json!({
            "count": 42,
            "flag": true,
            "nothing": null,
            "nested": {"a": "b"},
            "items": []
        });
        assert_eq!(resolve_path(&root, &path(&["count"])), None);
        assert_eq!(resolve_path(&root, &path(&["flag"])), None);
        assert_eq!(resolve_path(&root, &path(&["nothing"])), None);
        assert_eq!(resolve_path(&root, &path(&["nested"])), None);
        assert_eq!(resolve_path(&root, &path(&["items"])), None);
    }

    #[test]
    fn test_resolve_empty_path_against_string_root() {
        let root = json!("bare");
        assert_eq!(resolve_path(&root, &[]), Some("bare"));
    }

    #[test]
    fn test_resolve_array_root() {
        let root = json!(["a", "b"]);
        assert_eq!(resolve_path(&root, &path(&["1"])), Some("b"));
    }

    #[test]
    fn test_string_field() {
        let root = json!({"name": "Jane", "age": 30});
        assert_eq!(string_field(&root, "name"), "Jane");
        assert_eq!(string_field(&root, "age"), "");
        assert_eq!(string_field(&root, "missing"), "");
        assert_eq!(string_field(&json!([1, 2]), "name"), "");
    }
}
