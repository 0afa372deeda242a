//! The substitution engine
//!
//! This module drives the scanner and resolver: acquire one JSON root
//! per call, then find, resolve, and replace every matching token. The
//! output is assembled from segments of the immutable input rather than
//! by editing a buffer in place, so token offsets never shift and the
//! scan cursor only ever moves forward.

use std::borrow::Cow;

use serde_json::Value;

use crate::resolve::resolve_path;
use crate::scanner::TokenScanner;
use crate::source;

/// Substitute every resolvable placeholder in `template`
///
/// Acquires a JSON root from `(command_name, descriptor)` and replaces
/// each `{<command_name>(path,...)}` token whose path resolves to a
/// string leaf. Unresolved tokens pass through verbatim, and if no
/// source can be acquired the template is returned unchanged without
/// scanning.
///
/// The root is local to this call and dropped on return; concurrent
/// calls each acquire their own.
///
/// # Examples
///
/// ```rust
/// use json_placeholder::substitute;
///
/// let out = substitute("host={json(net,host)}", "json",
///     r#"{"net":{"host":"example.com"}}"#);
/// assert_eq!(out, "host=example.com");
/// ```
pub fn substitute<'a>(template: &'a str, command_name: &str, descriptor: &str) -> Cow<'a, str> {
    match source::acquire(command_name, descriptor) {
        Some(root) => substitute_with_root(template, command_name, &root),
        None => Cow::Borrowed(template),
    }
}

/// Substitute placeholders against an already-acquired JSON root
///
/// The scan walks the input left to right: text before each token is
/// copied through, a resolved token is replaced by its string value, an
/// unresolved one is copied verbatim, and the cursor continues at the
/// token's end offset. Replacement text is appended to the output and
/// never re-scanned, so a resolved value containing token syntax stays
/// literal. Returns `Cow::Borrowed` when nothing was replaced.
pub fn substitute_with_root<'a>(
    template: &'a str,
    command_name: &str,
    root: &Value,
) -> Cow<'a, str> {
    let scanner = TokenScanner::new(template, command_name);
    let mut output = String::new();
    let mut cursor = 0;
    let mut replaced = false;

    while let Some(token) = scanner.next_token(cursor) {
        match resolve_path(root, &token.components) {
            Some(value) => {
                output.push_str(&template[cursor..token.start]);
                output.push_str(value);
                replaced = true;
            }
            None => output.push_str(&template[cursor..token.end]),
        }
        cursor = token.end;
    }

    if !replaced {
        return Cow::Borrowed(template);
    }

    output.push_str(&template[cursor..]);
    Cow::Owned(output)
}
