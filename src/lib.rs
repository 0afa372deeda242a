//! Placeholder substitution against JSON sources
//!
//! This crate resolves textual placeholder tokens of the form
//! `{command(path,path,...)}` embedded in arbitrary strings against a
//! JSON document, replacing each token in place with the string value
//! found by following the comma-separated path into the document. It
//! lets configuration and command text reference values pulled from an
//! inline or file-backed JSON source at evaluation time.
//!
//! Substitution is best-effort: a token whose path does not resolve to
//! a string leaf passes through unchanged, an opening marker with no
//! closing `)}` ends the scan with the remainder left verbatim, and a
//! descriptor that fails to produce a JSON source returns the template
//! untouched. The caller never sees an error from the substitution
//! surface.
//!
//! # Examples
//!
//! ```rust
//! use json_placeholder::substitute;
//!
//! let template = "connect {json(hosts,0)}:{json(port)}";
//! let descriptor = r#"{"hosts":["alpha","beta"],"port":"9090"}"#;
//!
//! let out = substitute(template, "json", descriptor);
//! assert_eq!(out, "connect alpha:9090");
//! ```
//!
//! With a file-backed source the command name selects the file variant:
//!
//! ```rust,no_run
//! use json_placeholder::substitute;
//!
//! let out = substitute("user={json_file(owner,name)}", "json_file", "/etc/app/meta.json");
//! ```

pub mod engine;
pub mod error;
pub mod resolve;
pub mod scanner;
pub mod source;
pub mod types;

// Re-export commonly used types
pub use engine::{substitute, substitute_with_root};
pub use error::{Error, Result};
pub use resolve::{resolve_path, string_field};
pub use scanner::TokenScanner;
pub use types::{PlaceholderToken, SourceTag};
