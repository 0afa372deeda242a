//! Error handling for json-placeholder
//!
//! This module provides the error type for the fallible source layer.
//! All errors implement the standard `std::error::Error` trait and carry
//! enough context for debugging.
//!
//! # Error Types
//!
//! - [`Error::UnknownTag`] - Command name outside the recognized source tag set
//! - [`Error::EmptyFile`] - A file source exists but contains no data
//! - [`Error::JsonError`] - JSON parsing and serialization errors
//! - [`Error::IoError`] - File system and I/O errors
//!
//! # Usage
//!
//! Only the inner source functions return `Result<T, Error>`; the
//! substitution surface itself is infallible and degrades to returning
//! its input unchanged:
//!
//! ```rust
//! use json_placeholder::{source, Error};
//!
//! match source::load_file("missing.json".as_ref()) {
//!     Ok(root) => println!("Loaded: {}", root),
//!     Err(Error::IoError(err)) => println!("IO error: {}", err),
//!     Err(err) => println!("Other error: {}", err),
//! }
//! ```

use std::borrow::Cow;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for the fallible source-acquisition layer
///
/// Covers the conditions under which a JSON root cannot be produced from
/// a descriptor. The substitution engine never surfaces these to its
/// caller; they are available to callers of the `source` module that
/// want to distinguish why acquisition failed.
#[derive(Error, Debug)]
pub enum Error {
    /// Command name outside the recognized source tag set
    ///
    /// Occurs when a command name is neither an inline-JSON tag nor a
    /// file tag. See [`SourceTag`](crate::SourceTag) for the closed set.
    #[error("Unknown source tag: {0}")]
    UnknownTag(Cow<'static, str>),

    /// A file source exists but contains no data
    ///
    /// An empty file can never hold a JSON document, so it is rejected
    /// before a parse is attempted.
    #[error("Empty source file: {0}")]
    EmptyFile(PathBuf),

    /// JSON parsing and serialization errors
    ///
    /// Automatically converted from `serde_json::Error` when parsing a
    /// descriptor or file, or when serializing a typed value into a root.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// File system and I/O errors
    ///
    /// Automatically converted from `std::io::Error` when file operations fail.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl Error {
    /// Create an unknown-tag error with a static string
    ///
    /// Use this for compile-time known tag names to avoid allocations.
    pub fn unknown_tag_static(tag: &'static str) -> Self {
        Error::UnknownTag(Cow::Borrowed(tag))
    }

    /// Create an unknown-tag error with an owned string
    ///
    /// Use this for tag names only known at runtime.
    pub fn unknown_tag_owned(tag: String) -> Self {
        Error::UnknownTag(Cow::Owned(tag))
    }
}

/// Result type alias for json-placeholder operations
///
/// This is a convenience alias for `Result<T, Error>` used throughout
/// the fallible layer of the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::unknown_tag_static("yaml");
        assert_eq!(err.to_string(), "Unknown source tag: yaml");

        let err = Error::EmptyFile(PathBuf::from("/tmp/empty.json"));
        assert_eq!(err.to_string(), "Empty source file: /tmp/empty.json");
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::JsonError(_)));
    }

    #[test]
    fn test_error_from_io() {
        use std::io;
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::IoError(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_unknown_tag_owned() {
        let err = Error::unknown_tag_owned("json_v2".to_string());
        assert_eq!(err.to_string(), "Unknown source tag: json_v2");
    }
}
