//! Core types for placeholder substitution
//!
//! This module contains the fundamental types used throughout the library.
//!
//! # Key Types
//!
//! - [`SourceTag`] - The closed set of recognized command names
//! - [`PlaceholderToken`] - A located placeholder span with its path components
//!
//! # Usage
//!
//! Command names double as both the source-kind selector and the opening
//! marker of the token grammar. `{json(a,b)}` is scanned with the command
//! name `json`, which also marks the descriptor as inline JSON text:
//!
//! ```rust
//! use json_placeholder::SourceTag;
//!
//! let tag = SourceTag::from_name("json_file").unwrap();
//! assert!(tag.is_file());
//! assert_eq!(tag.name(), "json_file");
//! ```

/// The closed set of recognized command names
///
/// A command name selects how the descriptor string is interpreted when
/// acquiring a JSON root: inline tags parse the descriptor itself as
/// JSON text, file tags treat it as a filesystem path. Any name outside
/// this set never produces a source.
///
/// The `_source` aliases accept the same descriptors as their short
/// forms; both spellings appear in existing command text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceTag {
    /// Inline JSON text (`json`)
    Json,
    /// Inline JSON text (`json_source`)
    JsonSource,
    /// Path to a JSON file (`json_file`)
    JsonFile,
    /// Path to a JSON file (`json_file_source`)
    JsonFileSource,
}

impl SourceTag {
    /// Look up a command name in the recognized set
    ///
    /// Returns `None` for any unrecognized name; callers treat that as
    /// "no source" rather than an error.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "json" => Some(SourceTag::Json),
            "json_source" => Some(SourceTag::JsonSource),
            "json_file" => Some(SourceTag::JsonFile),
            "json_file_source" => Some(SourceTag::JsonFileSource),
            _ => None,
        }
    }

    /// The wire name of this tag as it appears in command text
    pub fn name(&self) -> &'static str {
        match self {
            SourceTag::Json => "json",
            SourceTag::JsonSource => "json_source",
            SourceTag::JsonFile => "json_file",
            SourceTag::JsonFileSource => "json_file_source",
        }
    }

    /// Whether descriptors for this tag name a file rather than inline text
    pub fn is_file(&self) -> bool {
        matches!(self, SourceTag::JsonFile | SourceTag::JsonFileSource)
    }
}

/// A located placeholder token within an input string
///
/// Offsets are byte positions into the input the token was scanned from.
/// `start` points at the opening `{`, `end` is exclusive and points just
/// past the closing `)}`. The engine never mutates a buffer in place, so
/// spans stay valid for the lifetime of the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderToken {
    /// Byte offset of the opening `{`
    pub start: usize,
    /// Byte offset just past the closing `)}`
    pub end: usize,
    /// Comma-separated path components, in order, untrimmed
    ///
    /// Always non-empty: a token with no commas yields one component,
    /// and `{json()}` yields a single empty component, which fails
    /// resolution naturally.
    pub components: Vec<String>,
}

impl PlaceholderToken {
    /// The token's span as a half-open byte range
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}
