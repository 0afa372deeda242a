//! JSON source acquisition
//!
//! This module produces the JSON root a substitution call resolves
//! against. A root comes from either inline JSON text or a JSON file,
//! selected by the command name; see [`SourceTag`](crate::SourceTag).
//!
//! The inner functions ([`try_acquire`], [`parse_inline`], [`load_file`],
//! [`to_root`]) are fallible and return [`Result`]. [`acquire`] is the
//! engine-facing entry point: it collapses every failure to `None` so that a bad
//! descriptor degrades to "no substitution" rather than an error. A
//! `debug!` diagnostic records why acquisition failed, and never alters
//! control flow.

use std::fs;
use std::path::Path;

use log::debug;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::types::SourceTag;

/// Acquire a JSON root for a command name and descriptor
///
/// Inline tags parse `descriptor` as JSON text; file tags parse the
/// file at `descriptor`. An unknown command name, malformed JSON, or a
/// missing/empty/unreadable file all yield `None`.
///
/// The returned root is owned by the caller and lives for one
/// substitution call; nothing is cached across calls.
pub fn acquire(command_name: &str, descriptor: &str) -> Option<Value> {
    match try_acquire(command_name, descriptor) {
        Ok(root) => Some(root),
        Err(err) => {
            debug!("no JSON source for command {:?}: {}", command_name, err);
            None
        }
    }
}

/// Fallible variant of [`acquire`]
///
/// Same dispatch, but reports why acquisition failed instead of
/// collapsing to `None`.
pub fn try_acquire(command_name: &str, descriptor: &str) -> Result<Value> {
    let tag = SourceTag::from_name(command_name)
        .ok_or_else(|| Error::unknown_tag_owned(command_name.to_string()))?;

    if tag.is_file() {
        load_file(Path::new(descriptor))
    } else {
        parse_inline(descriptor)
    }
}

/// Parse inline JSON text into a root value
pub fn parse_inline(text: &str) -> Result<Value> {
    Ok(serde_json::from_str(text)?)
}

/// Load and parse a JSON file
///
/// An empty file is rejected before parsing, since it can never hold a
/// JSON document.
pub fn load_file(path: &Path) -> Result<Value> {
    let metadata = fs::metadata(path)?;
    if metadata.len() == 0 {
        return Err(Error::EmptyFile(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Convert any serializable value into a JSON root
///
/// Lets typed Rust data act as a substitution source via
/// [`substitute_with_root`](crate::substitute_with_root) without going
/// through a JSON string.
pub fn to_root<T: Serialize>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}
