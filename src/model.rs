//! The in-memory archive representation.

use crate::error::CafError;

/// Current archive format version written by this crate's emitter.
pub const CURRENT_VERSION: u8 = 1;

/// One entry of an archive's index: either a directory marker or a file
/// marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexEntry {
    /// Sets the current directory used while unpacking, resolved from the
    /// destination root rather than the previously current directory.
    Directory {
        /// Path, possibly containing `/`, relative to the unpack root.
        name: String,
    },
    /// Declares that the next unconsumed file payload belongs under the
    /// current directory with this base name.
    File {
        /// Base name; must not contain `/`.
        name: String,
    },
}

/// A complete, in-memory CAF archive: a version, an ordered index, and the
/// file payloads aligned with the index's `File` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archive {
    pub version: u8,
    pub index: Vec<IndexEntry>,
    pub files: Vec<Vec<u8>>,
}

impl Archive {
    /// Returns the number of `IndexEntry::File` entries in the index.
    pub fn file_entry_count(&self) -> usize {
        self.index
            .iter()
            .filter(|e| matches!(e, IndexEntry::File { .. }))
            .count()
    }
}

/// Validates a directory path as accepted by [`crate::builder::Builder::change_directory`].
///
/// Non-empty; each `/`-separated component must be non-empty, contain no
/// NUL or newline, and not be `.` or `..`.
pub fn validate_directory_path(path: &str) -> Result<(), CafError> {
    if path.is_empty() {
        return Err(invalid(path, "directory path must not be empty"));
    }
    for component in path.split('/') {
        validate_name_component(path, component)?;
    }
    Ok(())
}

/// Validates a file's base name as accepted by [`crate::builder::Builder::add`].
///
/// Non-empty; must not contain `/`, NUL, or newline; must not be `.` or `..`.
pub fn validate_file_name(name: &str) -> Result<(), CafError> {
    if name.contains('/') {
        return Err(invalid(name, "file name must not contain '/'"));
    }
    validate_name_component(name, name)
}

fn validate_name_component(whole: &str, component: &str) -> Result<(), CafError> {
    if component.is_empty() {
        return Err(invalid(whole, "name component must not be empty"));
    }
    if component == "." || component == ".." {
        return Err(invalid(whole, "name component must not be '.' or '..'"));
    }
    if component.contains('\0') {
        return Err(invalid(whole, "name must not contain a NUL byte"));
    }
    if component.contains('\n') {
        return Err(invalid(whole, "name must not contain a newline"));
    }
    Ok(())
}

fn invalid(name: &str, reason: &'static str) -> CafError {
    CafError::InvalidName {
        name: name.to_string(),
        reason,
    }
}
