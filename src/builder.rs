//! The mutable assembly phase that accumulates index entries and file
//! payloads before producing a finished [`Archive`].

use std::fs;
use std::path::Path;

use crate::error::CafError;
use crate::model::{self, Archive, IndexEntry, CURRENT_VERSION};

/// Accumulates directory-change markers and file payloads in order, then
/// transfers ownership of both into a completed [`Archive`].
#[derive(Debug, Default)]
pub struct Builder {
    index: Vec<IndexEntry>,
    files: Vec<Vec<u8>>,
}

impl Builder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Builder::default()
    }

    /// Appends a directory marker. `path` is validated: non-empty, each
    /// `/`-separated component non-empty, free of NUL/newline, and not `.`
    /// or `..`.
    pub fn change_directory(&mut self, path: &str) -> Result<(), CafError> {
        model::validate_directory_path(path)?;
        self.index.push(IndexEntry::Directory {
            name: path.to_string(),
        });
        Ok(())
    }

    /// Appends a file marker and its payload. `name` must not contain `/`.
    pub fn add(&mut self, name: &str, data: Vec<u8>) -> Result<(), CafError> {
        model::validate_file_name(name)?;
        self.index.push(IndexEntry::File {
            name: name.to_string(),
        });
        self.files.push(data);
        Ok(())
    }

    /// Recursively ingests a directory tree rooted at `dir`, optionally
    /// under `prefix` (the destination path the directory should be placed
    /// at when the archive is later unpacked).
    ///
    /// Within one directory, all files precede all subdirectories in the
    /// index; the traversal is depth-first, files before subdirectories.
    /// Iteration order of siblings within each group follows whatever
    /// [`std::fs::read_dir`] yields and is otherwise unconstrained.
    pub fn add_directory_tree(&mut self, dir: &Path, prefix: Option<&str>) -> Result<(), CafError> {
        if let Some(prefix) = prefix {
            self.change_directory(prefix)?;
        }

        let mut files = Vec::new();
        let mut subdirs = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            if file_type.is_file() {
                files.push(entry.file_name());
            } else if file_type.is_dir() {
                subdirs.push(entry.file_name());
            }
            // Anything else (symlinks, sockets, ...) is ignored.
        }

        for name in &files {
            let name = name.to_string_lossy().into_owned();
            log::trace!("archiving file {name}");
            let contents = fs::read(dir.join(&name))?;
            self.add(&name, contents)?;
        }

        for name in subdirs {
            let name = name.to_string_lossy().into_owned();
            let child_prefix = match prefix {
                Some(p) => format!("{p}/{name}"),
                None => name.clone(),
            };
            log::debug!("entering directory {child_prefix}");
            self.add_directory_tree(&dir.join(&name), Some(&child_prefix))?;
        }

        Ok(())
    }

    /// Transfers ownership of the accumulated index and files into a
    /// completed archive with `version = 1`.
    pub fn finish(self) -> Archive {
        Archive {
            version: CURRENT_VERSION,
            index: self.index,
            files: self.files,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_validates_names() {
        let mut b = Builder::new();
        assert!(b.change_directory("").is_err());
        assert!(b.add("has/slash", vec![]).is_err());
        assert!(b.add("ok.txt", vec![1, 2, 3]).is_ok());
        let archive = b.finish();
        assert_eq!(archive.files, vec![vec![1, 2, 3]]);
    }

    #[test]
    fn invalid_entries_are_not_appended() {
        let mut b = Builder::new();
        assert!(b.add("..", vec![]).is_err());
        let archive = b.finish();
        assert!(archive.index.is_empty());
        assert!(archive.files.is_empty());
    }

    #[test]
    fn directory_tree_orders_files_before_subdirs() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), b"b").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("c.txt"), b"c").unwrap();
        fs::write(dir.path().join("a.txt"), b"a").unwrap();

        let mut b = Builder::new();
        b.add_directory_tree(dir.path(), None).unwrap();
        let archive = b.finish();

        let kinds: Vec<&str> = archive
            .index
            .iter()
            .map(|e| match e {
                IndexEntry::Directory { .. } => "dir",
                IndexEntry::File { .. } => "file",
            })
            .collect();
        // Two top-level files, then a directory marker, then the nested file.
        assert_eq!(kinds, vec!["file", "file", "dir", "file"]);
        assert_eq!(archive.files.len(), 3);
    }
}
