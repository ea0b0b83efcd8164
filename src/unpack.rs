//! Materializes an [`Archive`] to the filesystem.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::model::{Archive, IndexEntry};

/// Walks `archive`'s index left-to-right, creating directories and writing
/// files beneath `dest`.
///
/// Directory paths are always resolved from `dest`, never from the
/// previously current directory. A file write that would overwrite an
/// existing path is skipped (the payload is still consumed from the
/// archive) rather than treated as an error.
pub fn unpack(archive: &Archive, dest: &Path) -> io::Result<()> {
    fs::create_dir_all(dest)?;

    let mut current_dir: PathBuf = dest.to_path_buf();
    let mut files = archive.files.iter();

    for entry in &archive.index {
        match entry {
            IndexEntry::Directory { name } => {
                let target = dest.join(name);
                log::debug!("creating directory {}", target.display());
                fs::create_dir_all(&target)?;
                current_dir = target;
            }
            IndexEntry::File { name } => {
                let data = files
                    .next()
                    .expect("index file-entry count must match files.len()");
                let target = current_dir.join(name);
                match fs::File::create_new(&target) {
                    Ok(mut f) => {
                        use std::io::Write;
                        f.write_all(data)?;
                    }
                    Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                        log::warn!("skipping {}: already exists", target.display());
                    }
                    Err(e) => return Err(e),
                }
            }
        }
    }

    Ok(())
}
