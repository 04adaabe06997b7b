//! Target classification and the mirrored export tree.

use crate::error::{ResizeError, Result};
use crate::utils::output_file_name;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    File,
    Directory,
    NotFound,
}

/// Classifies `path`, following symlinks.
///
/// Anything that exists but is neither a directory nor a regular file (a
/// socket, a fifo) is treated as a file and left to the decoder to reject.
pub fn classify(path: &Path) -> TargetKind {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => TargetKind::Directory,
        Ok(_) => TargetKind::File,
        Err(_) => TargetKind::NotFound,
    }
}

/// Creates `path` and any missing parents. Existing directories are fine.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| ResizeError::DirectoryCreationFailed {
        path: path.to_path_buf(),
        source,
    })
}

/// Name used for the mirrored copy of `dir`.
///
/// `sprites/` mirrors as `sprites`. Paths without a final component, such as
/// `.` or `..`, use the final component of their canonical form. Returns `None`
/// for the filesystem root.
pub fn mirror_name(dir: &Path) -> Option<OsString> {
    if let Some(name) = dir.file_name() {
        return Some(name.to_os_string());
    }
    dir.canonicalize()
        .ok()
        .and_then(|canonical| canonical.file_name().map(|name| name.to_os_string()))
}

/// Whether `a` and `b` name the same directory, comparing canonical forms.
/// Paths that don't exist never match.
pub fn same_directory(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// A source directory paired with the export directory its images go to.
///
/// The destination directory exists once a mirror has been constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryMirror {
    source: PathBuf,
    destination: PathBuf,
}

impl DirectoryMirror {
    /// Mirrors the target directory as `<export_root>/<name>/`.
    pub fn root(source: &Path, export_root: &Path) -> Result<Self> {
        let destination = match mirror_name(source) {
            Some(name) => export_root.join(name),
            None => export_root.to_path_buf(),
        };
        ensure_dir(&destination)?;

        Ok(Self {
            source: source.to_path_buf(),
            destination,
        })
    }

    /// Mirrors an immediate subdirectory of this mirror's source.
    pub fn child(&self, subdir: &Path) -> Result<Self> {
        let destination = match subdir.file_name() {
            Some(name) => self.destination.join(name),
            None => self.destination.clone(),
        };
        ensure_dir(&destination)?;

        Ok(Self {
            source: subdir.to_path_buf(),
            destination,
        })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// `<destination>/<stem>.png` for a file inside the source directory.
    pub fn destination_for(&self, file: &Path) -> Option<PathBuf> {
        output_file_name(file).map(|name| self.destination.join(name))
    }
}
