//! Filesystem access used by the lister.
//!
//! Everything the listing asks of the operating system, apart from identity
//! lookups, goes through `FileSystem`. The lister itself never branches on the
//! platform.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use crate::entry::EntryMetadata;
use crate::error::{Error, Result};

pub trait FileSystem {
    /// Names of the immediate children of `path`.
    ///
    /// Fails with `EntryNotFound`, `NotADirectory` or `CannotOpenDirectory`
    /// depending on why the directory could not be read, and with
    /// `AllocationFailure` when the name buffer cannot grow.
    fn read_entry_names(&self, path: &Path) -> Result<Vec<OsString>>;

    /// Metadata of `path` itself; symlinks are not followed.
    fn metadata(&self, path: &Path) -> io::Result<EntryMetadata>;

    fn absolute_path(&self, path: &Path) -> io::Result<PathBuf>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn read_entry_names(&self, path: &Path) -> Result<Vec<OsString>> {
        (**self).read_entry_names(path)
    }

    fn metadata(&self, path: &Path) -> io::Result<EntryMetadata> {
        (**self).metadata(path)
    }

    fn absolute_path(&self, path: &Path) -> io::Result<PathBuf> {
        (**self).absolute_path(path)
    }
}

#[cfg(unix)]
#[derive(Debug, Default, Clone, Copy)]
pub struct UnixFileSystem;

#[cfg(unix)]
impl UnixFileSystem {
    fn classify_open_failure(path: &Path, error: &io::Error) -> Error {
        log::debug!("could not read {:?}: {}", path, error);
        match std::fs::metadata(path) {
            Err(_) => Error::EntryNotFound(path.to_path_buf()),
            Ok(metadata) if !metadata.is_dir() => Error::NotADirectory(path.to_path_buf()),
            Ok(_) => Error::CannotOpenDirectory(path.to_path_buf()),
        }
    }
}

#[cfg(unix)]
impl FileSystem for UnixFileSystem {
    fn read_entry_names(&self, path: &Path) -> Result<Vec<OsString>> {
        let entries = match std::fs::read_dir(path) {
            Ok(entries) => entries,
            Err(err) => return Err(Self::classify_open_failure(path, &err)),
        };
        let mut names = Vec::new();
        for entry in entries {
            match entry {
                Ok(entry) => {
                    names.try_reserve(1)?;
                    names.push(entry.file_name());
                }
                Err(err) => return Err(Self::classify_open_failure(path, &err)),
            }
        }
        Ok(names)
    }

    fn metadata(&self, path: &Path) -> io::Result<EntryMetadata> {
        use std::os::unix::fs::MetadataExt;

        let metadata = std::fs::symlink_metadata(path)?;
        Ok(EntryMetadata {
            size: metadata.size(),
            mode: metadata.mode(),
            owner_id: metadata.uid(),
            group_id: metadata.gid(),
            modified: metadata.mtime(),
        })
    }

    fn absolute_path(&self, path: &Path) -> io::Result<PathBuf> {
        std::fs::canonicalize(path)
    }
}
