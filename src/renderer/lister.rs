use std::fs;
use std::path::Path;

use crate::error::{Result, SnapError};

use super::entry::{Entry, EntryKind};

/// Capability interface over the filesystem listing source.
///
/// The renderer is a pure function of whatever a lister reports, which
/// lets tests drive it with synthetic in-memory trees instead of the
/// real filesystem.
pub trait DirectoryLister {
    /// Direct children of `path`. Order is unspecified; the renderer
    /// sorts. Any failure aborts the whole render.
    fn list(&self, path: &Path) -> Result<Vec<Entry>>;
}

/// Production lister over `std::fs::read_dir`.
///
/// Entries are classified by their own file type, without following
/// symbolic links: a symlink shows up as a file and is never recursed
/// into. Children that are neither a regular file nor a directory
/// (sockets, FIFOs) are omitted from the listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl DirectoryLister for FsLister {
    fn list(&self, path: &Path) -> Result<Vec<Entry>> {
        let read_dir = fs::read_dir(path).map_err(|e| SnapError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut entries = Vec::new();
        for item in read_dir {
            let item = item.map_err(|e| SnapError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;
            let file_type = item.file_type().map_err(|e| SnapError::Io {
                path: item.path(),
                source: e,
            })?;

            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else if file_type.is_file() || file_type.is_symlink() {
                EntryKind::File
            } else {
                continue;
            };

            entries.push(Entry {
                name: item.file_name().to_string_lossy().into_owned(),
                kind,
            });
        }

        Ok(entries)
    }
}
