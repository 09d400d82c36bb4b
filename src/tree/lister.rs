use std::fs;
use std::path::Path;

use crate::error::{Result, TreeError};

use super::entry::DirEntry;
use super::options::SortOrder;

/// List the immediate children of a directory.
///
/// Any listing or metadata failure is attributed to the path it occurred
/// on and aborts the listing; there is no skip-and-continue.
pub fn list_children(path: &Path, sort: SortOrder) -> Result<Vec<DirEntry>> {
    let read_dir = fs::read_dir(path).map_err(|e| TreeError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut children = Vec::new();
    for result in read_dir {
        let entry = result.map_err(|e| TreeError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let metadata = entry.metadata().map_err(|e| TreeError::Io {
            path: entry.path(),
            source: e,
        })?;

        let name = entry.file_name().to_string_lossy().into_owned();
        let child = if metadata.is_dir() {
            DirEntry::new_dir(name)
        } else {
            DirEntry::new_file(name, metadata.len())
        };

        children.push(child);
    }

    if sort == SortOrder::Name {
        children.sort_by(|a, b| a.name.cmp(&b.name));
    }

    Ok(children)
}
