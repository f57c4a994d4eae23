//! One-shot filesystem walk that builds the [`DiskTree`].

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{AppError, Result};
use crate::fs::tree::DiskTree;

/// Resolve the root argument: default to the working directory, require an
/// existing directory, and canonicalize it.
pub fn resolve_root(arg: Option<PathBuf>) -> Result<PathBuf> {
    let path = match arg {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    let metadata = std::fs::metadata(&path).map_err(|source| AppError::CannotOpen {
        path: path.clone(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(AppError::NotADirectory(path));
    }

    path.canonicalize()
        .map_err(|source| AppError::CannotOpen { path, source })
}

/// Walk `root` and build the complete tree.
///
/// Entries arrive in pre-order with siblings sorted by file name, so every
/// directory is registered before anything inside it. Symlinks are recorded
/// as files and never followed. Any unreadable entry aborts the scan.
pub fn scan(root: &Path) -> Result<DiskTree> {
    tracing::info!(root = %root.display(), "scan started");

    let mut tree = DiskTree::new(root.to_path_buf());
    let mut dirs: u64 = 1;
    let mut files: u64 = 0;

    let walker = WalkDir::new(root).follow_links(false).sort_by_file_name();
    for entry in walker {
        let entry = entry.map_err(|e| AppError::from_walk(root, e))?;
        if entry.depth() == 0 {
            continue;
        }

        if entry.file_type().is_dir() {
            tracing::trace!(path = %entry.path().display(), "directory");
            tree.insert_dir(entry.into_path())?;
            dirs += 1;
        } else {
            let size = entry
                .metadata()
                .map_err(|e| AppError::from_walk(root, e))?
                .len();
            tracing::trace!(path = %entry.path().display(), size, "file");
            tree.insert_file(entry.into_path(), size)?;
            files += 1;
        }
    }

    tracing::info!(
        entries = tree.node_count(),
        dirs,
        files,
        total = tree.node(tree.root()).size(),
        "scan finished"
    );
    Ok(tree)
}
