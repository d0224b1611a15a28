use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 递归列出目录下的所有文件和子目录（先序、深度优先）
///
/// The root itself is not included. Directories that cannot be listed
/// (missing, not a directory, unreadable) contribute no children and are
/// not reported as errors; the directory entry itself stays in the list.
pub fn collect_files(dir: impl AsRef<Path>) -> Vec<PathBuf> {
    let dir = dir.as_ref();
    let mut out = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1) {
        match entry {
            Ok(entry) => out.push(entry.into_path()),
            Err(err) => {
                tracing::trace!(
                    path = ?err.path().unwrap_or(dir),
                    error = %err,
                    "skipping unlistable directory"
                );
            }
        }
    }

    out
}
