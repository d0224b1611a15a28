use crate::error::{ArchiveError, Result};
use std::fs;
use std::path::{Component, Path};

/// ZIP 格式规定的路径分隔符
pub const ENTRY_SEPARATOR: char = '/';

/// 计算文件在归档中的条目名
///
/// Both paths are canonicalized first, so the name is relative to the
/// resolved root regardless of how `root` was spelled. A file that resolves
/// outside the root (for example through a symlink) is an error.
pub fn entry_name(root: &Path, file: &Path) -> Result<String> {
    let canonical_root =
        fs::canonicalize(root).map_err(|e| ArchiveError::canonicalize(root, e))?;
    relative_entry_name(&canonical_root, file)
}

/// Same as [`entry_name`] for a root that is already canonical.
pub(crate) fn relative_entry_name(canonical_root: &Path, file: &Path) -> Result<String> {
    let canonical_file =
        fs::canonicalize(file).map_err(|e| ArchiveError::canonicalize(file, e))?;

    let rel = canonical_file
        .strip_prefix(canonical_root)
        .map_err(|_| ArchiveError::outside_root(&canonical_file, canonical_root))?;

    join_components(rel).ok_or_else(|| {
        if rel.as_os_str().is_empty() {
            ArchiveError::outside_root(&canonical_file, canonical_root)
        } else {
            ArchiveError::InvalidEntryName {
                path: canonical_file.clone(),
            }
        }
    })
}

/// 用 '/' 连接相对路径的各个部分
///
/// Returns `None` for an empty path or a component that is not UTF-8.
fn join_components(rel: &Path) -> Option<String> {
    let mut key = String::new();
    for component in rel.components() {
        let Component::Normal(part) = component else {
            return None;
        };
        if !key.is_empty() {
            key.push(ENTRY_SEPARATOR);
        }
        key.push_str(part.to_str()?);
    }
    (!key.is_empty()).then_some(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_nested_name_uses_slash() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        let file = nested.join("c.txt");
        fs::write(&file, "c").unwrap();

        assert_eq!(entry_name(tmp.path(), &file).unwrap(), "a/b/c.txt");
    }

    #[test]
    fn test_root_spelled_with_dot_segments() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        let file = tmp.path().join("f.txt");
        fs::write(&file, "f").unwrap();

        let root = tmp.path().join("sub").join("..");
        assert_eq!(entry_name(&root, &file).unwrap(), "f.txt");
    }

    #[test]
    fn test_file_outside_root() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("root");
        fs::create_dir(&root).unwrap();
        let outside = tmp.path().join("outside.txt");
        fs::write(&outside, "x").unwrap();

        let err = entry_name(&root, &outside).unwrap_err();
        assert!(matches!(err, ArchiveError::OutsideRoot { .. }));
    }

    #[test]
    fn test_root_itself_has_no_name() {
        let tmp = TempDir::new().unwrap();
        let err = entry_name(tmp.path(), tmp.path()).unwrap_err();
        assert!(matches!(err, ArchiveError::OutsideRoot { .. }));
    }

    #[test]
    fn test_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = entry_name(tmp.path(), &tmp.path().join("nope")).unwrap_err();
        assert!(matches!(err, ArchiveError::Canonicalize { .. }));
    }

    #[test]
    fn test_join_components() {
        assert_eq!(
            join_components(&PathBuf::from("x").join("y").join("z")),
            Some("x/y/z".to_string())
        );
        assert_eq!(join_components(Path::new("")), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_component() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let rel = Path::new(OsStr::from_bytes(b"bad\xffname"));
        assert_eq!(join_components(rel), None);
    }
}
