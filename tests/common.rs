// 公共测试辅助函数

#![allow(dead_code)]

use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// 创建临时测试目录
pub fn test_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// 在 `root` 下按 `相对路径 -> 内容` 创建文件（自动创建父目录）
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
    fs::create_dir_all(root).unwrap();
    for (rel, content) in files {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
    }
}

/// 读取 ZIP 中的全部条目（按名称排序）
pub fn read_entries(zipfile: &Path) -> Vec<(String, String)> {
    let mut archive = zip::ZipArchive::new(File::open(zipfile).unwrap()).unwrap();
    let mut out = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).unwrap();
        let mut content = String::new();
        entry.read_to_string(&mut content).unwrap();
        out.push((entry.name().to_string(), content));
    }
    out.sort();
    out
}

/// 条目名列表（排序后用换行连接），用于快照
pub fn format_entry_names(zipfile: &Path) -> String {
    read_entries(zipfile)
        .into_iter()
        .map(|(name, _)| name)
        .collect::<Vec<_>>()
        .join("\n")
}

/// 目录下所有普通文件的相对路径（'/' 分隔，排序）
pub fn list_files_recursive(root: &Path) -> Vec<String> {
    let mut entries = Vec::new();
    collect_file_entries(root, root, &mut entries);
    entries.sort();
    entries
}

fn collect_file_entries(root: &Path, dir: &Path, entries: &mut Vec<String>) {
    if let Ok(read_dir) = fs::read_dir(dir) {
        for entry in read_dir.flatten() {
            let path = entry.path();
            if path.is_dir() {
                collect_file_entries(root, &path, entries);
            } else if let Ok(relative) = path.strip_prefix(root) {
                entries.push(relative.to_string_lossy().replace('\\', "/"));
            }
        }
    }
}

/// `<dir>.zip`
pub fn zip_path_for(dir: &Path) -> PathBuf {
    let mut name = dir.as_os_str().to_owned();
    name.push(".zip");
    PathBuf::from(name)
}
