//! dirzip - 目录打包库
//!
//! 把一个目录树递归写入同级的单个 ZIP 文件。
//!
//! ## 功能
//!
//! - 先序、深度优先遍历目录
//! - 条目名为相对源目录的路径，统一使用 `/` 分隔
//! - DEFLATE 压缩，保留修改时间和 Unix 权限
//! - 单一错误类型 [`ArchiveError`]
//!
//! ## 示例
//!
//! ```no_run
//! // 生成 export.zip
//! dirzip::archive_directory("export").unwrap();
//! ```
//!
//! Logging goes through `tracing`; install a subscriber to see it.

pub mod archive;
pub mod error;

// 重导出常用类型
pub use archive::{
    collect_files, entry_name, ArchiveOutput, ArchiveWriter, ArchiverOptions, DirectoryArchiver,
    ENTRY_SEPARATOR,
};
pub use error::{ArchiveError, ArchivePhase, Result};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 把目录打包为 `<source>.zip`（便捷函数）
///
/// A missing or non-directory `source` produces an empty archive rather
/// than an error.
///
/// # 示例
///
/// ```no_run
/// dirzip::archive_directory("/tmp/export").unwrap();
/// assert!(std::path::Path::new("/tmp/export.zip").exists());
/// ```
pub fn archive_directory(source: impl AsRef<std::path::Path>) -> Result<()> {
    DirectoryArchiver::new(source).build()?;
    Ok(())
}
