//! ZIP 输出流
//!
//! Wraps `zip::ZipWriter` around the output file. The writer owns the file
//! handle; dropping it on an error path closes the file and lets the `zip`
//! crate finalise what it can, ignoring any further error.

use crate::error::{ArchiveError, Result};
use std::fs::{File, Metadata};
use std::io;
use std::path::{Path, PathBuf};
use time::{OffsetDateTime, UtcOffset};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

pub struct ArchiveWriter {
    /// ZIP 文件路径
    path: PathBuf,
    inner: ZipWriter<File>,
    /// 是否写入 mtime 和权限
    preserve_metadata: bool,
}

impl ArchiveWriter {
    /// 创建（或截断）输出文件
    pub fn create(path: impl AsRef<Path>, preserve_metadata: bool) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let file = File::create(&path).map_err(|e| ArchiveError::CreateArchive {
            archive: path.clone(),
            source: e,
        })?;

        Ok(Self {
            path,
            inner: ZipWriter::new(file),
            preserve_metadata,
        })
    }

    /// 把一个源文件写成新的条目
    pub fn add_file(&mut self, name: &str, file: &Path) -> Result<()> {
        let input = open_source(file)?;
        self.add_opened(name, file, input)
    }

    /// 写入已经打开的源文件；`input` 在返回时关闭
    pub fn add_opened(&mut self, name: &str, file: &Path, mut input: File) -> Result<()> {
        let mut options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        if self.preserve_metadata {
            if let Ok(metadata) = input.metadata() {
                options = apply_metadata(options, &metadata);
            }
        }

        self.inner
            .start_file(name, options)
            .map_err(|e| ArchiveError::StartEntry {
                name: name.to_string(),
                source: e,
            })?;

        let copied = io::copy(&mut input, &mut self.inner).map_err(|e| ArchiveError::CopyFile {
            path: file.to_path_buf(),
            name: name.to_string(),
            source: e,
        })?;

        tracing::trace!(entry = name, bytes = copied, "added entry");
        Ok(())
    }

    /// 写入中央目录并关闭文件
    pub fn finish(self) -> Result<PathBuf> {
        let Self { path, inner, .. } = self;
        match inner.finish() {
            Ok(_file) => Ok(path),
            Err(e) => Err(ArchiveError::Finish {
                archive: path,
                source: e,
            }),
        }
    }
}

/// 打开源文件用于读取
pub fn open_source(file: &Path) -> Result<File> {
    File::open(file).map_err(|e| ArchiveError::open_file(file, e))
}

fn apply_metadata(mut options: SimpleFileOptions, metadata: &Metadata) -> SimpleFileOptions {
    if let Some(mtime) = metadata.modified().ok().and_then(dos_datetime) {
        options = options.last_modified_time(mtime);
    }

    #[cfg(unix)]
    {
        options = options.unix_permissions(metadata.permissions().mode() & 0o777);
    }

    options
}

/// 把文件修改时间转换为 DOS 时间（本地时区）
///
/// Returns `None` for times outside the DOS range (1980-2107).
fn dos_datetime(mtime: std::time::SystemTime) -> Option<DateTime> {
    let utc = OffsetDateTime::from(mtime);
    let local = UtcOffset::current_local_offset()
        .map(|offset| utc.to_offset(offset))
        .unwrap_or(utc);

    let year = u16::try_from(local.year()).ok()?;
    DateTime::from_date_and_time(
        year,
        u8::from(local.month()),
        local.day(),
        local.hour(),
        local.minute(),
        local.second(),
    )
    .ok()
}
