use crate::archive::entry::relative_entry_name;
use crate::archive::walk::collect_files;
use crate::archive::writer::open_source;
use crate::archive::ArchiveWriter;
use crate::error::{ArchiveError, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Archiver options.
#[derive(Debug, Clone)]
pub struct ArchiverOptions {
    pub preserve_metadata: bool,
}

impl Default for ArchiverOptions {
    fn default() -> Self {
        Self {
            preserve_metadata: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ArchiveOutput {
    pub archive: PathBuf,
    /// Entry names in the order they were written
    pub entries: Vec<String>,
}

/// 把一个目录打包为同级的 `<目录>.zip`
pub struct DirectoryArchiver {
    source: PathBuf,
    options: ArchiverOptions,
}

impl DirectoryArchiver {
    pub fn new(source: impl AsRef<Path>) -> Self {
        Self {
            source: source.as_ref().to_path_buf(),
            options: ArchiverOptions::default(),
        }
    }

    pub fn preserve_metadata(mut self, preserve: bool) -> Self {
        self.options.preserve_metadata = preserve;
        self
    }

    /// 输出 ZIP 文件路径：源目录路径加上 `.zip`
    ///
    /// Trailing separators are dropped first, so `root/` maps to `root.zip`.
    pub fn archive_path(&self) -> PathBuf {
        let mut name = OsString::from(self.source.components().as_path().as_os_str());
        name.push(".zip");
        PathBuf::from(name)
    }

    pub fn build(self) -> Result<ArchiveOutput> {
        let archive = self.archive_path();

        // 先完成遍历，再创建输出文件，避免把输出文件本身列进去
        let files = collect_files(&self.source);

        let entries = match self.write_archive(&archive, &files) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::error!(
                    archive = %archive.display(),
                    phase = %err.phase(),
                    error = %err,
                    "archive generation failed"
                );
                return Err(err);
            }
        };

        tracing::debug!(
            archive = %archive.display(),
            entries = entries.len(),
            "archive generated successfully"
        );

        Ok(ArchiveOutput { archive, entries })
    }

    fn write_archive(&self, archive: &Path, files: &[PathBuf]) -> Result<Vec<String>> {
        let mut writer = ArchiveWriter::create(archive, self.options.preserve_metadata)?;

        let regular: Vec<&PathBuf> = files.iter().filter(|f| !f.is_dir()).collect();
        let mut entries = Vec::with_capacity(regular.len());

        // 只有存在待写文件时才需要 root 的规范路径
        if !regular.is_empty() {
            let root = fs::canonicalize(&self.source)
                .map_err(|e| ArchiveError::canonicalize(&self.source, e))?;

            for file in regular {
                // 先打开源文件，再计算条目名
                let input = open_source(file)?;
                let name = relative_entry_name(&root, file)?;
                writer.add_opened(&name, file, input)?;
                entries.push(name);
            }
        }

        writer.finish()?;
        Ok(entries)
    }
}
