//! Error types for dirzip
//!
//! Every failure while producing an archive is reported as one
//! [`ArchiveError`]. The variant records where it happened and keeps the
//! underlying cause reachable through [`std::error::Error::source`].

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Stage of the archive operation an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchivePhase {
    /// Creating or finalising the archive itself
    AddingFiles,
    /// Turning one source file into an archive entry
    WritingFiles,
}

impl ArchivePhase {
    pub fn message(self) -> &'static str {
        match self {
            ArchivePhase::AddingFiles => "I/O error while adding files to archive",
            ArchivePhase::WritingFiles => "I/O error while writing files to archive",
        }
    }
}

impl fmt::Display for ArchivePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Main error type for dirzip
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// Output file could not be created
    #[error("I/O error while adding files to archive: cannot create '{archive}': {source}")]
    CreateArchive {
        archive: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Source file could not be opened
    #[error("I/O error while writing files to archive: cannot open '{path}': {source}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Canonical path could not be resolved
    #[error("I/O error while writing files to archive: cannot resolve '{path}': {source}")]
    Canonicalize {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Canonical file path does not lie below the traversal root
    #[error("I/O error while writing files to archive: '{path}' is not inside '{root}'")]
    OutsideRoot { path: PathBuf, root: PathBuf },

    /// Relative path cannot be stored as a UTF-8 entry name
    #[error("I/O error while writing files to archive: '{path}' is not a valid entry name")]
    InvalidEntryName { path: PathBuf },

    /// Entry header could not be written
    #[error("I/O error while writing files to archive: cannot start entry '{name}': {source}")]
    StartEntry {
        name: String,
        #[source]
        source: zip::result::ZipError,
    },

    /// File contents could not be copied into the entry
    #[error("I/O error while writing files to archive: cannot copy '{path}' into '{name}': {source}")]
    CopyFile {
        path: PathBuf,
        name: String,
        #[source]
        source: io::Error,
    },

    /// Central directory could not be written
    #[error("I/O error while adding files to archive: cannot finish '{archive}': {source}")]
    Finish {
        archive: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
}

impl ArchiveError {
    pub fn phase(&self) -> ArchivePhase {
        match self {
            ArchiveError::CreateArchive { .. } | ArchiveError::Finish { .. } => {
                ArchivePhase::AddingFiles
            }
            ArchiveError::OpenFile { .. }
            | ArchiveError::Canonicalize { .. }
            | ArchiveError::OutsideRoot { .. }
            | ArchiveError::InvalidEntryName { .. }
            | ArchiveError::StartEntry { .. }
            | ArchiveError::CopyFile { .. } => ArchivePhase::WritingFiles,
        }
    }

    /// Create a file open error
    pub fn open_file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ArchiveError::OpenFile {
            path: path.into(),
            source,
        }
    }

    /// Create a canonicalize error
    pub fn canonicalize(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ArchiveError::Canonicalize {
            path: path.into(),
            source,
        }
    }

    /// Create an outside-root error
    pub fn outside_root(path: impl Into<PathBuf>, root: impl Into<PathBuf>) -> Self {
        ArchiveError::OutsideRoot {
            path: path.into(),
            root: root.into(),
        }
    }
}

/// Result type for dirzip operations
pub type Result<T> = std::result::Result<T, ArchiveError>;
