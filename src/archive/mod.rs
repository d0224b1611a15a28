//! Directory archiving.

pub mod builder;
pub mod entry;
pub mod walk;
pub mod writer;

pub use builder::{ArchiveOutput, ArchiverOptions, DirectoryArchiver};
pub use entry::{entry_name, ENTRY_SEPARATOR};
pub use walk::collect_files;
pub use writer::ArchiveWriter;
