use std::path::PathBuf;

use thiserror::Error;

use crate::vfs::EntryType;

/// Errors reported by navigation over the virtual file system.
/// None of them is fatal; the current working directory is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsError {
    /// The path does not exist or is not a directory.
    /// `path` is the path exactly as the caller passed it.
    #[error("{path}: no such directory")]
    NoSuchDirectory { path: String },
}

/// An archive entry that disagrees with a node built from an earlier entry.
/// The earlier node is kept and the rest of the entry is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("entry `{entry}` conflicts with existing {existing} at `{path}`")]
pub struct BuilderConflict {
    /// The archive entry being added.
    pub entry: String,
    /// Inner absolute path of the clashing node.
    pub path: String,
    /// Type of the node that was already there.
    pub existing: EntryType,
}

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("cannot read archive {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
    #[error("archive has no entry `{0}`")]
    MissingEntry(String),
    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
