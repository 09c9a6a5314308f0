use crate::error::FsError;
use crate::vfs::{Children, Node};

pub mod utils;

/// Read-only navigation over a virtual file system.
///
/// All `path` arguments may be absolute (`/docs`) or relative to the current
/// working directory (`docs`, `../docs`, `./docs`).
pub trait FsBackend {
    /// Returns current working directory, always absolute and ending with `/`.
    fn cwd(&self) -> &str;

    /// Changes the current working directory.
    /// On error the current working directory stays unchanged.
    fn cd(&mut self, path: &str) -> std::result::Result<(), FsError>;

    /// Returns the immediate children of directory `path`, sorted by name.
    fn ls(&self, path: &str) -> std::result::Result<&Children, FsError>;

    /// Returns the node at `path`, if any.
    fn resolve(&self, path: &str) -> Option<&Node>;

    /// Checks if a `path` exists in the VFS.
    fn exists(&self, path: &str) -> bool {
        self.resolve(path).is_some()
    }

    /// Checks if `path` is a directory.
    fn is_dir(&self, path: &str) -> bool {
        self.resolve(path).is_some_and(Node::is_dir)
    }

    /// Checks if `path` is a regular file.
    fn is_file(&self, path: &str) -> bool {
        self.resolve(path).is_some_and(Node::is_file)
    }
}

pub type Result<T> = std::result::Result<T, anyhow::Error>;
