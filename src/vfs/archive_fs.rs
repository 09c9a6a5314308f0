//! This module provides a read-only virtual filesystem (VFS) over a tree built from
//! an archive listing.

use std::sync::Arc;

use crate::core::{FsBackend, utils};
use crate::error::FsError;
use crate::vfs::{Children, Node, Tree};

/// Resets the current working directory to the root in `cd()`.
pub const HOME: &str = "~";

/// A read-only virtual file system over an immutable [`Tree`].
///
/// ### Internal state
///
/// * `tree` — The directory tree, built once and shared through `Arc`. Several `ArchiveFS`
///   values (for example one per shell) may look at the same tree.
/// * `cwd` — Current Working Directory, an **inner absolute normalized path**.
///   - Always starts and ends with `/`.
///   - Always resolves to a directory of `tree`.
///   - Default value: `/` (the virtual root).
///   - Changed only via `cd()`.
///
/// ### Example
///
/// ```
/// use vfs_shell::FsBackend;
/// use vfs_shell::vfs::{ArchiveFS, build};
///
/// let mut fs = ArchiveFS::new(build(["docs/note.txt", "subdir/"], None));
///
/// fs.cd("docs").unwrap();
/// assert_eq!(fs.cwd(), "/docs/");
/// assert!(fs.is_file("note.txt"));
///
/// fs.cd("..").unwrap();
/// let names: Vec<_> = fs.ls(".").unwrap().keys().cloned().collect();
/// assert_eq!(names, ["docs", "subdir"]);
/// ```
#[derive(Debug, Clone)]
pub struct ArchiveFS {
    tree: Arc<Tree>,
    cwd: String,
}

impl ArchiveFS {
    /// Creates new ArchiveFS instance. The current working directory is set to `/`.
    pub fn new(tree: Tree) -> Self {
        Self::with_tree(Arc::new(tree))
    }

    /// Creates new ArchiveFS instance over a shared tree.
    pub fn with_tree(tree: Arc<Tree>) -> Self {
        Self {
            tree,
            cwd: String::from("/"),
        }
    }

    pub fn tree(&self) -> &Arc<Tree> {
        &self.tree
    }

    /// Lists the current working directory.
    pub fn ls_cwd(&self) -> Result<&Children, FsError> {
        self.ls(".")
    }

    fn to_inner(&self, path: &str) -> String {
        utils::normalize(&self.cwd, path)
    }

    fn dir(&self, path: &str) -> Result<(String, &Children), FsError> {
        let inner = self.to_inner(path);
        if utils::is_virtual_root(&inner) {
            return Ok((inner, self.tree.top()));
        }
        match self.tree.get(&inner).and_then(Node::children) {
            Some(children) => Ok((inner, children)),
            None => Err(FsError::NoSuchDirectory {
                path: path.to_string(),
            }),
        }
    }
}

impl FsBackend for ArchiveFS {
    /// Returns current working directory related to the vfs root.
    fn cwd(&self) -> &str {
        &self.cwd
    }

    /// Changes the current working directory.
    /// * `path` can be in relative or absolute form, but in both cases it must be a directory.
    /// * `~` always moves to the root.
    fn cd(&mut self, path: &str) -> Result<(), FsError> {
        if path == HOME {
            self.cwd = String::from("/");
            return Ok(());
        }
        let (inner, _) = self.dir(path)?;
        self.cwd = inner;
        Ok(())
    }

    /// Returns the immediate children of a directory (no recursion), sorted by name.
    ///
    /// An error is returned if `path` does not exist or is a file; it carries `path` as given.
    fn ls(&self, path: &str) -> Result<&Children, FsError> {
        self.dir(path).map(|(_, children)| children)
    }

    fn resolve(&self, path: &str) -> Option<&Node> {
        self.tree.get(&self.to_inner(path))
    }
}
