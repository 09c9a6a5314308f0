//! A read-only virtual file system (VFS) built from a zip archive, and a tiny shell to
//! walk it.
//!
//! ### Overview
//!
//! `vfs-shell` reads the entry list of an archive once, turns it into an immutable directory
//! tree and lets you navigate that tree with `cd`/`ls` without unpacking anything.
//!
//! **Key ideas**:
//! - **Read-only**: The tree is built once and never changes; it can be shared between shells.
//! - **Predictable paths**: Every path is normalized (`.`, `..`, repeated `/`) and can never
//!   leave the virtual root.
//! - **Typed results**: Failed navigation is a value (`FsError`), never a panic or an exit.
//! - **Tolerant loading**: Inconsistent archive listings are logged and loaded as far as possible.
//!
//! ### Example
//!
//! ```
//! use vfs_shell::FsBackend;
//! use vfs_shell::vfs::{ArchiveFS, build};
//!
//! let mut fs = ArchiveFS::new(build(["test.txt", "subdir/"], None));
//! assert!(fs.cd("nonexistent").is_err());
//! fs.cd("subdir").unwrap();
//! fs.cd("~").unwrap();
//! assert_eq!(fs.cwd(), "/");
//! ```

pub mod archive;
pub mod config;
mod core;
pub mod error;
pub mod logging;
pub mod shell;
pub mod vfs;

pub use crate::core::{FsBackend, Result, utils};
pub use archive::Archive;
pub use config::ShellConfig;
pub use error::{ArchiveError, BuilderConflict, FsError};
pub use shell::Shell;
pub use vfs::{ArchiveFS, Node, Tree};
