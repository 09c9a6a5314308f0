use std::collections::BTreeMap;
use std::fmt;

use crate::vfs::AccessRights;

/// Immediate children of a directory, keyed (and therefore sorted) by name.
pub type Children = BTreeMap<String, Node>;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EntryType {
    File,
    Directory,
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryType::File => f.write_str("file"),
            EntryType::Directory => f.write_str("directory"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Directory(Children),
    /// `entry` is the archive key the file was built from.
    File { entry: String },
}

/// One element of the tree. The name lives in the parent's `Children`.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    rights: Option<AccessRights>,
}

impl Node {
    pub fn directory() -> Node {
        Node {
            kind: NodeKind::Directory(Children::new()),
            rights: None,
        }
    }

    pub(crate) fn with_children(children: Children) -> Node {
        Node {
            kind: NodeKind::Directory(children),
            rights: None,
        }
    }

    pub fn file<S: Into<String>>(entry: S) -> Node {
        Node {
            kind: NodeKind::File {
                entry: entry.into(),
            },
            rights: None,
        }
    }

    pub fn with_rights(mut self, rights: Option<AccessRights>) -> Node {
        self.rights = rights;
        self
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn entry_type(&self) -> EntryType {
        match self.kind {
            NodeKind::Directory(_) => EntryType::Directory,
            NodeKind::File { .. } => EntryType::File,
        }
    }

    pub fn rights(&self) -> Option<&AccessRights> {
        self.rights.as_ref()
    }

    pub fn is_file(&self) -> bool {
        self.entry_type() == EntryType::File
    }

    pub fn is_dir(&self) -> bool {
        self.entry_type() == EntryType::Directory
    }

    /// Returns children for a directory, `None` for a file.
    pub fn children(&self) -> Option<&Children> {
        match &self.kind {
            NodeKind::Directory(children) => Some(children),
            NodeKind::File { .. } => None,
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut Children> {
        match &mut self.kind {
            NodeKind::Directory(children) => Some(children),
            NodeKind::File { .. } => None,
        }
    }

    /// Returns the archive key of a file, `None` for a directory.
    pub fn archive_entry(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::File { entry } => Some(entry),
            NodeKind::Directory(_) => None,
        }
    }
}
