use crate::core::utils;
use crate::vfs::{Children, Node};

static NO_CHILDREN: Children = Children::new();

/// Immutable directory tree rooted at `/`.
///
/// Built once by [`TreeBuilder`](crate::vfs::TreeBuilder) and never changed afterwards,
/// so it can be shared between any number of readers.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    root: Node,
}

impl Tree {
    pub(crate) fn new(root: Node) -> Self {
        Self { root }
    }

    /// Returns a tree that holds only the root directory.
    pub fn empty() -> Self {
        Self::new(Node::directory())
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Children of the root directory.
    pub fn top(&self) -> &Children {
        self.root.children().unwrap_or(&NO_CHILDREN)
    }

    /// Walks an absolute inner path from the root.
    /// Returns `None` if a segment is missing or a non-final segment is a file.
    pub fn get(&self, path: &str) -> Option<&Node> {
        let mut node = &self.root;
        for name in utils::segments(path) {
            node = node.children()?.get(name)?;
        }
        Some(node)
    }

    /// Number of nodes in the tree, the root excluded.
    pub fn len(&self) -> usize {
        fn count(children: &Children) -> usize {
            children
                .values()
                .map(|node| 1 + node.children().map_or(0, count))
                .sum()
        }
        count(self.top())
    }

    pub fn is_empty(&self) -> bool {
        self.top().is_empty()
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::empty()
    }
}
