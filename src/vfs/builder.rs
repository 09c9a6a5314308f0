//! Turns a flat list of archive entry paths into a [`Tree`].
//!
//! Entry paths follow the usual archive convention: `docs/` is a directory,
//! `docs/a.txt` is a file inside (an implicitly created) directory `docs`.
//! Entries may come in any order.

use tracing::warn;

use crate::error::BuilderConflict;
use crate::vfs::{Children, Node, RightsTable, Tree};

/// Incremental tree builder.
///
/// ```
/// use vfs_shell::vfs::TreeBuilder;
///
/// let mut builder = TreeBuilder::new();
/// builder.add("a/b.txt");
/// builder.add("a/c/");
/// let tree = builder.build();
///
/// assert!(tree.get("/a/b.txt").unwrap().is_file());
/// assert!(tree.get("/a/c/").unwrap().is_dir());
/// ```
#[derive(Debug)]
pub struct TreeBuilder {
    root: Children,
    rights: Option<RightsTable>,
    conflicts: Vec<BuilderConflict>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            root: Children::new(),
            rights: None,
            conflicts: Vec::new(),
        }
    }

    /// Attaches rights from `table` to every node created afterwards.
    pub fn with_rights(mut self, table: RightsTable) -> Self {
        self.rights = Some(table);
        self
    }

    /// Adds one archive entry.
    ///
    /// The last segment is a file unless `entry` ends with `/`; all other segments are
    /// directories, created on first sight and reused afterwards. If a segment already
    /// exists with the other type the first one wins: the rest of `entry` is skipped
    /// and a conflict is recorded.
    ///
    /// `.` segments are dropped. An entry with a `..` segment is skipped as a whole.
    pub fn add(&mut self, entry: &str) {
        let raw: Vec<&str> = entry.split('/').collect();
        if raw.contains(&"..") {
            warn!(entry, "ignoring archive entry with a `..` segment");
            return;
        }
        let parts: Vec<&str> = raw
            .iter()
            .copied()
            .filter(|s| !s.is_empty() && *s != ".")
            .collect();
        if parts.is_empty() {
            return;
        }
        let ends_with_file = !matches!(raw.last(), Some(&"" | &"."));

        let rights = self.rights.as_ref();
        let mut children = &mut self.root;
        let mut path = String::from("/");
        for (i, &part) in parts.iter().enumerate() {
            let is_file = ends_with_file && i == parts.len() - 1;
            path.push_str(part);
            if !is_file {
                path.push('/');
            }

            let node = children.entry(part.to_string()).or_insert_with(|| {
                let node = if is_file { Node::file(entry) } else { Node::directory() };
                node.with_rights(rights.and_then(|table| table.get(part)).cloned())
            });

            if node.is_file() != is_file {
                let conflict = BuilderConflict {
                    entry: entry.to_string(),
                    path,
                    existing: node.entry_type(),
                };
                warn!(%conflict, "ignoring conflicting archive entry");
                self.conflicts.push(conflict);
                return;
            }
            let Some(next) = node.children_mut() else {
                break;
            };
            children = next;
        }
    }

    /// Conflicts seen so far, in the order they were found.
    pub fn conflicts(&self) -> &[BuilderConflict] {
        &self.conflicts
    }

    pub fn build(self) -> Tree {
        Tree::new(Node::with_children(self.root))
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a tree from `entries` in one go.
pub fn build<I, S>(entries: I, rights: Option<RightsTable>) -> Tree
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = TreeBuilder::new();
    if let Some(table) = rights {
        builder = builder.with_rights(table);
    }
    for entry in entries {
        builder.add(entry.as_ref());
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::{AccessRights, EntryType};

    fn names(tree: &Tree, path: &str) -> Vec<String> {
        tree.get(path)
            .and_then(Node::children)
            .map(|children| children.keys().cloned().collect())
            .unwrap_or_default()
    }

    mod shape {
        use super::*;

        #[test]
        fn test_file_and_empty_dir() {
            let tree = build(["a/b.txt", "a/c/"], None);

            assert_eq!(names(&tree, "/"), vec!["a"]);
            assert!(tree.get("/a/").is_some_and(Node::is_dir));
            assert_eq!(names(&tree, "/a/"), vec!["b.txt", "c"]);
            assert!(tree.get("/a/b.txt").is_some_and(Node::is_file));
            assert!(tree.get("/a/c/").is_some_and(Node::is_dir));
            assert!(names(&tree, "/a/c/").is_empty());
        }

        #[test]
        fn test_top_level_entries() {
            let tree = build(["test.txt", "subdir/"], None);
            assert_eq!(names(&tree, "/"), vec!["subdir", "test.txt"]);
            assert!(tree.get("/test.txt").is_some_and(Node::is_file));
            assert!(tree.get("/subdir/").is_some_and(Node::is_dir));
        }

        #[test]
        fn test_nested_paths_in_any_order() {
            let forward = build(["x/", "x/y/", "x/y/z.txt"], None);
            let backward = build(["x/y/z.txt", "x/y/", "x/"], None);
            assert_eq!(forward, backward);
            assert!(forward.get("/x/y/z.txt").is_some_and(Node::is_file));
        }

        #[test]
        fn test_shared_directory_prefix() {
            let tree = build(["docs/a.md", "docs/b.md", "docs/sub/c.md"], None);
            assert_eq!(names(&tree, "/docs/"), vec!["a.md", "b.md", "sub"]);
            assert_eq!(tree.len(), 5);
        }

        #[test]
        fn test_leading_and_doubled_slashes() {
            let tree = build(["/lead/file.txt", "dup//inner/"], None);
            assert!(tree.get("/lead/file.txt").is_some_and(Node::is_file));
            assert!(tree.get("/dup/inner/").is_some_and(Node::is_dir));
        }

        #[test]
        fn test_empty_entries_are_ignored() {
            let tree = build(["", "/", "//"], None);
            assert!(tree.is_empty());
        }

        #[test]
        fn test_dot_segments_are_dropped() {
            let tree = build(["./c/", "d/./e/", "./f.txt", "g/."], None);
            assert_eq!(names(&tree, "/"), vec!["c", "d", "f.txt", "g"]);
            assert!(tree.get("/d/e/").is_some_and(Node::is_dir));
            assert!(tree.get("/f.txt").is_some_and(Node::is_file));
            assert!(tree.get("/g/").is_some_and(Node::is_dir));
        }

        #[test]
        fn test_parent_segments_skip_the_entry() {
            let mut builder = TreeBuilder::new();
            builder.add("a/../b.txt");
            builder.add("../up/");
            builder.add("kept.txt");
            assert!(builder.conflicts().is_empty());

            let tree = builder.build();
            assert_eq!(names(&tree, "/"), vec!["kept.txt"]);
        }

        #[test]
        fn test_file_keeps_archive_entry() {
            let tree = build(["/lead/file.txt", "docs/a.md"], None);
            let node = tree.get("/docs/a.md").unwrap();
            assert_eq!(node.archive_entry(), Some("docs/a.md"));
            let node = tree.get("/lead/file.txt").unwrap();
            assert_eq!(node.archive_entry(), Some("/lead/file.txt"));
        }
    }

    mod conflicts {
        use super::*;

        #[test]
        fn test_file_then_directory() {
            let mut builder = TreeBuilder::new();
            builder.add("a");
            builder.add("a/b.txt");
            assert_eq!(
                builder.conflicts(),
                &[BuilderConflict {
                    entry: "a/b.txt".to_string(),
                    path: "/a/".to_string(),
                    existing: EntryType::File,
                }]
            );
            let tree = builder.build();
            assert!(tree.get("/a").is_some_and(Node::is_file));
            assert!(tree.get("/a/b.txt").is_none());
        }

        #[test]
        fn test_directory_then_file() {
            let mut builder = TreeBuilder::new();
            builder.add("a/b/");
            builder.add("a/b");
            assert_eq!(builder.conflicts().len(), 1);
            assert_eq!(builder.conflicts()[0].existing, EntryType::Directory);
            assert_eq!(builder.conflicts()[0].path, "/a/b");
            let tree = builder.build();
            assert!(tree.get("/a/b/").is_some_and(Node::is_dir));
        }

        #[test]
        fn test_later_entries_still_added() {
            let mut builder = TreeBuilder::new();
            builder.add("a");
            builder.add("a/");
            builder.add("b/c.txt");
            assert_eq!(builder.conflicts().len(), 1);
            let tree = builder.build();
            assert!(tree.get("/b/c.txt").is_some_and(Node::is_file));
        }

        #[test]
        fn test_duplicates_are_not_conflicts() {
            let mut builder = TreeBuilder::new();
            builder.add("a/b.txt");
            builder.add("a/b.txt");
            builder.add("a/");
            builder.add("a/");
            assert!(builder.conflicts().is_empty());
            assert_eq!(builder.build().len(), 2);
        }

        #[test]
        fn test_conflict_message() {
            let conflict = BuilderConflict {
                entry: "a/b.txt".to_string(),
                path: "/a/".to_string(),
                existing: EntryType::File,
            };
            assert_eq!(
                conflict.to_string(),
                "entry `a/b.txt` conflicts with existing file at `/a/`"
            );
        }
    }

    mod rights {
        use super::*;

        #[test]
        fn test_rights_attached_by_name() {
            let table = RightsTable::parse("test.txt r\nsubdir rw\n");
            let tree = build(["test.txt", "subdir/", "other.txt"], Some(table));

            let rights = |path: &str| tree.get(path).and_then(Node::rights).cloned();
            assert_eq!(rights("/test.txt"), Some(AccessRights::ReadOnly));
            assert_eq!(rights("/subdir/"), Some(AccessRights::ReadWrite));
            assert_eq!(rights("/other.txt"), None);
        }

        #[test]
        fn test_same_name_shares_rights() {
            let table = RightsTable::parse("notes.txt w\n");
            let tree = build(["a/notes.txt", "b/notes.txt"], Some(table));
            for path in ["/a/notes.txt", "/b/notes.txt"] {
                assert_eq!(
                    tree.get(path).and_then(Node::rights),
                    Some(&AccessRights::WriteOnly)
                );
            }
        }

        #[test]
        fn test_implicit_directories_get_rights() {
            let table = RightsTable::parse("docs rw\n");
            let tree = build(["docs/a.md"], Some(table));
            assert_eq!(
                tree.get("/docs/").and_then(Node::rights),
                Some(&AccessRights::ReadWrite)
            );
        }

        #[test]
        fn test_no_table_leaves_rights_unset() {
            let tree = build(["test.txt", "subdir/"], None);
            assert!(tree.get("/test.txt").unwrap().rights().is_none());
            assert!(tree.get("/subdir/").unwrap().rights().is_none());
        }
    }
}
