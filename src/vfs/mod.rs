mod archive_fs;
mod builder;
mod entry;
mod rights;
mod tree;

pub use archive_fs::{ArchiveFS, HOME};
pub use builder::{TreeBuilder, build};
pub use entry::{Children, EntryType, Node, NodeKind};
pub use rights::{AccessRights, RightsTable};
pub use tree::Tree;
