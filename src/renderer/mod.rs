mod entry;
mod lister;
mod render;

pub use entry::{Entry, EntryKind};
pub use lister::{DirectoryLister, FsLister};
pub use render::render_tree;
