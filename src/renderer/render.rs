use std::path::Path;

use crate::error::Result;

use super::entry::Entry;
use super::lister::DirectoryLister;

const BRANCH: &str = "|-- ";
const BRANCH_LAST: &str = "`-- ";
const PREFIX_CONTINUE: &str = "|   ";
const PREFIX_BLANK: &str = "    ";

/// Render `directory` as a flat sequence of display lines.
///
/// Each level lists subdirectories first, then files, both sorted by
/// name in case-sensitive byte order. Directory names carry a trailing
/// `/` and their recursive block follows immediately. The tree shape
/// lives entirely in the prefixes and glyphs of the flat output; there
/// is no tree object.
///
/// The `` `-- `` glyph marks the last entry *within its group*: the
/// final subdirectory gets it even when file siblings follow at the
/// same level. That matches the historical output and is kept as-is.
///
/// Any listing failure propagates and aborts the whole render.
pub fn render_tree<L: DirectoryLister>(
    lister: &L,
    directory: &Path,
    prefix: &str,
) -> Result<Vec<String>> {
    let entries = lister.list(directory)?;
    let (mut dirs, mut files): (Vec<Entry>, Vec<Entry>) =
        entries.into_iter().partition(Entry::is_dir);

    dirs.sort_by(|a, b| a.name.cmp(&b.name));
    files.sort_by(|a, b| a.name.cmp(&b.name));

    let mut lines = Vec::new();

    let dir_count = dirs.len();
    for (i, entry) in dirs.iter().enumerate() {
        let is_last = i == dir_count - 1;
        let glyph = if is_last { BRANCH_LAST } else { BRANCH };
        lines.push(format!("{}{}{}/", prefix, glyph, entry.name));

        let extension = if is_last { PREFIX_BLANK } else { PREFIX_CONTINUE };
        let child_prefix = format!("{}{}", prefix, extension);
        lines.extend(render_tree(lister, &directory.join(&entry.name), &child_prefix)?);
    }

    let file_count = files.len();
    for (i, entry) in files.iter().enumerate() {
        let is_last = i == file_count - 1;
        let glyph = if is_last { BRANCH_LAST } else { BRANCH };
        lines.push(format!("{}{}{}", prefix, glyph, entry.name));
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SnapError;
    use std::collections::{HashMap, HashSet};
    use std::path::PathBuf;

    /// In-memory lister: a fixed map of path -> children, plus a set of
    /// paths that fail with a permission error when listed.
    #[derive(Default)]
    struct MemoryLister {
        tree: HashMap<PathBuf, Vec<Entry>>,
        denied: HashSet<PathBuf>,
    }

    impl MemoryLister {
        fn with(mut self, path: &str, entries: Vec<Entry>) -> Self {
            self.tree.insert(PathBuf::from(path), entries);
            self
        }

        fn deny(mut self, path: &str) -> Self {
            self.denied.insert(PathBuf::from(path));
            self
        }
    }

    impl DirectoryLister for MemoryLister {
        fn list(&self, path: &Path) -> Result<Vec<Entry>> {
            if self.denied.contains(path) {
                return Err(SnapError::Io {
                    path: path.to_path_buf(),
                    source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
                });
            }
            self.tree
                .get(path)
                .cloned()
                .ok_or_else(|| SnapError::PathNotFound(path.to_path_buf()))
        }
    }

    fn render(lister: &MemoryLister) -> Vec<String> {
        render_tree(lister, Path::new("/root"), "").unwrap()
    }

    #[test]
    fn empty_directory_renders_nothing() {
        let lister = MemoryLister::default().with("/root", vec![]);
        assert_eq!(render(&lister), Vec::<String>::new());
    }

    #[test]
    fn files_are_sorted_by_name() {
        let lister = MemoryLister::default()
            .with("/root", vec![Entry::file("b.txt"), Entry::file("a.txt")]);

        assert_eq!(render(&lister), vec!["|-- a.txt", "`-- b.txt"]);
    }

    #[test]
    fn sorting_is_case_sensitive_byte_order() {
        // Uppercase sorts before lowercase in byte order.
        let lister = MemoryLister::default()
            .with("/root", vec![Entry::file("banana"), Entry::file("Apple"), Entry::file("apple")]);

        assert_eq!(
            render(&lister),
            vec!["|-- Apple", "|-- apple", "`-- banana"]
        );
    }

    #[test]
    fn directories_come_before_files() {
        // "sub" sorts after "f.txt" by name, but directories are
        // grouped first regardless.
        let lister = MemoryLister::default()
            .with("/root", vec![Entry::file("f.txt"), Entry::dir("sub")])
            .with("/root/sub", vec![]);

        assert_eq!(render(&lister), vec!["`-- sub/", "`-- f.txt"]);
    }

    #[test]
    fn directory_names_end_with_slash_files_do_not() {
        let lister = MemoryLister::default()
            .with("/root", vec![Entry::dir("d"), Entry::file("f")])
            .with("/root/d", vec![]);

        let lines = render(&lister);
        assert!(lines[0].ends_with("d/"));
        assert!(lines[1].ends_with('f'));
    }

    #[test]
    fn last_directory_glyph_ignores_trailing_files() {
        // The quirk: "b" is the last *directory*, so it gets the `--
        // glyph even though files follow it at the same level.
        let lister = MemoryLister::default()
            .with(
                "/root",
                vec![Entry::dir("a"), Entry::dir("b"), Entry::file("z.txt")],
            )
            .with("/root/a", vec![])
            .with("/root/b", vec![]);

        assert_eq!(render(&lister), vec!["|-- a/", "`-- b/", "`-- z.txt"]);
    }

    #[test]
    fn nested_prefixes_track_ancestor_last_status() {
        let lister = MemoryLister::default()
            .with("/root", vec![Entry::dir("a"), Entry::dir("b")])
            .with("/root/a", vec![Entry::file("x.txt")])
            .with("/root/b", vec![Entry::file("y.txt")]);

        assert_eq!(
            render(&lister),
            vec![
                "|-- a/",
                "|   `-- x.txt", // under a non-last ancestor: pipe continuation
                "`-- b/",
                "    `-- y.txt", // under the last ancestor: blank indent
            ]
        );
    }

    #[test]
    fn file_depth_matches_prefix_segment_count() {
        let lister = MemoryLister::default()
            .with("/root", vec![Entry::dir("a")])
            .with("/root/a", vec![Entry::dir("b")])
            .with("/root/a/b", vec![Entry::file("deep.txt")]);

        let lines = render(&lister);
        // Two ancestor directories, both last in their group: two
        // four-space segments before the glyph.
        assert_eq!(lines[2], "        `-- deep.txt");
    }

    #[test]
    fn subdirectory_block_precedes_following_siblings() {
        let lister = MemoryLister::default()
            .with("/root", vec![Entry::dir("a"), Entry::file("top.txt")])
            .with("/root/a", vec![Entry::file("inner.txt")]);

        assert_eq!(
            render(&lister),
            vec!["`-- a/", "    `-- inner.txt", "`-- top.txt"]
        );
    }

    #[test]
    fn unreadable_directory_aborts_the_render() {
        let lister = MemoryLister::default()
            .with("/root", vec![Entry::dir("locked"), Entry::file("ok.txt")])
            .deny("/root/locked");

        let result = render_tree(&lister, Path::new("/root"), "");
        assert!(matches!(result, Err(SnapError::Io { .. })));
    }

    #[test]
    fn unreadable_root_aborts_the_render() {
        let lister = MemoryLister::default().deny("/root");
        assert!(render_tree(&lister, Path::new("/root"), "").is_err());
    }
}
