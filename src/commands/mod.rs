pub mod export;
pub mod interactive;
pub mod print;

use std::path::Path;

/// Display name of the directory being rendered (its last component).
pub(crate) fn project_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
