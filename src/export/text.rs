use std::fs;
use std::path::Path;

use crate::error::{Result, SnapError};

/// Write the rendered lines to `path` as UTF-8 text, newline-separated
/// with no trailing newline, overwriting any existing file.
pub fn save_text(lines: &[String], path: &Path) -> Result<()> {
    fs::write(path, lines.join("\n")).map_err(|e| SnapError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
