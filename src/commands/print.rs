//! Print command implementation

use crate::cli::PrintArgs;
use crate::error::Result;
use crate::renderer::{render_tree, FsLister};

/// Run the print command
pub fn run(args: PrintArgs) -> Result<()> {
    // Resolve to absolute path
    let path = args
        .path
        .canonicalize()
        .unwrap_or_else(|_| args.path.clone());
    let name = super::project_name(&path);

    tracing::info!(path = %path.display(), "Rendering directory tree");

    let lines = render_tree(&FsLister, &path, "")?;

    println!("Project Structure for '{}':\n", name);
    println!("{}", lines.join("\n"));

    Ok(())
}
