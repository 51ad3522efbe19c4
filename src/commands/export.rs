//! Export command implementation.

use std::fs;
use std::path::Path;

use anyhow::Result;

use crate::cli::ExportArgs;
use crate::config::Config;
use crate::export::{save_pdf, save_text, OutputFormat};
use crate::renderer::{render_tree, FsLister};

/// Run the export command.
pub fn run(args: ExportArgs, config: &Config) -> Result<()> {
    // Resolve to absolute path
    let path = args
        .path
        .canonicalize()
        .unwrap_or_else(|_| args.path.clone());
    let name = super::project_name(&path);

    let format_name = args
        .format
        .as_deref()
        .unwrap_or(&config.export.default_format);
    let format = match OutputFormat::parse(format_name) {
        Some(f) => f,
        None => {
            eprintln!(
                "Error: unknown format '{}'. Valid formats: text, pdf",
                format_name
            );
            std::process::exit(2);
        }
    };

    tracing::info!(path = %path.display(), ?format, "Exporting directory tree");

    // A traversal failure aborts the whole run; only the save is caught.
    let lines = render_tree(&FsLister, &path, "")?;

    let output = match args.output {
        Some(output) => output,
        None => {
            let dir = config.resolve_output_dir()?;
            dir.join(format!("{}.{}", name, format.extension()))
        }
    };

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    if let Err(e) = save(format, &lines, &output, &name) {
        eprintln!("An error occurred while saving the file: {}", e);
        return Ok(());
    }

    println!("File saved successfully at: {}", output.display());

    if args.open {
        if let Err(e) = open::that(&output) {
            eprintln!("Failed to open file: {}", e);
        }
    }

    Ok(())
}

fn save(
    format: OutputFormat,
    lines: &[String],
    output: &Path,
    title: &str,
) -> crate::error::Result<()> {
    match format {
        OutputFormat::Text => save_text(lines, output),
        OutputFormat::Pdf => save_pdf(lines, output, title),
    }
}
