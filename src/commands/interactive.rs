//! The default flow when no subcommand is given: print the tree for the
//! current directory, prompt for an output format, save, and offer to
//! open the result.

use std::fs;
use std::io::{self, Write};

use anyhow::Result;

use crate::config::Config;
use crate::export::{save_pdf, save_text, OutputFormat};
use crate::renderer::{render_tree, FsLister};

/// Run the interactive flow in the current directory.
pub fn run(config: &Config) -> Result<()> {
    let root = std::env::current_dir()?;
    let name = super::project_name(&root);

    let lines = render_tree(&FsLister, &root, "")?;

    println!("Project Structure for '{}':\n", name);
    println!("{}", lines.join("\n"));

    let choice = prompt("\nDo you want to save this structure to (P)DF, (T)ext, or (C)ancel? [P/T/C]: ")?;
    let format = match OutputFormat::parse(choice.trim()) {
        Some(f) => f,
        None => {
            println!("Operation canceled.");
            return Ok(());
        }
    };

    let output_dir = config.resolve_output_dir()?;
    fs::create_dir_all(&output_dir)?;
    let output = output_dir.join(format!("{}.{}", name, format.extension()));

    let saved = match format {
        OutputFormat::Text => save_text(&lines, &output),
        OutputFormat::Pdf => save_pdf(&lines, &output, &name),
    };
    if let Err(e) = saved {
        eprintln!("An error occurred while saving the file: {}", e);
        return Ok(());
    }

    println!("\nFile saved successfully at: {}", output.display());

    let open_choice = prompt("Do you want to open the file? [Y/N]: ")?;
    if open_choice.trim().eq_ignore_ascii_case("y") {
        if let Err(e) = open::that(&output) {
            eprintln!("Failed to open file: {}", e);
        }
    }

    Ok(())
}

fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input)
}
