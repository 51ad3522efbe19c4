use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::error::{Result, SnapError};

// A4 page, one fixed-height text row per rendered line.
const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const LEFT_MARGIN: f32 = 10.0;
const BOTTOM_MARGIN: f32 = 15.0;
const LINE_HEIGHT: f32 = 10.0;
const FONT_SIZE: f32 = 12.0;

/// Write the rendered lines to `path` as a paginated PDF, one row per
/// line in the built-in Helvetica at a fixed size. A new page starts
/// whenever the cursor would pass the bottom margin.
pub fn save_pdf(lines: &[String], path: &Path, title: &str) -> Result<()> {
    let (doc, first_page, first_layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| SnapError::Pdf(e.to_string()))?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut y: f32 = PAGE_HEIGHT - LINE_HEIGHT;

    for line in lines {
        if y < BOTTOM_MARGIN {
            let (page, new_layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            layer = doc.get_page(page).get_layer(new_layer);
            y = PAGE_HEIGHT - LINE_HEIGHT;
        }
        layer.use_text(line.as_str(), FONT_SIZE, Mm(LEFT_MARGIN), Mm(y), &font);
        y -= LINE_HEIGHT;
    }

    let file = File::create(path).map_err(|e| SnapError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| SnapError::Pdf(e.to_string()))?;

    Ok(())
}
