mod pdf;
mod text;

pub use pdf::save_pdf;
pub use text::save_text;

/// Output format for a saved tree listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Pdf,
}

impl OutputFormat {
    /// Parse a user- or config-supplied format name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "t" => Some(OutputFormat::Text),
            "pdf" | "p" => Some(OutputFormat::Pdf),
            _ => None,
        }
    }

    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Pdf => "pdf",
        }
    }
}
