// Render module - report output

pub mod json;
pub mod text;

use std::io::{self, Write};

use crate::operations::DiffResult;

pub use json::render_json;
pub use text::render_text;

/// Report format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Write `result` to `out` in the requested format
pub fn render_report(result: &DiffResult, format: OutputFormat, out: &mut impl Write) -> io::Result<()> {
    match format {
        OutputFormat::Text => render_text(result, out),
        OutputFormat::Json => render_json(result, out),
    }
}
