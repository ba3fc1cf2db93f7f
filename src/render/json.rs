// JSON report rendering

use std::io::{self, Write};

use crate::operations::DiffResult;

/// Write the report as one pretty-printed JSON object
pub fn render_json(result: &DiffResult, out: &mut impl Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, result)?;
    writeln!(out)
}
