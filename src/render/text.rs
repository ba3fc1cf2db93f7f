// Text report rendering

use std::io::{self, Write};

use crate::operations::DiffResult;

/// Write the human-readable report
/// Writes nothing when there are no differences
pub fn render_text(result: &DiffResult, out: &mut impl Write) -> io::Result<()> {
    if !result.modified().is_empty() {
        writeln!(out, "=== Modified Keys ===")?;
        for entry in result.modified() {
            writeln!(out, "Key: {}", entry.key)?;
            writeln!(out, "  Local:  {}", entry.local_value)?;
            writeln!(out, "  Consul: {}", entry.remote_value)?;
            writeln!(out)?;
        }
    }

    if !result.remote_only().is_empty() {
        writeln!(out, "=== Keys Only in Consul ===")?;
        for key in result.remote_only() {
            writeln!(out, "- {}", key)?;
        }
    }

    Ok(())
}
