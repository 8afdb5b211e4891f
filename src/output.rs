//! JSON output formatting

use std::io::{self, Write};

use crate::types::RepoAnalysis;

/// Write the report as JSON followed by a newline. Pretty output uses
/// two-space indentation.
pub fn write_json<W: Write>(
    writer: &mut W,
    analysis: &RepoAnalysis,
    pretty: bool,
) -> io::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, analysis)?;
    } else {
        serde_json::to_writer(&mut *writer, analysis)?;
    }
    writeln!(writer)
}

/// Print the report as JSON to stdout.
pub fn print_json(analysis: &RepoAnalysis, pretty: bool) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_json(&mut handle, analysis, pretty)?;
    handle.flush()
}
