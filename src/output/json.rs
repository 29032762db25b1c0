//! JSON output formatting

use std::io;

use crate::tree::RenderEntry;

/// Print entries as a pretty-printed JSON array to stdout.
pub fn print_json(entries: &[RenderEntry]) -> io::Result<()> {
    let json = serde_json::to_string_pretty(entries).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
