//! Plain-text rendering of a single entry

use crate::tree::{EntryKind, RenderEntry};

/// Width of one indentation level.
pub const INDENT_UNIT: &str = "    ";

pub const ALIAS_SEPARATOR: &str = " a.k.a. ";

pub fn indent(level: usize) -> String {
    INDENT_UNIT.repeat(level)
}

/// Format an entry as one uncolored line, without the trailing newline.
///
/// `<indent><name>[ a.k.a. <alias>][<suffix>]` for directories,
/// `<indent><name>` for files.
pub fn render_line(entry: &RenderEntry) -> String {
    let mut line = indent(entry.indent);
    line.push_str(&entry.name);
    if let EntryKind::Dir(annotation) = entry.kind {
        if let Some(alias) = &entry.alias {
            line.push_str(ALIAS_SEPARATOR);
            line.push_str(alias);
        }
        line.push_str(annotation.suffix());
    }
    line
}
