//! Entry formatting and display
//!
//! - `render` - plain-text line rendering shared by every formatter
//! - `console` - colored console output written as entries arrive
//! - `json` - JSON array output of collected entries

mod config;
mod console;
mod json;
mod render;

pub use config::OutputConfig;
pub use console::ConsoleFormatter;
pub use json::print_json;
pub use render::{ALIAS_SEPARATOR, INDENT_UNIT, indent, render_line};
