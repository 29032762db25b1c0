//! Console output formatter
//!
//! Writes entries straight to a color-capable stream as walkers emit them.
//! Directories are bold red, files bold blue.

use std::io::{self, Write};

use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

use crate::tree::{EntryKind, RenderEntry, TreeOutput};

use super::config::OutputConfig;
use super::render::{ALIAS_SEPARATOR, indent};

pub struct ConsoleFormatter<W: WriteColor> {
    out: W,
}

impl ConsoleFormatter<StandardStream> {
    pub fn stdout(config: &OutputConfig) -> Self {
        Self::new(StandardStream::stdout(config.color_choice()))
    }
}

impl<W: WriteColor> ConsoleFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_colored(&mut self, text: &str, color: Color) -> io::Result<()> {
        self.out
            .set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(self.out, "{}", text)?;
        self.out.reset()
    }
}

impl<W: WriteColor> TreeOutput for ConsoleFormatter<W> {
    fn write_entry(&mut self, entry: &RenderEntry) -> io::Result<()> {
        write!(self.out, "{}", indent(entry.indent))?;
        match entry.kind {
            EntryKind::Dir(annotation) => {
                self.write_colored(&entry.name, Color::Red)?;
                if let Some(alias) = &entry.alias {
                    write!(self.out, "{}", ALIAS_SEPARATOR)?;
                    self.write_colored(alias, Color::Red)?;
                }
                writeln!(self.out, "{}", annotation.suffix())?;
            }
            EntryKind::File => {
                self.write_colored(&entry.name, Color::Blue)?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
