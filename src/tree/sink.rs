//! Output callbacks for walkers

use std::io;

use super::entry::RenderEntry;

/// Receives rendered entries from a walker, in output order.
pub trait TreeOutput {
    fn write_entry(&mut self, entry: &RenderEntry) -> io::Result<()>;

    /// Called once after the last entry of a successful walk.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Buffers entries in memory. Used for JSON output and tests.
#[derive(Debug, Default)]
pub struct EntryCollector {
    entries: Vec<RenderEntry>,
}

impl EntryCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[RenderEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<RenderEntry> {
        self.entries
    }
}

impl TreeOutput for EntryCollector {
    fn write_entry(&mut self, entry: &RenderEntry) -> io::Result<()> {
        self.entries.push(entry.clone());
        Ok(())
    }
}
