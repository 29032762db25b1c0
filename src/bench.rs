//! Timing harness comparing the two walk strategies
//!
//! Each strategy runs a fixed number of times over the same root with output
//! discarded. Results are printed as a summary and appended to a CSV report,
//! one row per benchmark run.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use termcolor::{Color, ColorSpec, NoColor, WriteColor};
use tracing::info;

use crate::error::WalkError;
use crate::output::ConsoleFormatter;
use crate::tree::{Strategy, WalkerConfig, walk};

pub const DEFAULT_ITERATIONS: usize = 100;
pub const DEFAULT_REPORT_PATH: &str = "report.csv";

#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub iterations: usize,
    pub report_path: PathBuf,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
        }
    }
}

/// Aggregate of per-run wall-clock durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingStats {
    pub min: Duration,
    pub max: Duration,
    pub mean: Duration,
    pub samples: usize,
}

impl TimingStats {
    /// Returns None for an empty sample set, or one too large to average
    /// with `Duration` division.
    pub fn from_samples(samples: &[Duration]) -> Option<Self> {
        let min = *samples.iter().min()?;
        let max = *samples.iter().max()?;
        let count = u32::try_from(samples.len()).ok()?;
        let mean = samples.iter().sum::<Duration>() / count;
        Some(Self {
            min,
            max,
            mean,
            samples: samples.len(),
        })
    }
}

/// Run `strategy` over `root` `iterations` times, discarding the output.
pub fn time_strategy(
    root: &Path,
    depth: usize,
    strategy: Strategy,
    iterations: usize,
) -> Result<TimingStats, WalkError> {
    if iterations == 0 {
        return Err(WalkError::NoIterations);
    }
    let config = WalkerConfig::new(depth, strategy);
    let mut samples = Vec::with_capacity(iterations);

    for _ in 0..iterations {
        let mut sink = ConsoleFormatter::new(NoColor::new(io::sink()));
        let start = Instant::now();
        walk(root, &config, &mut sink)?;
        samples.push(start.elapsed());
    }

    let stats = TimingStats::from_samples(&samples).ok_or(WalkError::NoIterations)?;
    info!(
        strategy = strategy.name(),
        iterations,
        mean = ?stats.mean,
        "strategy timed"
    );
    Ok(stats)
}

/// One benchmark run: both strategies over the same root and depth.
#[derive(Debug, Clone)]
pub struct BenchReport {
    pub timestamp: DateTime<Local>,
    pub root: PathBuf,
    pub depth: usize,
    pub recursive: TimingStats,
    pub sorted: TimingStats,
}

impl BenchReport {
    pub fn run(root: &Path, depth: usize, config: &BenchConfig) -> Result<Self, WalkError> {
        info!(root = %root.display(), depth, iterations = config.iterations, "benchmark start");
        let recursive = time_strategy(root, depth, Strategy::Recursive, config.iterations)?;
        let sorted = time_strategy(root, depth, Strategy::Sorted, config.iterations)?;
        Ok(Self {
            timestamp: Local::now(),
            root: root.to_path_buf(),
            depth,
            recursive,
            sorted,
        })
    }

    /// `timestamp,"root",depth,rec_max,rec_min,rec_mean,sorted_max,sorted_min,sorted_mean`
    /// with durations in microseconds.
    pub fn csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{},{}",
            self.timestamp.to_rfc3339(),
            quote_csv(&self.root.to_string_lossy()),
            self.depth,
            self.recursive.max.as_micros(),
            self.recursive.min.as_micros(),
            self.recursive.mean.as_micros(),
            self.sorted.max.as_micros(),
            self.sorted.min.as_micros(),
            self.sorted.mean.as_micros(),
        )
    }

    /// Append this run as one row, creating the report if needed.
    pub fn append_to(&self, path: &Path) -> io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", self.csv_row())?;
        info!(report = %path.display(), "report row appended");
        Ok(())
    }

    pub fn write_summary<W: WriteColor>(&self, out: &mut W) -> io::Result<()> {
        write_stats(out, "RECURSIVE:", &self.recursive)?;
        write_stats(out, "SORTED:", &self.sorted)
    }
}

fn write_stats<W: WriteColor>(
    out: &mut W,
    heading: &str,
    stats: &TimingStats,
) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    writeln!(out, "{}", heading)?;
    out.reset()?;
    for (label, value) in [
        ("Max", stats.max),
        ("Min", stats.min),
        ("Average", stats.mean),
    ] {
        writeln!(
            out,
            "{} time taken by function: {} microseconds ({})",
            label,
            value.as_micros(),
            humantime::format_duration(value)
        )?;
    }
    Ok(())
}

fn quote_csv(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
