//! CLI entry point for dirwalk

use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};
use tracing_subscriber::EnvFilter;

use dirwalk::bench::DEFAULT_REPORT_PATH;
use dirwalk::{
    BenchConfig, BenchReport, ConsoleFormatter, DEFAULT_DEPTH, EntryCollector, OutputConfig,
    Strategy, WalkError, WalkerConfig, print_json, walk,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dirwalk")]
#[command(about = "List a directory tree to a limited depth")]
#[command(version)]
struct Args {
    /// Directory to list
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Number of directory levels to descend
    #[arg(default_value_t = DEFAULT_DEPTH)]
    depth: usize,

    /// Traversal strategy
    #[arg(short, long, value_enum, default_value = "recursive")]
    strategy: Strategy,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Output entries as a JSON array
    #[arg(long = "json", conflicts_with = "bench")]
    json: bool,

    /// Time both strategies N times each instead of printing the tree
    #[arg(
        long = "bench",
        value_name = "N",
        num_args = 0..=1,
        default_missing_value = "100",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    bench: Option<u64>,

    /// CSV file that benchmark results are appended to
    #[arg(
        long = "report",
        value_name = "FILE",
        default_value = DEFAULT_REPORT_PATH,
        requires = "bench"
    )]
    report: PathBuf,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("dirwalk=debug,warn")
        } else {
            EnvFilter::new("dirwalk=warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Print "Walking through: <canonical root>".
fn print_banner(args: &Args, use_color: bool) -> Result<(), WalkError> {
    let canonical = args
        .path
        .canonicalize()
        .map_err(|source| WalkError::Resolution {
            path: args.path.clone(),
            source,
        })?;
    let mut stdout = StandardStream::stdout(OutputConfig { use_color }.color_choice());
    write!(stdout, "Walking through: ")?;
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(stdout, "{}", canonical.display())?;
    stdout.reset()?;
    writeln!(stdout)?;
    Ok(())
}

fn run(args: &Args) -> Result<(), WalkError> {
    let use_color = should_use_color(args.color);
    let walker_config = WalkerConfig::new(args.depth, args.strategy);

    // Validate before printing anything to stdout
    if !args.path.is_dir() {
        return Err(WalkError::InvalidRoot {
            path: args.path.clone(),
        });
    }

    if args.json {
        let mut collector = EntryCollector::new();
        walk(&args.path, &walker_config, &mut collector)?;
        print_json(collector.entries())?;
        return Ok(());
    }

    print_banner(args, use_color)?;

    if let Some(iterations) = args.bench {
        let bench_config = BenchConfig {
            iterations: iterations as usize,
            report_path: args.report.clone(),
        };
        let report = BenchReport::run(&args.path, args.depth, &bench_config)?;
        report.append_to(&bench_config.report_path)?;
        let mut stdout = StandardStream::stdout(OutputConfig { use_color }.color_choice());
        report.write_summary(&mut stdout)?;
        return Ok(());
    }

    let mut formatter = ConsoleFormatter::stdout(&OutputConfig { use_color });
    walk(&args.path, &walker_config, &mut formatter)
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    if let Err(e) = run(&args) {
        match e {
            WalkError::InvalidRoot { .. } => eprintln!("dirwalk: {}", e),
            other => {
                tracing::debug!(error = ?other, "walk failed");
                let cause = std::error::Error::source(&other)
                    .map(|s| format!(": {}", s))
                    .unwrap_or_default();
                eprintln!("dirwalk: walk aborted: {}{}", other, cause);
            }
        }
        process::exit(1);
    }
}
