//! CLI entry point for dirlist

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, ArgGroup, Parser, ValueEnum};
use dirlist::{
    ConsoleFormatter, DisplayMode, JsonFormatter, ListConfig, OutputConfig, Result, run,
};
use tracing::Level;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    }
}

#[derive(Parser, Debug)]
#[command(name = "dirlist")]
#[command(about = "List directories, files and file extensions with colored output")]
#[command(version)]
#[command(group(
    ArgGroup::new("mode")
        .args(["dirs_only", "by_suffix", "suffixes"])
        .multiple(false)
))]
struct Args {
    /// Directory to list
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Descend into subdirectories
    #[arg(short, long)]
    recurse: bool,

    /// List directories only
    #[arg(short = 'd', long = "dirs-only")]
    dirs_only: bool,

    /// Group files by extension
    #[arg(short = 'x', long = "by-suffix")]
    by_suffix: bool,

    /// List the distinct extensions only
    #[arg(long = "suffixes")]
    suffixes: bool,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn execute(config: &ListConfig, output_config: &OutputConfig) -> Result<()> {
    if output_config.json {
        run(config, &mut JsonFormatter::stdout())
    } else {
        run(config, &mut ConsoleFormatter::stdout(output_config))
    }
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(args.verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = ListConfig {
        root: args.root,
        recurse: args.recurse,
        mode: DisplayMode::from_flags(args.dirs_only, args.by_suffix, args.suffixes),
    };
    let output_config = OutputConfig {
        use_color: !args.json && should_use_color(args.color),
        json: args.json,
    };

    if let Err(e) = execute(&config, &output_config) {
        eprintln!("dirlist: {}", e);
        process::exit(1);
    }
}
