//! CLI entry point for fsroutes

use std::fs;
use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

use clap::{ArgAction, Parser, ValueEnum};
use fsroutes::{
    AppConfig, AppRoutes, AppsConfig, OutputConfig, OutputFormat, Program, ProgramPrinter,
    RouteError, RouteWatcher, ScanConfig, WatchConfig, printer_for,
};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const APP_NAME: &str = "routes";

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
            // Status lines go to stderr
            std::io::stderr().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "fsroutes")]
#[command(about = "Generate a routes module from a directory of entry points")]
#[command(version)]
struct Args {
    /// Directory containing the route entry points
    dir: PathBuf,

    /// File to write the routes module to (stdout if omitted)
    output: Option<PathBuf>,

    /// Output the program structure as JSON instead of JavaScript
    #[arg(long = "json")]
    json: bool,

    /// Spaces per indentation level
    #[arg(long = "indent", default_value = "2")]
    indent: usize,

    /// Ignore entries matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Number of parallel workers for scanning
    /// (0 = auto-detect, 1 = sequential, N = use N workers)
    #[arg(short = 'j', long = "jobs", default_value = "0")]
    jobs: usize,

    /// Keep OUTPUT up to date as entry points are created and deleted
    #[arg(short = 'w', long = "watch", requires = "output")]
    watch: bool,

    /// Quiet period before regenerating after a change (e.g. 100ms, 1s)
    #[arg(long = "debounce", value_name = "DURATION", default_value = "100ms", value_parser = parse_duration_string)]
    debounce: Duration,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

/// Parse a duration string like "100ms" or "2s" with humantime.
fn parse_duration_string(s: &str) -> Result<Duration, String> {
    humantime::parse_duration(s.trim()).map_err(|e| e.to_string())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("fsroutes: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> fsroutes::Result<()> {
    let root = fs::canonicalize(&args.dir).map_err(|e| RouteError::io(&args.dir, e))?;

    let apps = AppRoutes::scan(AppsConfig {
        apps: vec![AppConfig {
            name: APP_NAME.to_string(),
            root,
        }],
        scan: ScanConfig {
            ignore_patterns: args.ignore.clone(),
            parallel_workers: args.jobs,
        },
    })?;

    let printer = printer_for(&OutputConfig {
        format: if args.json {
            OutputFormat::Json
        } else {
            OutputFormat::JavaScript
        },
        indent_width: args.indent,
    });
    let use_color = should_use_color(args.color);

    let program = apps.render(APP_NAME)?;
    let code = printer.print(&program)?;

    let Some(output) = &args.output else {
        print!("{}", code);
        return Ok(());
    };

    write_if_changed(output, &code)?;
    print_status(use_color, "Wrote", output, &program);

    if !args.watch {
        return Ok(());
    }

    let watcher = RouteWatcher::new(
        &apps,
        WatchConfig {
            debounce: args.debounce,
        },
    )?;
    info!(output = %output.display(), "watching for route changes");

    watcher.run(|name| {
        let program = apps.render(name)?;
        let code = printer.print(&program)?;
        if write_if_changed(output, &code)? {
            print_status(use_color, "Updated", output, &program);
        }
        Ok(())
    });

    Ok(())
}

/// Write `contents` unless the file already holds exactly that.
fn write_if_changed(path: &Path, contents: &str) -> fsroutes::Result<bool> {
    if fs::read_to_string(path).is_ok_and(|existing| existing == contents) {
        debug!(path = %path.display(), "output unchanged");
        return Ok(false);
    }
    fs::write(path, contents).map_err(|e| RouteError::io(path, e))?;
    Ok(true)
}

fn print_status(use_color: bool, verb: &str, output: &Path, program: &Program) {
    let choice = if use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(choice);

    // Status output is best effort
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true));
    let _ = write!(stderr, "{:>8}", verb);
    let _ = stderr.reset();
    let _ = writeln!(
        stderr,
        " {} ({} entry points)",
        output.display(),
        program.imports.len()
    );
}
