//! quill: the quill script runner.
//!
//! Usage:
//!   quill [FILE] [--mode <MODE>]
//!
//! Without FILE, the entry script comes from quill.json in the current
//! directory. Set QUILL_LOG (e.g. `QUILL_LOG=debug`) to see pipeline
//! tracing on stderr.

use clap::Parser as ClapParser;
use quill_driver::RunMode;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(ClapParser, Debug)]
#[command(name = "quill", about = "quill - a small scripting language runner", disable_version_flag = true)]
struct Cli {
    /// Script to run. Defaults to the entry named in quill.json.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Run mode: `normal` or `debug_scanner`.
    #[arg(long)]
    mode: Option<String>,

    /// Print the runner version.
    #[arg(short = 'v', long)]
    version: bool,
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn main() {
    let cli = Cli::parse();

    if cli.version {
        println!("quill Version {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    init_tracing();

    let mode = match cli.mode.as_deref() {
        Some(name) => match RunMode::from_name(name) {
            Some(mode) => Some(mode),
            None => {
                print_error(&format!(
                    "unknown mode `{name}` (expected `normal` or `debug_scanner`)"
                ));
                process::exit(1);
            }
        },
        None => None,
    };

    if let Err(e) = quill_driver::resolve_and_run(cli.file, mode) {
        print_error(&e.to_string());
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("QUILL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_error(msg: &str) {
    if atty_is_terminal() {
        eprintln!("{}{}error{}: {}", BOLD, RED, RESET, msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

fn atty_is_terminal() -> bool {
    // Simple check - on Unix, check if stderr is a terminal
    #[cfg(unix)]
    {
        unsafe { libc::isatty(2) != 0 }
    }
    #[cfg(not(unix))]
    {
        true // Assume terminal on other platforms
    }
}
