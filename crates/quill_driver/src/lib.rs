//! quill_driver: pipeline orchestration.
//!
//! Resolves run options, loads and decodes the entry script, and feeds
//! it through the scanner and, depending on the mode, the parser and
//! interpreter.

pub mod dump;
pub mod options;
pub mod source;

use bumpalo::Bump;
use lasso::Rodeo;
use quill_diagnostics::{ParseError, RuntimeError, ScanError};
use quill_interpreter::Interpreter;
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;

pub use options::{ConfigError, ProjectConfig, RunMode, RunOptions};
pub use source::{SourceError, SourceText};

/// Any failure the driver can surface to the CLI.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Resolve options from command-line values plus `quill.json`, then
/// run. The CLI's whole pipeline in one call.
pub fn resolve_and_run(entry: Option<PathBuf>, mode: Option<RunMode>) -> Result<(), DriverError> {
    let options = RunOptions::resolve(entry, mode)?;
    run(&options)
}

/// Run the entry script, writing program output to stdout.
pub fn run(options: &RunOptions) -> Result<(), DriverError> {
    run_with_output(options, &mut io::stdout())
}

/// As [`run`], but with the output stream injected. The token table of
/// [`RunMode::DebugScanner`] goes to the same stream as `print` output.
pub fn run_with_output<W: Write>(options: &RunOptions, out: &mut W) -> Result<(), DriverError> {
    let source = source::load(&options.entry)?;
    tracing::debug!(
        path = %source.path().display(),
        code_points = source.code_points().len(),
        mode = %options.mode,
        "loaded entry script"
    );

    let result = quill_scanner::scan(source.code_points());
    if let Some(error) = result.error {
        // A scan error aborts every mode; the partial tokens are dropped.
        tracing::debug!(tokens = result.tokens.len(), "scan failed");
        return Err(error.into());
    }
    let tokens = result.tokens;
    tracing::debug!(tokens = tokens.len(), "scan complete");

    match options.mode {
        RunMode::DebugScanner => {
            out.write_all(dump::render(&tokens).as_bytes())
                .map_err(RuntimeError::Io)?;
            Ok(())
        }
        RunMode::Normal => {
            let arena = Bump::new();
            let mut interner = Rodeo::new();
            let program = quill_parser::parse(&arena, &mut interner, &tokens)?;
            let mut interpreter = Interpreter::with_output(&interner, out);
            interpreter.run(&program)?;
            Ok(())
        }
    }
}
