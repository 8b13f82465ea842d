//! Run options and the optional `quill.json` project file.

use serde::Deserialize;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name probed for project configuration.
pub const CONFIG_FILE: &str = "quill.json";

/// How the driver treats the entry script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    /// Scan, parse, and interpret.
    #[default]
    Normal,
    /// Stop after scanning and print the token table.
    DebugScanner,
}

impl RunMode {
    pub fn as_str(self) -> &'static str {
        match self {
            RunMode::Normal => "normal",
            RunMode::DebugScanner => "debug_scanner",
        }
    }

    /// Inverse of [`RunMode::as_str`].
    pub fn from_name(name: &str) -> Option<RunMode> {
        match name {
            "normal" => Some(RunMode::Normal),
            "debug_scanner" => Some(RunMode::DebugScanner),
            _ => None,
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything [`crate::run`] needs.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub entry: PathBuf,
    pub mode: RunMode,
}

/// The recognized shape of `quill.json`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Script to run when none is given on the command line, relative
    /// to the config file.
    #[serde(default)]
    pub entry: Option<PathBuf>,
    #[serde(default)]
    pub mode: Option<RunMode>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read `{}`", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse `{}`: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("`{}` names no entry script and none was given on the command line", .path.display())]
    MissingEntry { path: PathBuf },
    #[error("no script given and no {CONFIG_FILE} in the current directory")]
    NoInput,
}

impl RunOptions {
    /// Combine command-line values with whatever `quill.json` applies.
    ///
    /// With an explicit script, a config next to it may still supply a
    /// default mode. Without one, `quill.json` in the current directory
    /// must name the entry. Command-line values always win.
    pub fn resolve(
        entry: Option<PathBuf>,
        mode: Option<RunMode>,
    ) -> Result<RunOptions, ConfigError> {
        match entry {
            Some(entry) => {
                let config_path = entry
                    .parent()
                    .unwrap_or_else(|| Path::new(""))
                    .join(CONFIG_FILE);
                let config = if config_path.is_file() {
                    load_config(&config_path)?
                } else {
                    ProjectConfig::default()
                };
                Ok(RunOptions {
                    entry,
                    mode: mode.or(config.mode).unwrap_or_default(),
                })
            }
            None => {
                let config_path = PathBuf::from(CONFIG_FILE);
                if !config_path.is_file() {
                    return Err(ConfigError::NoInput);
                }
                let config = load_config(&config_path)?;
                let entry = match config.entry {
                    Some(entry) => entry,
                    None => return Err(ConfigError::MissingEntry { path: config_path }),
                };
                Ok(RunOptions {
                    entry,
                    mode: mode.or(config.mode).unwrap_or_default(),
                })
            }
        }
    }
}

/// Parse a `quill.json` file.
pub fn load_config(path: &Path) -> Result<ProjectConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<ProjectConfig, serde_json::Error> {
        serde_json::from_str(text)
    }

    #[test]
    fn parses_full_config() {
        let config = parse(r#"{"entry": "main.quill", "mode": "debug_scanner"}"#).unwrap();
        assert_eq!(config.entry.as_deref(), Some(Path::new("main.quill")));
        assert_eq!(config.mode, Some(RunMode::DebugScanner));
    }

    #[test]
    fn empty_config_is_valid() {
        let config = parse("{}").unwrap();
        assert!(config.entry.is_none());
        assert!(config.mode.is_none());
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(parse(r#"{"entri": "main.quill"}"#).is_err());
    }

    #[test]
    fn rejects_unknown_modes() {
        assert!(parse(r#"{"mode": "fast"}"#).is_err());
    }

    #[test]
    fn mode_spellings_round_trip() {
        for mode in [RunMode::Normal, RunMode::DebugScanner] {
            assert_eq!(RunMode::from_name(mode.as_str()), Some(mode));
        }
        assert_eq!(RunMode::default(), RunMode::Normal);
        assert!(RunMode::from_name("scanner").is_none());
    }

    #[test]
    fn no_entry_and_no_cwd_config_is_rejected() {
        // The test process runs from the crate root, which has no quill.json.
        assert!(matches!(
            RunOptions::resolve(None, None),
            Err(ConfigError::NoInput)
        ));
    }
}
