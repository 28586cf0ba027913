//! `tyx.json` loading and settings resolution.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::args::{CliArgs, OutputFormat};

pub const CONFIG_FILE_NAME: &str = "tyx.json";

/// Contents of a `tyx.json` file. Every field is optional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TyxConfig {
    #[serde(default)]
    pub suites: Vec<String>,
    pub format: Option<OutputFormat>,
    pub color: Option<bool>,
}

pub fn load_config(path: &Path) -> Result<TyxConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let config = serde_json::from_str(&source)
        .with_context(|| format!("failed to parse config: {}", path.display()))?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// `tyx.json` in `dir`, if present.
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    let candidate = dir.join(CONFIG_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

/// Load the config named by `--config`, else `tyx.json` in `cwd`.
///
/// An explicit path that cannot be read is an error; a missing implicit one
/// is not.
pub fn resolve_config(args: &CliArgs, cwd: &Path) -> Result<Option<TyxConfig>> {
    let path = match &args.config {
        Some(path) if path.is_absolute() => Some(path.clone()),
        Some(path) => Some(cwd.join(path)),
        None => find_config(cwd),
    };
    path.map(|path| load_config(&path)).transpose()
}

/// Effective run settings after merging flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Empty means every suite.
    pub suites: Vec<String>,
    pub format: OutputFormat,
    pub color: bool,
}

impl Settings {
    pub fn resolve(args: &CliArgs, config: Option<&TyxConfig>, is_terminal: bool) -> Self {
        let config = config.cloned().unwrap_or_default();
        let suites = if args.suites.is_empty() {
            config.suites
        } else {
            args.suites.clone()
        };
        let format = args.format.or(config.format).unwrap_or_default();
        let color = !args.no_color
            && format == OutputFormat::Text
            && config.color.unwrap_or(is_terminal);
        Settings {
            suites,
            format,
            color,
        }
    }
}
