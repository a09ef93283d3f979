use std::fs;
use std::path::{Path, PathBuf};

use super::core::CalculatorConfig;
use super::validation::validate_config;
use crate::effects::run_config_validation;
use crate::errors::{ROIError, ROIResult};

/// File name searched for in the working directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = ".copilot-roi.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse and validate config from a TOML string.
pub fn parse_and_validate_config(contents: &str, origin: &Path) -> ROIResult<CalculatorConfig> {
    let config =
        toml::from_str::<CalculatorConfig>(contents).map_err(|e| ROIError::ConfigParse {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;

    run_config_validation(validate_config(&config))?;
    Ok(config)
}

/// Load an explicitly requested config file. Every failure is an error.
pub fn load_config_from_path(path: &Path) -> ROIResult<CalculatorConfig> {
    let contents = fs::read_to_string(path).map_err(|e| ROIError::io(path, e))?;
    let config = parse_and_validate_config(&contents, path)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try a discovered config file; problems are logged and skipped.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<CalculatorConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents, config_path) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Directory ancestors of `start`, nearest first, up to `max_depth` entries.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// `<user config dir>/copilot-roi/config.toml`, when the platform has one.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("copilot-roi").join("config.toml"))
}

/// Candidate config files in lookup order for a starting directory.
pub fn config_candidates(start: PathBuf) -> Vec<PathBuf> {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .chain(user_config_path())
        .collect()
}

/// Find the first usable config starting from `start`.
pub fn discover_config(start: PathBuf) -> CalculatorConfig {
    config_candidates(start)
        .iter()
        .find_map(|path| try_load_config_from_path(path))
        .unwrap_or_else(|| {
            log::debug!("No config found. Using default config.");
            CalculatorConfig::default()
        })
}

/// Load the explicit config when given, otherwise discover one from the
/// current directory.
pub fn load_config(explicit: Option<&Path>) -> ROIResult<CalculatorConfig> {
    if let Some(path) = explicit {
        return load_config_from_path(path);
    }

    match std::env::current_dir() {
        Ok(dir) => Ok(discover_config(dir)),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            Ok(CalculatorConfig::default())
        }
    }
}
