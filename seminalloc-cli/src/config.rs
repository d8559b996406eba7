/// Config file loading and creation for the seminalloc CLI.
///
/// Config lives at ~/.config/seminalloc/config.toml.
/// All fields are optional — CLI args override config values.
use serde::Deserialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::bail;

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SeminallocConfig {
    pub topic_file: Option<PathBuf>,
    pub seed: Option<u64>,
    pub json: Option<bool>,
    pub max_swaps: Option<usize>,
}

const DEFAULT_CONFIG_TEMPLATE: &str = "\
# seminalloc configuration
# All values here can be overridden by CLI flags.

# File with one topic per line (or a JSON array of topic names)
# topic_file = \"/path/to/topics.txt\"

# Fixed RNG seed for reproducible allocations. Unset = fresh seed every run.
# seed = 42

# Print JSON instead of \"name: topic (Rank n)\" lines
# json = false

# Upper bound on improving swaps per run. Unset = participants^2 * topics^2.
# max_swaps = 100000
";

/// Returns the default config path: ~/.config/seminalloc/config.toml.
/// `None` when HOME is unset or empty.
pub fn config_path() -> Option<PathBuf> {
    config_path_in(std::env::var_os("HOME"))
}

fn config_path_in(home: Option<OsString>) -> Option<PathBuf> {
    let home = home.filter(|h| !h.is_empty())?;
    Some(PathBuf::from(home).join(".config").join("seminalloc").join("config.toml"))
}

/// Load the config at `path`, or at the default path when `path` is `None`.
/// Without a usable path (no --config, no HOME) every setting is unset.
pub fn load_optional_config(path: Option<PathBuf>) -> SeminallocConfig {
    match path.or_else(config_path) {
        Some(path) => load_config(&path),
        None => {
            tracing::debug!("HOME not set and no --config given, running without a config file");
            SeminallocConfig::default()
        }
    }
}

/// Parse config text.
pub fn parse_config(content: &str) -> Result<SeminallocConfig, toml::de::Error> {
    toml::from_str(content)
}

/// Load config from a file path. Returns default (all None) if file doesn't exist.
pub fn load_config(path: &Path) -> SeminallocConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_config(&content)
            .unwrap_or_else(|e| bail(format!("Failed to parse config at {}: {e}", path.display()))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => SeminallocConfig::default(),
        Err(e) => bail(format!("Failed to read config at {}: {e}", path.display())),
    }
}

/// Create the default config file. Errors if it already exists.
pub fn create_default_config() -> PathBuf {
    let path = config_path()
        .unwrap_or_else(|| bail("HOME environment variable not set, cannot locate the config directory"));

    if path.exists() {
        bail(format!("Config file already exists at {}", path.display()));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| bail(format!("Failed to create directory {}: {e}", parent.display())));
    }

    std::fs::write(&path, DEFAULT_CONFIG_TEMPLATE)
        .unwrap_or_else(|e| bail(format!("Failed to write config to {}: {e}", path.display())));

    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_parses_to_defaults() {
        assert_eq!(parse_config(DEFAULT_CONFIG_TEMPLATE).unwrap(), SeminallocConfig::default());
    }

    #[test]
    fn test_parse_config_values() {
        let cfg = parse_config("topic_file = \"topics.txt\"\nseed = 7\njson = true\n").unwrap();
        assert_eq!(cfg.topic_file, Some(PathBuf::from("topics.txt")));
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.json, Some(true));
        assert_eq!(cfg.max_swaps, None);
    }

    #[test]
    fn test_parse_config_rejects_unknown_keys() {
        assert!(parse_config("seeed = 7\n").is_err());
    }

    #[test]
    fn test_config_path_without_home() {
        assert_eq!(config_path_in(None), None);
        assert_eq!(config_path_in(Some(OsString::new())), None);
        assert_eq!(
            config_path_in(Some(OsString::from("/home/ada"))),
            Some(PathBuf::from("/home/ada/.config/seminalloc/config.toml"))
        );
    }

    #[test]
    fn test_explicit_missing_config_is_default() {
        let path = std::env::temp_dir().join("seminalloc-test-explicit-missing.toml");
        let _ = std::fs::remove_file(&path);
        assert_eq!(load_optional_config(Some(path)), SeminallocConfig::default());
    }

    #[test]
    fn test_missing_config_is_default() {
        let path = std::env::temp_dir().join("seminalloc-test-missing-config.toml");
        let _ = std::fs::remove_file(&path);
        assert_eq!(load_config(&path), SeminallocConfig::default());
    }
}
