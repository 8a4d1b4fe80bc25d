use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_EXTENSIONS, KeyMode, ReferencePattern, scanner::is_glob_pattern};

pub const CONFIG_FILE_NAME: &str = ".depdiffrc.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_text_source")]
    pub text_source: String,
    #[serde(default = "default_structured_sources")]
    pub structured_sources: Vec<String>,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub key_mode: KeyMode,
    #[serde(default)]
    pub fail_on_diff: bool,
}

fn default_text_source() -> String {
    "input.param".to_string()
}

fn default_structured_sources() -> Vec<String> {
    vec!["input.json".to_string()]
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            text_source: default_text_source(),
            structured_sources: default_structured_sources(),
            extensions: default_extensions(),
            key_mode: KeyMode::default(),
            fail_on_diff: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if the extension list is empty or holds something other
    /// than a plain alphanumeric extension, or if a structured source glob is invalid.
    pub fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            bail!("'extensions' must list at least one file extension");
        }
        for ext in &self.extensions {
            if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
                bail!("Invalid extension in 'extensions': \"{ext}\" (letters and digits, no dot)");
            }
        }

        if self.text_source.trim().is_empty() {
            bail!("'textSource' must not be empty");
        }

        // Only entries with wildcards are globs; others are literal file paths.
        for pattern in &self.structured_sources {
            if is_glob_pattern(pattern) {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'structuredSources': \"{pattern}\"")
                })?;
            }
        }

        Ok(())
    }

    /// Compile the reference pattern for the configured extensions.
    pub fn reference_pattern(&self) -> Result<ReferencePattern> {
        ReferencePattern::new(&self.extensions)
            .context("Failed to build the file reference pattern")
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path the config was read from, `None` if using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
