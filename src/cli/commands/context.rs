use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::{
    cli::args::CompareArgs,
    config::{Config, load_config},
};

/// Settings for one `compare` run after merging CLI > config file > defaults.
#[derive(Debug)]
pub struct CompareContext {
    pub root: PathBuf,
    pub config: Config,
}

impl CompareContext {
    /// Load the config found from `--root` upwards and apply CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns error if the config file cannot be parsed or, after overrides,
    /// fails validation.
    pub fn new(args: &CompareArgs) -> Result<Self> {
        let root = args.common.root.clone();

        let config_result = load_config(&root)?;
        match &config_result.path {
            Some(path) => tracing::debug!("using config {}", path.display()),
            None => tracing::debug!("no config file found, using defaults"),
        }

        let mut config = config_result.config;
        apply_overrides(&mut config, args);
        config.validate()?;

        Ok(Self { root, config })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn apply_overrides(config: &mut Config, args: &CompareArgs) {
    if let Some(ref text) = args.text {
        config.text_source = text.clone();
    }
    if !args.structured.is_empty() {
        config.structured_sources = args.structured.clone();
    }
    if !args.extensions.is_empty() {
        config.extensions = args.extensions.clone();
    }
    if let Some(key_mode) = args.key_mode {
        config.key_mode = key_mode;
    }
    if args.fail_on_diff {
        config.fail_on_diff = true;
    }
}
