use std::fs;

use anyhow::{Context, Result, bail};

use super::{CommandResult, CommandSummary, InitSummary};
use crate::{
    cli::args::InitCommand,
    config::{CONFIG_FILE_NAME, default_config_json},
    core::resolve_path,
};

/// Write the default configuration into `--root`.
pub fn init(cmd: InitCommand) -> Result<CommandResult> {
    let config_path = resolve_path(&cmd.common.root, CONFIG_FILE_NAME);

    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(&config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    Ok(CommandResult {
        summary: CommandSummary::Init(InitSummary { path: config_path }),
        failed_sources: 0,
        difference_count: 0,
        fail_on_diff: false,
    })
}
