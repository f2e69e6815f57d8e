//! Local configuration.

use crate::output::{self, OutputFormat};
use anyhow::{Context, Result};
use flexjet_config_and_utils::{Config, Paths};
use tracing::info;

/// Settings to change, from the command line.
#[derive(Debug, Default)]
pub struct ConfigUpdate {
    pub api_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl ConfigUpdate {
    /// Apply to `config`. Returns whether anything changed.
    fn apply(&self, config: &mut Config) -> bool {
        let mut changed = false;
        if let Some(url) = &self.api_url {
            changed |= config.api_base_url != *url;
            config.api_base_url = url.clone();
        }
        if let Some(secs) = self.timeout_secs {
            changed |= config.request_timeout_secs != secs;
            config.request_timeout_secs = secs;
        }
        changed
    }
}

/// Show the stored configuration, writing `update` to the config file first.
///
/// Only the file's contents are shown and saved; `FLEXJET_*` environment
/// overrides never end up on disk.
pub fn config(paths: &Paths, update: &ConfigUpdate, format: &OutputFormat) -> Result<()> {
    let config_file = paths.config_file();
    let mut stored = Config::load_stored(paths)
        .with_context(|| format!("Failed to load {}", config_file.display()))?;

    if update.apply(&mut stored) {
        stored.validate()?;
        stored
            .save(paths)
            .with_context(|| format!("Failed to write {}", config_file.display()))?;
        info!(path = %config_file.display(), "Configuration saved");
    }

    match format {
        OutputFormat::Json => output::print_json(&stored)?,
        OutputFormat::Text => {
            output::print_row("File", &config_file.display().to_string());
            output::print_row("API", &stored.api_base_url);
            output::print_row("Timeout", &format!("{}s", stored.request_timeout_secs));
            output::print_row("Log level", &stored.log_level);
        }
    }

    Ok(())
}
