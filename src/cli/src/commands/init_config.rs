//! Init-config command.

use crate::config::FrontendConfig;
use std::path::Path;
use tinytoken_core::CoreError;
use tracing::info;

/// Writes `config` to `path`. Refuses to replace an existing file unless `force` is set.
pub async fn run<P: AsRef<Path>>(
    config: &FrontendConfig,
    path: P,
    force: bool,
) -> Result<(), CoreError> {
    let path = path.as_ref();
    if path.exists() && !force {
        return Err(CoreError::ConfigError(format!(
            "{} already exists. Pass --force to overwrite it.",
            path.display()
        )));
    }

    config.validate()?;
    config.to_file(path)?;
    info!("Configuration saved to {}", path.display());

    Ok(())
}
