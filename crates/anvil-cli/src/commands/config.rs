//! `anvil config`: inspect the effective configuration.

use crate::{
    cli::ConfigCommands,
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = config
                .get(&key)
                .ok_or(CliError::UnknownConfigKey { key: key.clone() })?;
            output.print(&value)?;
            output.json(&serde_json::json!({ "key": key, "value": value }))?;
        }

        ConfigCommands::List => {
            let text = config.to_toml().map_err(|e| CliError::ConfigError {
                message: format!("Failed to serialise config: {e}"),
                source: Some(Box::new(e)),
            })?;
            output.print(text.trim_end())?;
            output.json(&config)?;
        }

        ConfigCommands::Path => {
            match AppConfig::global_path() {
                Some(path) => output.print(&format!("global: {}", path.display()))?,
                None => output.print("global: <unavailable>")?,
            }
            output.print(&format!("local:  {LOCAL_CONFIG_FILE}"))?;
            output.print("env:    ANVIL__<SECTION>__<KEY>")?;
        }
    }

    Ok(())
}
