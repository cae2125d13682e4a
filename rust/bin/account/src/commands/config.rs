//! `account config` commands.

use std::path::Path;

use anyhow::Result;

use crate::config::ClientConfig;

/// Update the given values and save.
pub fn set(server: Option<&str>, storage: Option<&str>, config_path: &Path) -> Result<()> {
    if server.is_none() && storage.is_none() {
        anyhow::bail!("Nothing to set. Pass --server and/or --storage.");
    }

    let mut config = ClientConfig::load(config_path)?;
    if let Some(server) = server {
        config.server = server.trim_end_matches('/').to_string();
    }
    if let Some(storage) = storage {
        config.storage = storage.to_string();
    }
    config.save(config_path)?;

    println!("Config saved to {}.", config_path.display());
    Ok(())
}

pub fn show(json_output: bool, config_path: &Path) -> Result<()> {
    let config = ClientConfig::load(config_path)?;
    let storage = config.storage_path();

    if json_output {
        let value = serde_json::json!({
            "server": config.server,
            "storage": storage.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let server = if config.server.is_empty() {
        "(not set)"
    } else {
        config.server.as_str()
    };
    println!("{:<10} {}", "server:", server);
    println!("{:<10} {}", "storage:", storage.display());
    Ok(())
}
