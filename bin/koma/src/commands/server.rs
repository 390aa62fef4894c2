//! Client configuration commands.

use std::path::Path;

use anyhow::Result;
use koma_client::CredentialStore;

use crate::config::{token_path, ClientConfig};

/// Point the client at a different server.
pub fn set_server(url: &str, config_path: &Path) -> Result<()> {
    let mut config = ClientConfig::load(config_path)?;
    config.server = url.trim_end_matches('/').to_string();
    config.save(config_path)?;
    println!("Server set to {}.", config.server);
    Ok(())
}

/// Print the active configuration.
pub fn show(config_path: &Path) -> Result<()> {
    let config = ClientConfig::load(config_path)?;
    let credentials = CredentialStore::new(token_path(config_path));

    println!("Config:  {}", config_path.display());
    println!("Server:  {}", config.server);
    println!(
        "Token:   {}",
        if credentials.has_token() {
            "stored"
        } else {
            "none"
        }
    );
    Ok(())
}
