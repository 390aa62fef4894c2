pub mod account;
pub mod comics;
pub mod server;

use std::path::Path;

use anyhow::Result;
use koma_client::{ApiClient, CredentialStore};

use crate::config::{token_path, ClientConfig};

/// API client against the configured server, with the token file sitting
/// next to the config file.
pub(crate) fn build_api(config_path: &Path) -> Result<ApiClient> {
    let config = ClientConfig::load(config_path)?;
    let credentials = CredentialStore::new(token_path(config_path));
    Ok(ApiClient::new(config.server, credentials))
}
