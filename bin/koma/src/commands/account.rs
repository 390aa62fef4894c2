//! Account commands: signup, login, logout, whoami, delete, status.

use std::path::Path;

use anyhow::Result;
use koma_client::{validate, Session, SignupRequest};

use super::build_api;
use crate::config::ClientConfig;

/// Create an account and sign in.
///
/// Validation runs before anything goes on the wire: an unmet password
/// rule, a mismatched confirmation or unaccepted terms stop the signup
/// locally.
pub async fn signup(
    signup: SignupRequest,
    confirmation: &str,
    agreed_to_terms: bool,
    config_path: &Path,
) -> Result<()> {
    let problems = validate::validate_signup(&signup.password, confirmation, agreed_to_terms);
    if !problems.is_empty() {
        anyhow::bail!("Cannot sign up:\n  - {}", problems.join("\n  - "));
    }

    let mut session = Session::new(build_api(config_path)?);
    session.signup(&signup).await?;

    if let Some(user) = session.user() {
        println!("Welcome to Koma, {}!", user.name);
        println!("Signed in as {}.", user.username);
    }
    Ok(())
}

/// Login with a username or email.
pub async fn login(identifier: &str, password: &str, config_path: &Path) -> Result<()> {
    let mut session = Session::new(build_api(config_path)?);
    session.login(identifier, password).await?;

    if let Some(user) = session.user() {
        println!("Logged in as {} ({}).", user.username, user.email);
    }
    println!(
        "Token saved to {}.",
        session.api().credentials().path().display()
    );
    Ok(())
}

/// Logout — best-effort against the server, the local token is dropped
/// either way.
pub async fn logout(config_path: &Path) -> Result<()> {
    let mut session = Session::new(build_api(config_path)?);
    session.logout().await;
    println!("Logged out.");
    Ok(())
}

/// Show the user behind the stored token.
pub async fn whoami(output_json: bool, config_path: &Path) -> Result<()> {
    let api = build_api(config_path)?;
    let user = api.current_user().await?;

    if output_json {
        println!("{}", serde_json::to_string_pretty(&user)?);
    } else {
        println!("{:10} {}", "id:", user.id);
        println!("{:10} {}", "name:", user.name);
        println!("{:10} {}", "username:", user.username);
        println!("{:10} {}", "email:", user.email);
    }
    Ok(())
}

/// Permanently delete the account. Confirmation happens in main.
pub async fn delete_account(config_path: &Path) -> Result<()> {
    let mut session = Session::new(build_api(config_path)?);
    session.delete_account().await?;
    println!("Account deleted.");
    Ok(())
}

/// Check server and session status.
pub async fn status(config_path: &Path) -> Result<()> {
    let config = ClientConfig::load(config_path)?;
    let api = build_api(config_path)?;

    println!("Server:  {}", config.server);

    if !api.credentials().has_token() {
        println!("Session: not logged in");
        return Ok(());
    }

    match api.current_user().await {
        Ok(user) => println!("Session: logged in as {}", user.username),
        Err(e) if e.is_unauthorized() => {
            // The rejected token has already been dropped by the SDK.
            println!("Session: stored token was rejected ({}), logged out", e);
        }
        Err(e) => println!("Session: cannot verify ({})", e),
    }
    Ok(())
}
