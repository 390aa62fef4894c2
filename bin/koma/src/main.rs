//! `koma` — CLI client for the Koma AI manga service.
//!
//! Sign up, log in, browse the feed and generate comics from the
//! terminal. The session lives here: one `Session` per invocation,
//! constructed at the entry point and handed to the command that needs it.

mod commands;
mod config;

use clap::{Parser, Subcommand};
use koma_client::{SignupRequest, View};

/// Koma CLI tool.
#[derive(Parser, Debug)]
#[command(name = "koma", about = "Koma CLI client")]
struct Cli {
    /// Path to client config file (default: ~/.koma/config.toml).
    #[arg(long = "config", global = true)]
    config: Option<String>,

    /// Output format: table or json.
    #[arg(long = "output", short = 'o', global = true, default_value = "table")]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create an account.
    Signup {
        /// Full name.
        #[arg(long)]
        name: Option<String>,
        /// Email address.
        #[arg(long)]
        email: Option<String>,
        /// Username.
        #[arg(long)]
        username: Option<String>,
        /// Date of birth, YYYY-MM-DD.
        #[arg(long)]
        dob: Option<String>,
        /// Generation API key.
        #[arg(long = "api-key")]
        api_key: Option<String>,
        /// Password (not recommended — use the interactive prompt).
        #[arg(long)]
        password: Option<String>,
        /// Accept the terms of service.
        #[arg(long = "agree-terms")]
        agree_terms: bool,
    },

    /// Log in with a username or email.
    Login {
        /// Username or email.
        identifier: Option<String>,
        /// Password (not recommended — use the interactive prompt).
        #[arg(long)]
        password: Option<String>,
    },

    /// Log out and drop the stored token.
    Logout,

    /// Show the signed-in user.
    Whoami,

    /// Permanently delete the account.
    DeleteAccount {
        /// Skip confirmation.
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// List comics.
    List {
        /// View: explore, top, liked or library.
        view: View,
    },

    /// Generate a comic from a prompt.
    Generate {
        /// The prompt, e.g. "a ninja story".
        prompt: Vec<String>,
    },

    /// Like or unlike a comic.
    Like {
        /// Comic id.
        comic_id: String,
        /// View to resolve the comic in.
        #[arg(long, default_value = "explore")]
        view: View,
    },

    /// Manage client configuration.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Check server and session status.
    Status,

    /// Show version.
    Version,
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Set the server base URL.
    SetServer { url: String },
    /// Print the active configuration.
    Show,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let config_path = cli
        .config
        .map(std::path::PathBuf::from)
        .unwrap_or_else(config::ClientConfig::default_path);
    let json_output = cli.output == "json";

    match cli.command {
        Commands::Signup {
            name,
            email,
            username,
            dob,
            api_key,
            password,
            agree_terms,
        } => {
            let name = name.unwrap_or_else(|| prompt("Full name"));
            let email = email.unwrap_or_else(|| prompt("Email"));
            let username = username.unwrap_or_else(|| prompt("Username"));
            let dob = dob.unwrap_or_else(|| prompt("Date of birth (YYYY-MM-DD)"));
            let api_key = api_key.unwrap_or_else(|| prompt("Generation API key"));

            let (password, confirmation) = match password {
                Some(p) => {
                    let confirmation = p.clone();
                    (p, confirmation)
                }
                None => {
                    let p = rpassword::prompt_password("Password: ").unwrap_or_default();
                    let c = rpassword::prompt_password("Confirm password: ").unwrap_or_default();
                    (p, c)
                }
            };

            let agree_terms = agree_terms || confirm("Agree to the terms of service?");

            let signup = SignupRequest {
                name,
                email,
                username,
                dob,
                password,
                api: api_key,
            };
            commands::account::signup(signup, &confirmation, agree_terms, &config_path).await?;
        }

        Commands::Login {
            identifier,
            password,
        } => {
            let identifier = identifier.unwrap_or_else(|| prompt("Username or email"));
            let password = password
                .unwrap_or_else(|| rpassword::prompt_password("Password: ").unwrap_or_default());
            commands::account::login(&identifier, &password, &config_path).await?;
        }

        Commands::Logout => {
            commands::account::logout(&config_path).await?;
        }

        Commands::Whoami => {
            commands::account::whoami(json_output, &config_path).await?;
        }

        Commands::DeleteAccount { yes } => {
            if !yes && !confirm("Permanently delete your account?") {
                println!("Cancelled.");
                return Ok(());
            }
            commands::account::delete_account(&config_path).await?;
        }

        Commands::List { view } => {
            commands::comics::list(view, json_output, &config_path).await?;
        }

        Commands::Generate { prompt } => {
            let prompt = prompt.join(" ");
            if prompt.trim().is_empty() {
                anyhow::bail!("Provide a prompt, e.g. `koma generate a ninja story`.");
            }
            commands::comics::generate(&prompt, json_output, &config_path).await?;
        }

        Commands::Like { comic_id, view } => {
            commands::comics::like(&comic_id, view, &config_path).await?;
        }

        Commands::Config { action } => match action {
            ConfigAction::SetServer { url } => {
                commands::server::set_server(&url, &config_path)?;
            }
            ConfigAction::Show => {
                commands::server::show(&config_path)?;
            }
        },

        Commands::Status => {
            commands::account::status(&config_path).await?;
        }

        Commands::Version => {
            println!("koma cli v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn prompt(label: &str) -> String {
    eprint!("{label}: ");
    let mut s = String::new();
    std::io::stdin().read_line(&mut s).unwrap_or_default();
    s.trim().to_string()
}

fn confirm(question: &str) -> bool {
    eprint!("{question} [y/N]: ");
    let mut s = String::new();
    std::io::stdin().read_line(&mut s).unwrap_or_default();
    s.trim().eq_ignore_ascii_case("y")
}
