//! `account`: profile and password management for the current user.
//!
//! Drives the profile page controller from the command line: flags and
//! prompts fill the form fields, status messages are printed as they change.

mod commands;
mod config;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Account CLI tool.
#[derive(Parser, Debug)]
#[command(name = "account", about = "Manage your account profile and password")]
struct Cli {
    /// Path to client config file (default: ~/.account/config.toml).
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
    /// Client configuration.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// The stored access token.
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Profile of the current user.
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Password of the current user.
    Password {
        #[command(subcommand)]
        action: PasswordAction,
    },

    /// Show version.
    Version,
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Set configuration values.
    Set {
        /// API base URL.
        #[arg(long)]
        server: Option<String>,
        /// Local storage database path.
        #[arg(long)]
        storage: Option<String>,
    },
    /// Show the configuration.
    Show,
}

#[derive(Subcommand, Debug)]
enum TokenAction {
    /// Store an access token.
    Set { token: String },
    /// Remove the stored access token.
    Clear,
    /// Report whether a token is stored.
    Status,
}

#[derive(Subcommand, Debug)]
enum ProfileAction {
    /// Load and print the profile.
    Show,
    /// Load the profile, apply the given values and submit.
    Update {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum PasswordAction {
    /// Change the password. Missing values are prompted for.
    Change {
        /// Current password. Prefer the interactive prompt.
        #[arg(long)]
        current: Option<String>,
        /// New password.
        #[arg(long)]
        new: Option<String>,
        /// New password again.
        #[arg(long)]
        confirm: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();
    let json_output = cli.output == "json";

    let config_path = cli
        .config
        .map(std::path::PathBuf::from)
        .unwrap_or_else(config::ClientConfig::default_path);

    let code = match cli.command {
        Commands::Config { action } => match action {
            ConfigAction::Set { server, storage } => {
                commands::config::set(server.as_deref(), storage.as_deref(), &config_path)?;
                ExitCode::SUCCESS
            }
            ConfigAction::Show => {
                commands::config::show(json_output, &config_path)?;
                ExitCode::SUCCESS
            }
        },

        Commands::Token { action } => {
            let config = config::ClientConfig::load(&config_path)?;
            match action {
                TokenAction::Set { token } => commands::token::set(&config, &token)?,
                TokenAction::Clear => commands::token::clear(&config)?,
                TokenAction::Status => commands::token::status(&config)?,
            }
            ExitCode::SUCCESS
        }

        Commands::Profile { action } => {
            let config = config::ClientConfig::load(&config_path)?;
            match action {
                ProfileAction::Show => commands::profile::show(&config, json_output).await?,
                ProfileAction::Update {
                    first_name,
                    last_name,
                    username,
                    email,
                } => {
                    let edits = commands::profile::Edits {
                        first_name,
                        last_name,
                        username,
                        email,
                    };
                    commands::profile::update(&config, edits).await?
                }
            }
        }

        Commands::Password { action } => match action {
            PasswordAction::Change {
                current,
                new,
                confirm,
            } => {
                let config = config::ClientConfig::load(&config_path)?;
                let current = prompt_if_missing(current, "Current password: ")?;
                let new = prompt_if_missing(new, "New password: ")?;
                let confirm = prompt_if_missing(confirm, "Confirm new password: ")?;
                commands::password::change(&config, &current, &new, &confirm).await?
            }
        },

        Commands::Version => {
            println!("account cli v{}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
    };

    Ok(code)
}

fn prompt_if_missing(value: Option<String>, prompt: &str) -> anyhow::Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(rpassword::prompt_password(prompt)?),
    }
}
