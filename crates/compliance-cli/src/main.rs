use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::EnvFilter;

mod config;
mod sub_commands;

use crate::config::Settings;

const DEFAULT_WORK_DIR: &str = ".compliance-cli";

/// Query compliance data types from a metadata server
#[derive(Parser)]
#[command(name = "compliance-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the config file
    #[arg(short, long, env = "COMPLIANCE_CONFIG")]
    config: Option<PathBuf>,
    /// Logging level
    #[arg(short, long, default_value = "warn")]
    log_level: Level,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List compliance data types
    DataTypes(sub_commands::data_types::DataTypesSubCommand),
    /// Show a single compliance data type
    DataType(sub_commands::data_type::DataTypeSubCommand),
    /// Print the response headers of a server path
    Headers(sub_commands::headers::HeadersSubCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Cli = Cli::parse();
    let default_filter = args.log_level;

    let hyper_filter = "hyper=warn,reqwest=warn";

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},{}", default_filter, hyper_filter)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config_path = args
        .config
        .or_else(|| config::default_config_path(DEFAULT_WORK_DIR));

    let settings = Settings::new(config_path)?;
    tracing::debug!("Server url: {}", settings.server.url);

    let client = settings.http_client()?;
    let server_url = settings.server_url()?;
    let credentials = settings.auth.credentials;

    match &args.command {
        Commands::DataTypes(sub_command_args) => {
            sub_commands::data_types::data_types(
                &client,
                &server_url,
                credentials,
                sub_command_args,
            )
            .await
        }
        Commands::DataType(sub_command_args) => {
            sub_commands::data_type::data_type(&client, &server_url, credentials, sub_command_args)
                .await
        }
        Commands::Headers(sub_command_args) => {
            sub_commands::headers::headers(&client, &server_url, credentials, sub_command_args)
                .await
        }
    }
}
