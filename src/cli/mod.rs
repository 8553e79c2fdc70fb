//! Command-line interface for inspecting the category index.

pub mod commands;
pub mod output;
pub mod types;

use anyhow::{Context, Result};

use crate::application::bootstrap;
use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::logging::LoggerImpl;

pub use types::{Cli, Commands};

/// Resolve configuration from CLI flags, files and environment.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };

    if let Some(ref base_url) = cli.base_url {
        config.backend.base_url.clone_from(base_url);
        ConfigLoader::validate(&config).context("Invalid --base-url")?;
    }

    Ok(config)
}

/// Run a parsed command line to completion.
pub async fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let _logger = LoggerImpl::init(&config.logging)?;

    let cache = bootstrap(&config)
        .await
        .context("Failed to bootstrap category index")?;

    match cli.command {
        Commands::Resolve { slug } => commands::resolve::execute(&cache, &slug, cli.json).await,
        Commands::Show { slug } => commands::resolve::execute_show(&cache, &slug, cli.json).await,
        Commands::List { top_level } => commands::list::execute(&cache, top_level, cli.json).await,
        Commands::Children { slug } => {
            commands::list::execute_children(&cache, &slug, cli.json).await
        }
        Commands::Status => commands::status::execute(&cache, cli.json).await,
    }
}

/// Report a failed command and exit non-zero.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let body = serde_json::json!({ "error": format!("{err:#}") });
        eprintln!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1)
}
