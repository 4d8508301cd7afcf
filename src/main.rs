mod api;
mod config;
mod consts;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod runtime;
mod session;
mod ui;
mod workers;

use crate::config::{Config, get_config_path};
use crate::environment::Environment;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the dashboard
    Start {
        /// Backend API base URL, e.g. http://localhost:5000/api
        #[arg(long, value_name = "API_URL")]
        api_url: Option<String>,

        /// Seconds between refresh cycles
        #[arg(long, value_name = "SECONDS")]
        interval_secs: Option<u64>,

        /// Run without the terminal UI, logging events to the console
        #[arg(long)]
        headless: bool,

        /// Disable the dashboard background color
        #[arg(long)]
        no_background_color: bool,
    },
    /// Save a backend API base URL to the config file
    SetApiUrl {
        /// Backend API base URL to save
        #[arg(long, value_name = "API_URL")]
        url: String,
    },
    /// Delete the config file
    ClearConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let botdeck_env_str = std::env::var("BOTDECK_ENV").unwrap_or_default();
    let env_environment = botdeck_env_str
        .parse::<Environment>()
        .unwrap_or(Environment::default());

    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            api_url,
            interval_secs,
            headless,
            no_background_color,
        } => {
            // Resolution order: flag, then config file, then environment
            let environment = match api_url {
                Some(url) => url
                    .parse::<Environment>()
                    .map_err(|e| format!("Invalid API URL: {}", e))?,
                None => {
                    if config_path.exists() {
                        match Config::load_from_file(&config_path) {
                            Ok(config) => config
                                .api_url
                                .parse::<Environment>()
                                .unwrap_or(env_environment),
                            Err(_) => env_environment,
                        }
                    } else {
                        env_environment
                    }
                }
            };

            let refresh_interval = match interval_secs {
                Some(secs) => Duration::from_secs(secs.max(1)),
                None => consts::cli_consts::refresh::interval(),
            };

            let session = setup_session(environment, refresh_interval);
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, !no_background_color).await
            }
        }
        Command::SetApiUrl { url } => {
            // Validate before persisting
            let environment = url
                .parse::<Environment>()
                .map_err(|e| format!("Invalid API URL: {}", e))?;
            let config = Config::new(environment.api_base_url());
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            println!("Saved API URL: {}", environment.api_base_url());
            Ok(())
        }
        Command::ClearConfig => {
            println!("Clearing dashboard configuration file...");
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}
