mod email;
mod relay;
mod server_config;
mod web_server;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use common::config::{ConfigManager, FileContentConfigProvider};
use common::logger::{self, LogTarget};
use common::{log, log_error};
use email::{MailIdentities, ResendClient};
use relay::RelayState;
use server_config::{DEFAULT_CONFIG_FILE, ServerConfig};

#[derive(Parser)]
#[command(name = "portfolio_server", about = "Relays portfolio contact form submissions by email")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

async fn wait_for_ctrl_c() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log!("Shutdown signal received, finishing in-flight requests..."),
        Err(e) => {
            log_error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Relay".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, LogTarget::Stdout);

    let config_manager: ConfigManager<FileContentConfigProvider, ServerConfig> =
        ConfigManager::from_yaml_file(&args.config);
    let config = config_manager.get_config()?;
    log!("Loaded config from {}", args.config.display());

    let addr = config.socket_addr()?;
    let api_key = config.api_key()?;
    let client = ResendClient::new(config.email_api_url.clone(), api_key)?;
    let state = RelayState::new(Arc::new(client), MailIdentities::from(&config));

    web_server::run_web_server(addr, state, wait_for_ctrl_c()).await?;

    log!("Server shut down gracefully");

    Ok(())
}
