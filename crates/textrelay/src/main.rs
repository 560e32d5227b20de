use anyhow::Result;
use clap::{Parser, Subcommand};
use textrelay_common::{logger, AppConfig};

#[derive(Parser)]
#[command(name = "textrelay")]
#[command(about = "TextRelay - split large texts and relay each part through a chat-completion API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value = "8080")]
        port: u16,

        /// Delay between per-segment completion calls, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load environment variables early so CLI overrides win
    dotenv::dotenv().ok();

    match cli.command {
        Some(Commands::Serve { host, port, delay_ms }) => {
            // Override with CLI arguments
            std::env::set_var("SERVER_HOST", &host);
            std::env::set_var("SERVER_PORT", port.to_string());
            if let Some(delay) = delay_ms {
                std::env::set_var("REQUEST_DELAY_MS", delay.to_string());
            }

            let config = AppConfig::from_env()?;
            config.validate()?;
            logger::setup_logging(&config.log_dir, &config.log_level)?;

            tracing::info!("TextRelay starting...");
            tracing::info!("  Host: {}", host);
            tracing::info!("  Port: {}", port);
            tracing::info!("  Upstream: {}", config.upstream_base_url);

            println!("Server listening on http://{}:{}", host, port);

            textrelay_server::start_server(config).await?;
        }
        None => {
            // Default: start server with env/default config
            let config = AppConfig::from_env()?;
            config.validate()?;
            logger::setup_logging(&config.log_dir, &config.log_level)?;

            tracing::info!("TextRelay starting with default configuration...");

            let bind_addr = config.server_bind_address();
            println!("Server listening on http://{}", bind_addr);

            textrelay_server::start_server(config).await?;
        }
    }

    Ok(())
}
