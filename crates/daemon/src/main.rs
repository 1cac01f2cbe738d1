use anyhow::Result;
use clap::Parser;
use tracing::info;
use wee_core::tracing::{InstrumentationConfig, init_tracing};
use wee_daemon::{HttpServer, Settings};

/// Wee web host - serves the link shortener client
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long = "config")]
    config: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Base URL of the REST API
    #[arg(long = "api-url", env = "WEE_API_URL")]
    api_url: Option<String>,

    /// Verbose logging with thread details
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load before parsing so `.env` can supply PORT and WEE_API_URL
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_from_file(path)?,
        None => Settings::load()?,
    }
    .with_overrides(cli.port, cli.api_url);

    let instrumentation = if cli.verbose {
        InstrumentationConfig::dev()
    } else {
        InstrumentationConfig::new("wee-daemon", settings.server.log_level.clone())
    };
    init_tracing(&instrumentation)?;

    if let Some(path) = &cli.config {
        info!("Loaded configuration from: {path}");
    }
    info!("Proxying /api to {}", settings.upstream_base());

    let server = HttpServer::new(settings)?;
    println!("Server running at: http://{}/", server.settings().bind_addr()?);

    server
        .start(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received shutdown signal"),
                Err(e) => {
                    tracing::error!("Failed to listen for shutdown signal: {e}");
                    std::future::pending::<()>().await;
                }
            }
        })
        .await?;

    Ok(())
}
