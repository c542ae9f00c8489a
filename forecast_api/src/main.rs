use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use forecast_api::config::{init_tracing, ServerConfig};
use forecast_api::{app, AppState};
use forecast_core::metadata::{generate_metadata, DEFAULT_DESTINATION, DEFAULT_SOURCE};
use forecast_core::{DemandForecaster, SalesStore, SeasonalRegression};
use std::path::PathBuf;
use tokio::signal;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "forecast-api", about = "Demand forecasting service and data tools", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the forecast endpoint
    Serve(ServeArgs),
    /// Rebuild the product metadata table from the combined sales file
    GenerateMetadata(GenerateMetadataArgs),
}

#[derive(Args)]
struct ServeArgs {
    #[arg(long, help = "Address to bind; overrides configuration")]
    host: Option<String>,
    #[arg(long, help = "Port to bind; overrides configuration")]
    port: Option<u16>,
    #[arg(long, help = "Directory with historical_sales.csv and products/")]
    data_dir: Option<PathBuf>,
}

#[derive(Args)]
struct GenerateMetadataArgs {
    #[arg(long, default_value = DEFAULT_SOURCE, help = "Combined sales CSV to read")]
    source: PathBuf,
    #[arg(long, default_value = DEFAULT_DESTINATION, help = "Metadata CSV to write")]
    destination: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => serve(args).await,
        Commands::GenerateMetadata(args) => generate(args),
    }
}

async fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = ServerConfig::load().context("failed to load configuration")?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }
    config.validate()?;

    init_tracing(&config.log_level, config.log_json);
    info!(data_dir = %config.data_dir.display(), "starting forecast service");

    let store = SalesStore::from_data_dir(&config.data_dir);
    let forecaster = DemandForecaster::new(store, SeasonalRegression::default());
    let state = AppState::new(forecaster);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn generate(args: GenerateMetadataArgs) -> anyhow::Result<()> {
    init_tracing("info", false);

    let count = generate_metadata(&args.source, &args.destination)?;
    println!(
        "Metadata saved to {} ({} products)",
        args.destination.display(),
        count
    );
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
