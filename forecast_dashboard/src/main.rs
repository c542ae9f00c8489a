use clap::{Args, Parser, Subcommand};
use forecast_core::metadata::DEFAULT_DESTINATION;
use forecast_dashboard::{
    extract_product_id, format_summary, load_products, product_labels, render_chart,
    ForecastClient, DEFAULT_API_URL,
};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "forecast-dashboard", about = "Inventory demand forecasting dashboard", version)]
struct Cli {
    /// Base URL of the forecast service
    #[arg(long, env = "FORECAST_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Product metadata table written by `forecast-api generate-metadata`
    #[arg(long, default_value = DEFAULT_DESTINATION)]
    metadata: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List selectable products
    Products,
    /// Fetch, chart and summarize one product's forecast
    Forecast(ForecastArgs),
}

#[derive(Args)]
struct ForecastArgs {
    /// Product label as listed by `products`, or a bare product id
    #[arg(long)]
    product: String,

    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(7..=90))]
    days: u32,

    #[arg(long, default_value_t = 0)]
    stock: u64,

    #[arg(long, default_value = "forecast.svg")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Products => list_products(&cli.metadata),
        Commands::Forecast(args) => show_forecast(&cli.api_url, args).await,
    }
}

fn list_products(metadata: &Path) -> anyhow::Result<()> {
    let products = load_products(metadata)?;
    if products.is_empty() {
        eprintln!(
            "Warning: no products found in {}. Run `forecast-api generate-metadata` first.",
            metadata.display()
        );
        return Ok(());
    }

    for label in product_labels(&products) {
        println!("{}", label);
    }
    Ok(())
}

async fn show_forecast(api_url: &str, args: ForecastArgs) -> anyhow::Result<()> {
    let product_id = extract_product_id(&args.product);
    let client = ForecastClient::new(api_url)?;
    info!(product_id = %product_id, api_url = client.base_url(), "requesting forecast");

    let report = client
        .get_forecast(&product_id, args.days, args.stock)
        .await?;

    render_chart(&report, &args.output)?;
    println!("{}", format_summary(&report, args.stock));
    println!("Chart written to {}", args.output.display());
    Ok(())
}
