use anyhow::Context;
use clap::Parser;
use sales_efficiency::{Dataset, DashboardContext, HttpServer, ServerConfig};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Sales efficiency dashboard API server
#[derive(Parser)]
#[command(name = "sales-efficiency", version, about)]
struct Args {
    /// Bind address (overrides SALES_EFFICIENCY_ADDRESS)
    #[arg(long)]
    address: Option<String>,

    /// Port (overrides PORT / SALES_EFFICIENCY_PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Directory holding summary.json, org.json and correlations.json
    /// (overrides SALES_EFFICIENCY_DATA_DIR; built-in dataset when unset)
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let mut config = ServerConfig::from_env();
    if let Some(address) = args.address {
        config.address = address;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if args.data_dir.is_some() {
        config.data_dir = args.data_dir;
    }

    info!("Sales Efficiency Dashboard v{}", sales_efficiency::version());

    let dataset = Dataset::load(config.data_dir.as_deref()).context("failed to load dataset")?;
    let context = DashboardContext::build(dataset).context("dataset rejected")?;
    info!(
        "Serving {} departments, default department '{}'",
        context.department_count(),
        context.default_dept_id()
    );

    HttpServer::new(context, config)
        .start()
        .await
        .context("HTTP server failed")?;

    Ok(())
}
