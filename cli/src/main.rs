//! Sales efficiency CLI — command-line client for the dashboard API
//!
//! Uses the sales-efficiency-sdk RemoteClient to talk to a running server.

use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use sales_efficiency_sdk::models::Trend;
use sales_efficiency_sdk::{DashboardClient, DepartmentNode, RemoteClient};

#[derive(Parser)]
#[command(name = "sales-efficiency", version, about = "Sales efficiency dashboard CLI")]
struct Cli {
    /// Server HTTP URL
    #[arg(long, default_value = "http://localhost:5001", global = true, env = "SALES_EFFICIENCY_URL")]
    url: String,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the headline summary cards
    Summary,
    /// Print the aggregated organization tree
    Org,
    /// Show correlated metrics for a department
    Correlations {
        /// Department id (defaults to the root)
        #[arg(long)]
        dept: Option<String>,
    },
    /// Find departments by name or leader
    Search {
        /// Substring to look for
        query: String,
    },
    /// Get server status
    Status,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let client = RemoteClient::new(&cli.url);

    let result = match cli.command {
        Commands::Summary => run_summary(&client, &cli.format).await,
        Commands::Org => run_org(&client, &cli.format).await,
        Commands::Correlations { dept } => {
            run_correlations(&client, dept.as_deref(), &cli.format).await
        }
        Commands::Search { query } => run_search(&client, &query, &cli.format).await,
        Commands::Status => run_status(&client, &cli.format).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn new_table<S: ToString>(header: Vec<S>) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header.into_iter().map(|h| h.to_string()).collect::<Vec<_>>());
    table
}

async fn run_summary(
    client: &RemoteClient,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let summary = client.summary().await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Table => {
            let mut table = new_table(vec!["Metric", "Value", "YoY", "Trend", "Attainment"]);
            for metric in &summary.metrics {
                table.add_row(vec![
                    metric.name.clone(),
                    format!("{} {}", metric.value, metric.unit),
                    format!("{:+.1}%", metric.yoy * 100.0),
                    trend_arrow(metric.trend).to_string(),
                    format!("{:.0}%", metric.detail.attainment * 100.0),
                ]);
            }
            println!("{}", table);
            println!("Default department: {}", summary.default_dept_id);
        }
    }

    Ok(())
}

async fn run_org(
    client: &RemoteClient,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let org = client.org().await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&org)?);
        }
        OutputFormat::Table => {
            let mut lines = Vec::new();
            outline(&org.tree, 0, &mut lines);
            for line in lines {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

async fn run_correlations(
    client: &RemoteClient,
    dept: Option<&str>,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = client.correlations(dept).await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Table => {
            if response.metrics.is_empty() {
                println!("(no correlations for {})", response.dept_id);
                return Ok(());
            }

            let mut table = new_table(vec!["Metric", "Coefficient", "Direction", "Value"]);
            for entry in &response.metrics {
                table.add_row(vec![
                    entry.name.clone(),
                    format!("{:.2}", entry.coefficient),
                    format!("{:?}", entry.direction).to_lowercase(),
                    entry.value.to_string(),
                ]);
            }
            println!("{}", table);
            println!("{} metric(s) for {}", response.metrics.len(), response.dept_id);
        }
    }

    Ok(())
}

async fn run_search(
    client: &RemoteClient,
    query: &str,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = client.search(query).await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Table => {
            for id in &result.matched_departments {
                println!("{}", id);
            }
            println!("{} match(es)", result.matched_departments.len());
        }
    }

    Ok(())
}

async fn run_status(
    client: &RemoteClient,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let status = client.status().await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        OutputFormat::Table => {
            println!("Status:      {}", status.status);
            println!("Version:     {}", status.version);
            println!("Departments: {}", status.departments);
            println!("Loaded at:   {}", status.loaded_at.to_rfc3339());
        }
    }

    Ok(())
}

/// One line per department, children indented under their parent
fn outline(node: &DepartmentNode, depth: usize, out: &mut Vec<String>) {
    out.push(format!(
        "{}{} [{}] {}  headcount={}  value={}  ({})",
        "  ".repeat(depth),
        node.name,
        node.id,
        node.leader,
        node.headcount,
        node.value,
        node.status
    ));
    for child in &node.children {
        outline(child, depth + 1, out);
    }
}

fn trend_arrow(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "↑",
        Trend::Down => "↓",
        Trend::Flat => "→",
    }
}
