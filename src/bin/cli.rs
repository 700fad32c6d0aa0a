//! Storefront CLI
//!
//! Command-line interface for inspecting the storefront shell:
//! - Resolve paths through the route dispatcher
//! - List the route table
//! - Check a running server
//! - Generate a config file

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use storefront::routing::{Dispatch, Dispatcher};

#[derive(Parser)]
#[command(name = "storefront-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect the storefront routing shell")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL (for `status`)
    #[arg(long, default_value = "http://localhost:8084", global = true)]
    pub server_url: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show which page and layout a path dispatches to
    Resolve {
        /// Navigation paths, e.g. /ProductDetails/42
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// List the route table in evaluation order
    Routes,

    /// Show the health of a running server
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve { paths } => {
            let dispatcher = Dispatcher::storefront();
            let dispatches: Vec<Dispatch> =
                paths.iter().map(|p| dispatcher.dispatch(p)).collect();

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&dispatches)?),
                OutputFormat::Table => print_dispatches(&dispatches),
            }
        }

        Commands::Routes => {
            let dispatcher = Dispatcher::storefront();
            let routes = dispatcher.table().summaries();

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&routes)?),
                OutputFormat::Table => {
                    println!("{:<4} {:<24} {:<18} {}", "#", "Pattern", "Page", "Params");
                    println!("{}", "-".repeat(60));
                    for (i, route) in routes.iter().enumerate() {
                        println!(
                            "{:<4} {:<24} {:<18} {}",
                            i + 1,
                            route.pattern,
                            route.page,
                            if route.params.is_empty() {
                                "-".to_string()
                            } else {
                                route.params.join(", ")
                            }
                        );
                    }
                    println!();
                    println!(
                        "Chrome hidden on: {}",
                        dispatcher.chrome().hidden_paths().join(", ")
                    );
                }
            }
        }

        Commands::Status => {
            let response = reqwest::Client::new()
                .get(format!("{}/health", cli.server_url))
                .send()
                .await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: serde_json::Value = resp.json().await?;

                    if cli.format == OutputFormat::Json {
                        println!("{}", serde_json::to_string_pretty(&health)?);
                        return Ok(());
                    }

                    println!(
                        "Storefront v{}",
                        health["version"].as_str().unwrap_or("unknown")
                    );
                    println!();
                    println!("Status: {}", health["status"].as_str().unwrap_or("unknown"));
                    println!("Bundle: {}", health["bundle"].as_str().unwrap_or("unknown"));
                    println!("Routes: {}", health["routes"].as_u64().unwrap_or(0));
                    if let Some(uptime) = health["uptime_seconds"].as_u64() {
                        println!("Uptime: {}", format_duration(uptime));
                    }
                }
                Ok(resp) => {
                    eprintln!("Server returned error: {}", resp.status());
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Cannot connect to storefront at {}", cli.server_url);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the server is running:");
                    eprintln!("  cargo run --bin storefront");
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { output } => {
            let config = storefront::config::generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn print_dispatches(dispatches: &[Dispatch]) {
    println!("{:<28} {:<18} {:<8} {}", "Path", "Page", "Chrome", "Params");
    println!("{}", "-".repeat(70));

    for dispatch in dispatches {
        let params = dispatch
            .params
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>();

        println!(
            "{:<28} {:<18} {:<8} {}",
            dispatch.path,
            dispatch.page,
            if dispatch.chrome_visible { "shown" } else { "hidden" },
            if params.is_empty() {
                "-".to_string()
            } else {
                params.join(", ")
            }
        );
    }
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}
