use anyhow::Context;
use clap::Parser;
use colored::*;
use finder::cli::Cli;
use finder::server::{start_server, AppState};
use std::net::SocketAddr;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    let cli = Cli::parse();
    let config = cli.to_config();

    println!("{}", "Finder".bold().green());
    println!("{}\n", "=".repeat(50).dimmed());

    if config.weather_api_key.is_empty() {
        warn!("OPENWEATHER_API_KEY is not set, weather searches will fail");
        println!("{}", "No OpenWeather API key configured".yellow());
    }
    if config.github_token.is_none() {
        println!("{}", "No GitHub token, search is limited to the unauthenticated rate".yellow());
    }

    let state = AppState::from_config(&config).context("Failed to build clients")?;
    let addr = SocketAddr::new(cli.bind, cli.port);

    println!("✅ Recent cities stored in {}", config.history_path.display());
    println!("🌐 Open http://{} in your browser", addr);
    println!("\nPress Ctrl+C to stop the server\n");

    tokio::select! {
        result = start_server(state, addr) => {
            result.with_context(|| format!("Server on {} stopped", addr))?;
        }
        _ = tokio::signal::ctrl_c() => {
            println!("\n🛑 Shutting down...");
        }
    }

    Ok(())
}
