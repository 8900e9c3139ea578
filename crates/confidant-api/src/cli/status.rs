//! Status command: version, store location, exchange count and model.

use std::path::Path;

use anyhow::Result;
use console::style;

use confidant_core::repository::exchange::ExchangeRepository;
use confidant_infra::sqlite::exchange::SqliteExchangeRepository;

use crate::cli::{config_path, load_config};
use crate::state::{open_database, API_KEY_ENV};

/// Display the status dashboard.
///
/// Opening the database creates it, with the schema, when it does not exist yet.
pub async fn status(database_url: &str, config: Option<&Path>, json: bool) -> Result<()> {
    let service_config = load_config(config).await;
    let config_file = config_path(config);

    let pool = open_database(database_url).await?;
    let exchanges = SqliteExchangeRepository::new(pool).count().await?;
    let key_set = std::env::var(API_KEY_ENV)
        .map(|k| !k.trim().is_empty())
        .unwrap_or(false);

    if json {
        let status = serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
            "database_url": database_url,
            "config_file": config_file.display().to_string(),
            "exchanges": exchanges,
            "model": service_config.model,
            "base_url": service_config.base_url,
            "api_key_set": key_set,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} Confidant v{}",
        style("⚡").bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!();

    println!("  {}", style("── Conversations ──").dim());
    println!("  Exchanges: {}", style(exchanges).bold());
    println!();

    println!("  {}", style("── Provider ──").dim());
    println!("  Model:    {}", style(&service_config.model).cyan());
    println!("  Endpoint: {}", style(&service_config.base_url).dim());
    if key_set {
        println!("  API key:  {}", style("set").green());
    } else {
        println!(
            "  API key:  {} (export {})",
            style("missing").yellow(),
            API_KEY_ENV
        );
    }
    println!();

    println!("  {}", style("── System ──").dim());
    println!("  Database: {}", style(database_url).dim());
    println!("  Config:   {}", style(config_file.display()).dim());
    println!("  Engine:   {}", style("SQLite (WAL mode)").dim());
    println!();

    Ok(())
}
