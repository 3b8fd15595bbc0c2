//! Demo 2: Account Overview
//!
//! Showcases: signed trade API requests, balance and order normalization
//!
//! Reads BLINKTRADE_API_KEY / BLINKTRADE_API_SECRET (a `.env` file works too).
//!
//! Run: cargo run --bin account_overview -- [ENV] [CURRENCY] [BROKER]
//! (defaults: TEST BRL 5)

use blinktrade_rest::{BlinktradeClient, ClientConfig, Credentials, RestError, DEFAULT_PAGE_SIZE};
use colored::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = ClientConfig::parse(
        args.first().map(String::as_str).unwrap_or("TEST"),
        args.get(1).map(String::as_str).unwrap_or("BRL"),
        args.get(2).map(String::as_str).unwrap_or("5"),
    )?;

    let credentials = match Credentials::from_env() {
        Ok(creds) => creds,
        Err(e) => {
            eprintln!("{} {}", "✗".red(), e);
            eprintln!("  Set BLINKTRADE_API_KEY and BLINKTRADE_API_SECRET to run this demo.");
            std::process::exit(2);
        }
    };

    let currency = config.currency();
    let symbol = config.symbol();
    let client = BlinktradeClient::with_credentials(config, credentials)?;

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  ACCOUNT OVERVIEW".cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let balance = client.get_balance().await?;
    println!("{}", "Balance".yellow().bold());
    if balance.is_empty() {
        println!("  {}", "(no balance at this broker)".dimmed());
    }
    for code in [currency.as_str(), symbol.base().unwrap_or("BTC")] {
        let available = balance.get(code).unwrap_or_default();
        let locked = balance.get(&format!("{}_locked", code)).unwrap_or_default();
        println!("  {:<4} {:>20}  {} {}", code, available, "locked".dimmed(), locked);
    }
    println!();

    match client.get_pending_orders(0, DEFAULT_PAGE_SIZE).await {
        Ok(report) => {
            println!("{} ({})", "Pending orders".yellow().bold(), report.len());
            for order in report.iter() {
                println!(
                    "  {:<12} {:<4} {:>14} @ {:<14} {:?}",
                    order.client_order_id,
                    order.side,
                    order.leaves_quantity.unwrap_or_default(),
                    order.price.map(|p| p.to_string()).unwrap_or_else(|| "market".to_string()),
                    order.status,
                );
            }
        }
        Err(RestError::OrderRejected { message, detail }) => {
            println!("{} {}: {}", "✗".red(), message, detail);
        }
        Err(e) => return Err(e.into()),
    }

    let executed = client.get_executed_orders(0, 10).await?;
    println!();
    println!("{} ({})", "Recently executed".yellow().bold(), executed.len());
    for order in executed {
        println!(
            "  {:<12} {:<4} filled {:>14} avg {}",
            order.client_order_id,
            order.side,
            order.cumulative_quantity.unwrap_or_default(),
            order.average_price.unwrap_or_default(),
        );
    }

    Ok(())
}
