//! Demo 1: Market Snapshot
//!
//! Showcases: public market data endpoints, config validation
//!
//! Run: cargo run --bin market_snapshot -- [ENV] [CURRENCY] [BROKER]
//! (defaults: PROD BRL 4)

use blinktrade_rest::{BlinktradeClient, ClientConfig};
use chrono::{TimeZone, Utc};
use colored::*;
use rust_decimal::Decimal;
use serde_json::Value;

/// Best price of one side of the book (`[[price, amount, user_id], ...]`)
fn best_price(levels: &Value) -> Option<Decimal> {
    levels.get(0)?.get(0)?.as_f64().and_then(|p| Decimal::try_from(p).ok())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let environment = args.first().map(String::as_str).unwrap_or("PROD");
    let currency = args.get(1).map(String::as_str).unwrap_or("BRL");
    let broker = args.get(2).map(String::as_str).unwrap_or("4");

    let config = match ClientConfig::parse(environment, currency, broker) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "✗".red(), e);
            std::process::exit(2);
        }
    };

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  MARKET SNAPSHOT".cyan().bold());
    println!(
        "{}",
        format!(
            "  {} on {} ({})",
            config.symbol(),
            config.broker().description(),
            config.environment().description()
        )
        .cyan()
    );
    println!("{}", "═".repeat(60).cyan());
    println!();

    let client = BlinktradeClient::new(config)?;

    let ticker = client.get_ticker().await?;
    println!("{}", "Ticker".yellow().bold());
    for key in ["last", "buy", "sell", "high", "low", "vol"] {
        if let Some(value) = ticker.get(key) {
            println!("  {:<6} {}", key, value);
        }
    }
    println!();

    let book = client.get_order_book().await?;
    let bid = best_price(&book["bids"]);
    let ask = best_price(&book["asks"]);
    println!("{}", "Order book".yellow().bold());
    match (bid, ask) {
        (Some(bid), Some(ask)) => {
            println!("  {} {}", "BID:".green(), bid);
            println!("  {} {}", "ASK:".red(), ask);
            println!("  {} {}", "SPREAD:".dimmed(), ask - bid);
        }
        _ => println!("  {}", "(empty book)".dimmed()),
    }
    println!();

    let trades = client.get_trade_list(0).await?;
    let trades = trades.as_array().cloned().unwrap_or_default();
    println!("{} ({} total)", "Recent trades".yellow().bold(), trades.len());
    for trade in trades.iter().rev().take(10) {
        let when = trade["date"]
            .as_i64()
            .and_then(|ts| Utc.timestamp_opt(ts, 0).single())
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default();
        let side = match trade["side"].as_str() {
            Some("buy") => "BUY ".green(),
            Some("sell") => "SELL".red(),
            _ => "?   ".normal(),
        };
        println!("  {}  {}  {} @ {}", when.dimmed(), side, trade["amount"], trade["price"]);
    }

    Ok(())
}
