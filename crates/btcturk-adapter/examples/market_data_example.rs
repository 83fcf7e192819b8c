/*
[INPUT]:  Pair symbol (e.g., "BTC_TRY")
[OUTPUT]: Order book snapshot and recent trades
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use btcturk_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: Query market data (no credentials required)
///
/// Run with `RUST_LOG=btcturk_adapter=debug` to see request logs.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== BtcTurk Market Data Example (v{}) ===\n", BtcturkClient::version());

    let client = match BtcturkClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let pair = "BTC_TRY";

    println!("Querying order book for {}...", pair);
    match client.order_book(&Params::new().pair_symbol(pair).limit(5)).await {
        Ok(book) => {
            println!("✓ Order book at {}", book.timestamp);
            for level in book.bids.iter().take(5) {
                println!("  bid {} x {}", level.price(), level.quantity());
            }
            for level in book.asks.iter().take(5) {
                println!("  ask {} x {}", level.price(), level.quantity());
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying last trades for {}...", pair);
    match client.trades(&Params::new().pair_symbol(pair).last(10)).await {
        Ok(trades) => {
            for trade in &trades {
                println!("  {} {} {} @ {}", trade.timestamp, trade.side, trade.amount, trade.price);
            }
            println!("✓ {} trades", trades.len());
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
