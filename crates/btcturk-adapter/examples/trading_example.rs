/*
[INPUT]:  API key pair from BTCTURK_PUBLIC_KEY / BTCTURK_PRIVATE_KEY
[OUTPUT]: Balances, open orders and an order payload preview
[POS]:    Examples - authenticated account and trading flow
[UPDATE]: When trading endpoints or OrderInput change
*/

use btcturk_adapter::*;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

/// Example: Authenticated account queries
///
/// Orders are only built and printed, never submitted.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== BtcTurk Trading Example ===\n");

    let (public_key, private_key) = match (
        std::env::var("BTCTURK_PUBLIC_KEY"),
        std::env::var("BTCTURK_PRIVATE_KEY"),
    ) {
        (Ok(public_key), Ok(private_key)) => (public_key, private_key),
        _ => {
            eprintln!("Set BTCTURK_PUBLIC_KEY and BTCTURK_PRIVATE_KEY to run this example");
            return;
        }
    };

    let client = match BtcturkClient::new() {
        Ok(c) => c.with_credentials(Credentials::new(public_key, private_key)),
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ Client created with credentials\n");

    println!("Querying balances...");
    match client.balances().await {
        Ok(balances) => {
            for balance in balances.iter().filter(|b| !b.balance.is_zero()) {
                println!("  {:<6} free {} locked {}", balance.asset, balance.free, balance.locked);
            }
        }
        Err(e) if e.is_auth_error() => println!("✗ Auth error: {}", e),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying open orders for BTCTRY...");
    match client.open_orders(&Params::new().pair_symbol("BTCTRY")).await {
        Ok(orders) => {
            for order in orders.iter() {
                println!(
                    "  #{} {} {} {} @ {}",
                    order.id, order.side, order.method, order.quantity, order.price
                );
            }
            println!("✓ {} open orders", orders.len());
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    let input = OrderInput::limit(Side::Buy, "BTCTRY", Decimal::new(1, 3), Decimal::from(100_000))
        .with_client_id("example-1");
    match serde_json::to_string_pretty(&input) {
        Ok(json) => println!("\nOrder payload (not submitted):\n{}", json),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Trading example complete");
}
