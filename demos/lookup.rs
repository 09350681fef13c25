//! Example demonstrating NetworksDB API usage.
//!
//! Run with: cargo run -p networksdb --example lookup
//!
//! Set the NETWORKSDB_API_KEY environment variable before running.

use networksdb::{NetworksDbClient, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // Get API key from environment
    let api_key = std::env::var("NETWORKSDB_API_KEY")
        .expect("NETWORKSDB_API_KEY environment variable is required");

    let client = NetworksDbClient::new(api_key)?;

    println!("=== Key Info ===");
    let key = client.account().key_info().await?;
    println!("{key}");
    println!();

    // Service errors come back as payloads, not Err
    if key.contains_key("error") {
        return Ok(());
    }

    println!("=== My IP ===");
    let me = client.ip().info(None).await?;
    println!("{me}");
    println!();

    println!("=== Organization Search: google ===");
    let orgs = client.org().search("google").send().await?;
    if let Some(results) = orgs.get("results")?.as_array() {
        for org in results.iter().take(5) {
            println!("  {} ({})", org["organisation"], org["id"]);
        }
    }
    println!();

    println!("=== ASN 15169 Networks ===");
    let nets = client.asn().networks(15169).send().await?;
    println!("Total: {:?}", nets.get("total").ok().and_then(|t| t.as_i64()));
    println!();

    println!("=== Reverse DNS: 8.8.8.8 ===");
    let names = client.dns().reverse("8.8.8.8").send().await?;
    println!("{names}");

    Ok(())
}
