//! Fallback Reads
//!
//! This example demonstrates the non-raising read paths and their fallback
//! idioms.
//!
//! Key concepts:
//! - `fetch` yields the null absence sentinel instead of an error
//! - `fetch_or` falls back when the stored value is absent or falsy
//! - `get` reports presence when the falsy conflation matters
//!
//! Run with: cargo run --example defaults

use flowstate::state;
use serde_json::json;

fn main() {
    println!("=== Fallback Reads Example ===\n");

    let settings = state! {
        "retries" => 0,
        "timeout_secs" => 30,
    };

    // Missing key: the sentinel is null, the fallback applies
    println!("workers (missing):  {}", settings.fetch("workers"));
    println!("workers defaulted:  {}", settings.fetch_or("workers", 4));

    // Present and truthy: the stored value wins
    println!("timeout defaulted:  {}", settings.fetch_or("timeout_secs", 60));

    // Present but falsy: indistinguishable from absence on this path
    println!("retries defaulted:  {}", settings.fetch_or("retries", 3));
    match settings.get("retries") {
        Some(stored) => println!("retries via get:    {stored} (key is present)"),
        None => println!("retries via get:    absent"),
    }

    println!("\nFull settings: {}", json!(settings));

    println!("\n=== Example Complete ===");
}
