//! Download Pipeline
//!
//! This example demonstrates threading a state snapshot through a sequence
//! of transformation steps.
//!
//! Key concepts:
//! - Steps are plain functions from State to State
//! - `then` keeps the textual order of steps aligned with execution order
//! - Earlier snapshots are never mutated by later steps
//!
//! Run with: cargo run --example download_pipeline

use flowstate::{state, State};
use serde_json::json;

fn download_items(state: State) -> State {
    let items = state.fetch_or("items", json!([]));
    let downloads: Vec<String> = items
        .as_array()
        .map(|names| {
            names
                .iter()
                .filter_map(|name| name.as_str())
                .map(|name| format!("https://example.com/{name}"))
                .collect()
        })
        .unwrap_or_default();

    state.assign([("downloads", json!(downloads))])
}

fn show_downloads(state: State) -> State {
    let downloads = state.fetch_or("downloads", json!([]));
    println!("Downloads: {downloads}");
    state
}

fn main() {
    println!("=== Download Pipeline Example ===\n");

    let initial = state! { "items" => ["house", "car", "bear"] };

    let state = initial
        .clone()
        .then(download_items)
        .then(show_downloads)
        .then(|s| s.discard(["items"]));

    println!("Initial state: {}", json!(initial));
    println!("Final state:   {}", json!(state));

    println!("\n=== Example Complete ===");
}
