//! Branching Pipelines
//!
//! This example demonstrates forking two pipelines from one shared ancestor
//! snapshot.
//!
//! Key concepts:
//! - Derivation never touches the receiver, so branches cannot interfere
//! - The ancestor stays valid and readable after both branches diverge
//! - A Pipeline value can be built once and run over many initial states
//!
//! Run with: cargo run --example branching

use flowstate::{state, Pipeline, State};
use serde_json::json;

fn main() {
    println!("=== Branching Example ===\n");

    let ancestor = state! {
        "dog" => "water",
        "horses" => 5,
    };

    let staging = ancestor
        .clone()
        .then(|s| s.assign([("environment", json!("staging"))]));
    let production = ancestor
        .clone()
        .then(|s| s.assign([("environment", json!("production"))]))
        .then(|s| s.discard(["dog"]));

    println!("Ancestor:   {}", json!(ancestor));
    println!("Staging:    {}", json!(staging));
    println!("Production: {}", json!(production));

    // The same pipeline applied to each branch
    let audit = Pipeline::new()
        .step(|s: State| s.assign([("audited", json!(true))]))
        .step(|s: State| {
            let environment = s.fetch_or("environment", "unknown");
            println!("Auditing {environment}");
            s
        });

    let staging = audit.run(staging);
    let production = audit.run(production);

    println!("Audited staging:    {}", json!(staging));
    println!("Audited production: {}", json!(production));

    println!("\n=== Example Complete ===");
}
