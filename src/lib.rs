//! Flowstate: an immutable state container for pipeline-style programs.
//!
//! Flowstate threads data through a sequence of transformation steps without
//! mutation side effects. Each step receives a state snapshot, derives a new
//! snapshot, and passes it forward; every snapshot that was ever produced
//! stays valid, so pipelines can fork from a shared ancestor at any point.
//!
//! # Core Concepts
//!
//! - **State**: an immutable key-value snapshot; `assign` and `discard`
//!   return new snapshots instead of mutating
//! - **Reads**: non-raising lookups with a falsy absence sentinel, plus the
//!   `fetch_or` fallback idiom
//! - **Chaining**: `then` applies a step function and returns its result,
//!   keeping the pipeline's textual order aligned with execution order
//!
//! # Example
//!
//! ```rust
//! use flowstate::{state, State};
//! use serde_json::json;
//!
//! fn count_items(state: State) -> State {
//!     let items = state.fetch_or("items", json!([]));
//!     let count = items.as_array().map(Vec::len).unwrap_or(0);
//!     state.assign([("count", json!(count))])
//! }
//!
//! fn drop_raw_input(state: State) -> State {
//!     state.discard(["items"])
//! }
//!
//! let state = state! { "items" => ["house", "car", "bear"] }
//!     .then(count_items)
//!     .then(drop_raw_input);
//!
//! assert_eq!(state.fetch("count"), &json!(3));
//! assert!(state.get("items").is_none());
//! ```
//!
//! # Concurrency
//!
//! A `State` is never mutated after construction, so any number of threads
//! may read a shared snapshot, or derive from a shared ancestor, without
//! synchronization.

pub mod core;
pub mod pipeline;

// Re-export commonly used types
pub use core::{is_truthy, State, StateError};
pub use pipeline::Pipeline;
