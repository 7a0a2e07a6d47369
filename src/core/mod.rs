//! Core state container types.
//!
//! This module contains the pure functional core of the library:
//! - The immutable `State` container and its derivation operations
//! - Truthiness rules backing the fallback read path
//! - Construction errors
//!
//! All logic in this module is pure (no side effects); every "update" is
//! externally visible only as a newly produced snapshot.

pub mod error;
pub mod macros;
pub mod state;
pub mod truthy;

pub use error::{value_type_name, StateError};
pub use state::State;
pub use truthy::is_truthy;
