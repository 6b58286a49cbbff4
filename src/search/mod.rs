//! Search orchestration module
//!
//! Dispatches a validated query to the provider for its category,
//! normalizes the answer and computes pagination metadata.

mod executor;
mod models;

pub use executor::Search;
pub use models::*;
