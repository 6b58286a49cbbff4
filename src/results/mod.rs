//! Results module
//!
//! The common result schema every provider response is normalized into,
//! and the paginated response envelope.

mod response;
mod types;

pub use response::*;
pub use types::*;
