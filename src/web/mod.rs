//! Web server module
//!
//! Serves the search UI and the JSON API.

mod error;
mod handlers;
mod routes;
mod state;
mod templates;

pub use error::{ApiError, ErrorBody};
pub use routes::create_router;
pub use state::AppState;
pub use templates::Templates;
