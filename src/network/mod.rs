//! HTTP networking module
//!
//! Provides the HTTP client used to call upstream providers.

mod client;

pub use client::HttpClient;
