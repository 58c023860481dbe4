//! Command client layer.
//!
//! Provides the HTTP transport, session handling, and typed command accessors.

mod api;
pub mod http;

pub use http::TrackingClient;
