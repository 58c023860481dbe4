//! Protocol layer for the tracking API.
//!
//! This module handles building commands and parsing raw responses.

pub mod commands;
pub mod response;

pub use commands::{Commands, DateRange, EventWindow};
pub use response::RawResponse;
