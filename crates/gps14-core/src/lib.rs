//! Command client and response normalization for the GPS-14 tracking API.
//!
//! The server exposes a single endpoint taking a `cmd` query parameter and
//! answers with loosely shaped JSON. This crate wraps that protocol:
//!
//! - **Client**: [`TrackingClient`] logs in, holds the session token and
//!   executes commands, returning [`RawResponse`] values
//! - **Normalization**: [`normalize`] turns raw payloads into the canonical
//!   records in [`types`], tolerating field-name drift
//! - **Persistence**: [`storage`] keeps the session and preferences
//! - **Polling**: [`poll`] refreshes data on a fixed interval
//!
//! # Quick Start
//!
//! ```no_run
//! use gps14_core::{ClientConfig, TrackingClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TrackingClient::new(ClientConfig::default())?;
//!
//!     let token = client.login("user", "secret").await?;
//!     client.set_session(token);
//!
//!     for vehicle in client.get_vehicles().await? {
//!         println!("{} {}", vehicle.name, vehicle.status.display_name());
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod normalize;
pub mod poll;
pub mod protocol;
pub mod storage;
pub mod types;

pub use client::TrackingClient;
pub use config::ClientConfig;
pub use error::{ClientError, ConfigError, CoreError, Result, StorageError};
pub use poll::{LoadState, Poller};
pub use protocol::{Commands, DateRange, EventWindow, RawResponse};
pub use types::{
    AccountOverview, Event, EventCategory, EventSeverity, RoutePoint, RouteSummary, Vehicle,
    VehicleLocation, VehicleStatus,
};
