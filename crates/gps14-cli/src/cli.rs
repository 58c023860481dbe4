//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use gps14_core::config::{BASE_URL_ENV, DEFAULT_BASE_URL, TIMEOUT_ENV};
use gps14_core::poll::LOCATIONS_POLL_INTERVAL;
use gps14_core::protocol::commands::MAX_ROUTE_DAYS;
use gps14_core::EventWindow;

/// GPS-14 CLI - Command-line access to the GPS-14 vehicle tracking service
#[derive(Parser, Debug)]
#[command(name = "gps14")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Request timeout in milliseconds
    #[arg(long, global = true, default_value = "15000", env = TIMEOUT_ENV)]
    pub timeout: u64,

    /// Base URL of the tracking service
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_BASE_URL,
        env = BASE_URL_ENV
    )]
    pub base_url: String,

    /// Directory holding the session and preferences
    #[arg(long, global = true, env = "GPS14_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and remember the session
    Login(LoginArgs),

    /// Forget the saved session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// List vehicles with their current status
    Vehicles,

    /// Show the latest vehicle locations
    Locations(LocationsArgs),

    /// Show recent events
    Events(EventsArgs),

    /// Show a vehicle's route
    Route(RouteArgs),

    /// Reverse geocode a coordinate
    Address(AddressArgs),

    /// Count zones, markers, and routes on the account
    Overview,

    /// Refresh vehicle locations until interrupted
    Watch(WatchArgs),

    /// Send a raw command
    Cmd(CmdArgs),

    /// Show or change the notifications preference
    Notifications(NotificationsArgs),
}

// ==================== Session ====================

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account username
    pub username: String,

    /// Account password
    #[arg(long, env = "GPS14_PASSWORD", hide_env_values = true)]
    pub password: String,
}

// ==================== Tracking ====================

#[derive(Args, Debug)]
pub struct LocationsArgs {
    /// Vehicle IMEI, or "*" for every vehicle
    #[arg(default_value = gps14_core::protocol::commands::ALL_OBJECTS)]
    pub imei: String,
}

#[derive(Args, Debug)]
pub struct EventsArgs {
    /// How far back to look
    #[arg(long, value_enum, default_value = "12h")]
    pub range: RangeArg,

    /// Only show event types matching this pattern (* and ? wildcards)
    #[arg(long)]
    pub filter: Option<String>,

    /// Keep refreshing until interrupted
    #[arg(short, long)]
    pub follow: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeArg {
    #[value(name = "30m")]
    ThirtyMinutes,
    #[value(name = "12h")]
    TwelveHours,
    #[value(name = "7d")]
    SevenDays,
}

impl From<RangeArg> for EventWindow {
    fn from(range: RangeArg) -> Self {
        match range {
            RangeArg::ThirtyMinutes => EventWindow::ThirtyMinutes,
            RangeArg::TwelveHours => EventWindow::TwelveHours,
            RangeArg::SevenDays => EventWindow::SevenDays,
        }
    }
}

#[derive(Args, Debug)]
pub struct RouteArgs {
    /// Vehicle IMEI
    pub imei: String,

    /// Number of past days to include besides today
    #[arg(
        long,
        default_value = "0",
        value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_ROUTE_DAYS))
    )]
    pub days: u32,

    /// Print every route point
    #[arg(long)]
    pub points: bool,
}

#[derive(Args, Debug)]
pub struct AddressArgs {
    /// Latitude in decimal degrees
    #[arg(allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude in decimal degrees
    #[arg(allow_negative_numbers = true)]
    pub lng: f64,
}

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Refresh interval in seconds
    #[arg(short, long, default_value_t = LOCATIONS_POLL_INTERVAL.as_secs())]
    pub interval: u64,
}

// ==================== Raw ====================

#[derive(Args, Debug)]
pub struct CmdArgs {
    /// Command string, e.g. "USER_GET_ZONES"
    pub command: String,

    /// Retry network failures this many times
    #[arg(long, default_value = "0")]
    pub retries: usize,
}

// ==================== Preferences ====================

#[derive(Args, Debug)]
pub struct NotificationsArgs {
    /// New setting; omit to show the current one
    #[arg(value_enum)]
    pub state: Option<Toggle>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    On,
    Off,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_connection_flags_read_env() {
        let command = Cli::command();
        let env_of = |id: &str| {
            command
                .get_arguments()
                .find(|arg| arg.get_id() == id)
                .and_then(|arg| arg.get_env())
                .map(|env| env.to_string_lossy().into_owned())
        };

        assert_eq!(env_of("timeout").as_deref(), Some(TIMEOUT_ENV));
        assert_eq!(env_of("base_url").as_deref(), Some(BASE_URL_ENV));
    }

    #[test]
    fn test_parse_events_range() {
        let cli = Cli::parse_from(["gps14", "events", "--range", "7d", "--filter", "sos*"]);
        match cli.command {
            Commands::Events(args) => {
                assert_eq!(args.range, RangeArg::SevenDays);
                assert_eq!(args.filter.as_deref(), Some("sos*"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_events_default_range() {
        let cli = Cli::parse_from(["gps14", "events"]);
        match cli.command {
            Commands::Events(args) => {
                assert_eq!(EventWindow::from(args.range), EventWindow::TwelveHours);
                assert!(!args.follow);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_events_follow_flag() {
        let cli = Cli::parse_from(["gps14", "events", "-f", "--range", "7d"]);
        match cli.command {
            Commands::Events(args) => {
                assert!(args.follow);
                assert_eq!(EventWindow::from(args.range), EventWindow::SevenDays);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["gps14", "vehicles", "--json", "--timeout", "2000"]);
        assert!(cli.json);
        assert_eq!(cli.timeout, 2000);
    }

    #[test]
    fn test_address_accepts_negative_coordinates() {
        let cli = Cli::parse_from(["gps14", "address", "-33.86", "151.2"]);
        match cli.command {
            Commands::Address(args) => {
                assert_eq!(args.lat, -33.86);
                assert_eq!(args.lng, 151.2);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_route_days_bounded() {
        let cli = Cli::parse_from(["gps14", "route", "123", "--days", "3650"]);
        match cli.command {
            Commands::Route(args) => assert_eq!(args.days, 3650),
            other => panic!("unexpected command: {:?}", other),
        }

        let result = Cli::try_parse_from(["gps14", "route", "123", "--days", "4294967295"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_watch_interval_defaults_to_location_poll() {
        let cli = Cli::parse_from(["gps14", "watch"]);
        match cli.command {
            Commands::Watch(args) => assert_eq!(args.interval, 10),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_locations_default_all() {
        let cli = Cli::parse_from(["gps14", "locations"]);
        match cli.command {
            Commands::Locations(args) => assert_eq!(args.imei, "*"),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
