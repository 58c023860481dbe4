//! Latest events with optional type filtering.

use regex::{Regex, RegexBuilder};

use gps14_core::poll::{LoadState, EVENTS_POLL_INTERVAL};
use gps14_core::{Event, EventWindow, Poller};

use crate::cli::EventsArgs;
use crate::context::Context;
use crate::error::CliError;
use crate::output::get_formatter;
use crate::style::with_spinner;

use super::ctrl_c;

/// Run the events command
pub async fn run_events(ctx: &Context, args: EventsArgs) -> Result<(), CliError> {
    let pattern = args.filter.as_deref().map(glob_to_regex).transpose()?;
    let window = EventWindow::from(args.range);

    ctx.authenticate().await?;
    let formatter = get_formatter(ctx.json);

    if args.follow {
        let client = ctx.client.as_ref();
        Poller::new(EVENTS_POLL_INTERVAL)
            .run(
                || client.get_last_events(window),
                |state| match state {
                    LoadState::Loaded(events) => {
                        let events = filter_events(events, pattern.as_ref());
                        println!("{}", formatter.format_events(&events));
                    }
                    LoadState::Failed(message) => eprintln!("Error: {}", message),
                },
                ctrl_c(),
            )
            .await;
        return Ok(());
    }

    let events = with_spinner(
        &format!("Loading events ({})...", window.as_str()),
        ctx.json,
        ctx.client.get_last_events(window),
    )
    .await?;

    let events = filter_events(events, pattern.as_ref());

    println!("{}", formatter.format_events(&events));

    Ok(())
}

/// Convert a `*`/`?` wildcard pattern into an anchored, case-insensitive regex.
fn glob_to_regex(pattern: &str) -> Result<Regex, CliError> {
    let mut regex = String::from("^");
    for c in pattern.chars() {
        match c {
            '*' => regex.push_str(".*"),
            '?' => regex.push('.'),
            other => regex.push_str(&regex::escape(&other.to_string())),
        }
    }
    regex.push('$');

    RegexBuilder::new(&regex)
        .case_insensitive(true)
        .build()
        .map_err(|e| CliError::InvalidArgument(format!("Invalid filter '{}': {}", pattern, e)))
}

fn filter_events(events: Vec<Event>, pattern: Option<&Regex>) -> Vec<Event> {
    match pattern {
        Some(pattern) => events
            .into_iter()
            .filter(|e| pattern.is_match(&e.event_type))
            .collect(),
        None => events,
    }
}
