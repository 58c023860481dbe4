//! Progress indicators.

use std::future::Future;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const SPINNER_TICK_MS: u64 = 80;

fn spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

/// Spinner shown on stderr while a request is in flight.
///
/// Hidden in JSON mode so machine-readable output stays clean.
pub fn request_spinner(message: &str, json: bool) -> ProgressBar {
    if json {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(spinner_style());
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
    pb
}

/// Await `fut` behind a request spinner, clearing it when done.
pub async fn with_spinner<F: Future>(message: &str, json: bool, fut: F) -> F::Output {
    let pb = request_spinner(message, json);
    let output = fut.await;
    pb.finish_and_clear();
    output
}
