//! # CLI Module
//!
//! User-facing commands of shrtcli. Each command wires a view to the shared
//! [`ServiceClient`] and a console notifier, runs it, and prints the resulting
//! state.
//!
//! ## Commands
//!
//! - [`list`] - recent short URLs, as returned by the service
//! - [`shorten`] - create a short URL and show it above the recent list
//! - [`open`] - resolve a short code and report where it points
//! - [`copy`] - put the short link for a code on the clipboard
//! - [`serve`] - run the local web front end
//!
//! ## Usage Patterns
//!
//! ```bash
//! shrtcli shorten https://example.com/some/long/path --copy
//! shrtcli list
//! shrtcli open abc123 --browse
//! SHRT_SERVICE_URL=https://sho.rt shrtcli serve --addr 127.0.0.1:3000
//! ```
//!
//! ## Exit Status
//!
//! Failures are reported as notifications first; the process then exits with
//! status 1. A failed initial list load is not a failure, the list is simply
//! empty.

mod copy;
mod list;
mod open;
mod serve;
mod shorten;

use std::{sync::Arc, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{error, service::ServiceClient, types::ShortUrl, utils, warning};

pub use copy::copy;
pub use list::list;
pub use open::open;
pub use serve::serve;
pub use shorten::shorten;

fn connect(service_url: &str) -> Arc<ServiceClient> {
    match ServiceClient::new(service_url) {
        Ok(client) => Arc::new(client),
        Err(e) => error!("Cannot use service url {}. Err: {}", service_url, e),
    }
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

fn print_recent(urls: &[ShortUrl], base_url: &str) {
    if urls.is_empty() {
        warning!("No shortened URLs yet.");
        return;
    }

    let rows = utils::to_table_rows(urls, base_url, chrono::Utc::now());
    println!("{}", Table::new(rows));
}
