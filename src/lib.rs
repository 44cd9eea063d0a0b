//! shrtcli library
//!
//! Client for a URL-shortening service: an HTTP adapter for the service's REST
//! surface, the list/create and redirect views that drive it, and the CLI and
//! local web front end that host those views.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints of the local web front end
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error types of the adapter and the views
//! - `server` - Router and listener of the local web front end
//! - `service` - The shortening service contract and its HTTP client
//! - `types` - Data structures and type definitions
//! - `utils` - Link and relative-time formatting
//! - `views` - List/create and redirect state machines
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use shrtcli::{config, service::ServiceClient, views::{ConsoleNotifier, RedirectView}};
//!
//! #[tokio::main]
//! async fn main() -> shrtcli::Res<()> {
//!     config::load_env().await?;
//!     let client = Arc::new(ServiceClient::new(&config::service_url())?);
//!     let view = RedirectView::new(client, Arc::new(ConsoleNotifier));
//!     view.activate("abc123").await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod server;
pub mod service;
pub mod types;
pub mod utils;
pub mod views;

/// Boxed-error result used by top-level glue such as the web server.
///
/// Adapter and view code return the typed errors from [`error`] instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational line with a blue `o` marker.
///
/// ```
/// info!("Recent URLs");
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success line with a green check mark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error line with a red `!` marker and exits with status 1.
///
/// Only for failures the command cannot continue from, such as an unusable
/// service url. View notifications never go through this macro.
///
/// ```
/// error!("Cannot use service url {}", url);
/// // not reached
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning line with a yellow `!` marker.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
