//! # API Module
//!
//! HTTP endpoints of the local web front end started by `shrtcli serve`. Each
//! page load builds a fresh view, so every request is one view activation.
//!
//! ## Endpoints
//!
//! - [`home`] - `GET /`, recent short URLs and the shorten form
//! - [`shorten`] - `POST /`, submits the form and renders the result
//! - [`redirect`] - `GET /shorten/{shortCode}`, resolves a code and forwards the
//!   browser to the original URL
//! - [`health`] - `GET /health`, status and version
//!
//! Notifications raised by the views are collected per request and rendered at
//! the top of the page.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use shrtcli::{api::FrontState, server, service::ServiceClient};
//!
//! let client = Arc::new(ServiceClient::new("http://localhost:8080")?);
//! let app = server::router(FrontState::new(client.clone(), client.base_url()));
//! ```

mod health;
mod home;
mod page;
mod redirect;

use std::sync::Arc;

use crate::service::ShortUrlApi;

pub use health::health;
pub use home::{ShortenForm, home, shorten};
pub use redirect::redirect;

/// Shared by every handler. Read-only.
#[derive(Clone)]
pub struct FrontState {
    pub api: Arc<dyn ShortUrlApi>,
    pub base_url: String,
}

impl FrontState {
    pub fn new(api: Arc<dyn ShortUrlApi>, base_url: &str) -> Self {
        Self {
            api,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}
