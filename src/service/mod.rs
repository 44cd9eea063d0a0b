//! # Shortening Service Module
//!
//! Client side of the backend REST surface. Everything the views know about the
//! service goes through [`ShortUrlApi`]; [`ServiceClient`] is the HTTP
//! implementation used at runtime.
//!
//! ## Endpoints
//!
//! - `GET /urls` - the full collection, in server order
//! - `POST /urls` - create a short URL from `{ "url": ... }`
//! - `GET /urls/{shortCode}` - resolve a code; the service performs the redirect
//!
//! ## Logging
//!
//! [`ServiceClient`] logs the target path of every outgoing request and the
//! payload (or error description) of every failed one, then returns the error
//! untouched. It never retries.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use shrtcli::service::{ServiceClient, ShortUrlApi};
//!
//! let client: Arc<dyn ShortUrlApi> = Arc::new(ServiceClient::new("http://localhost:8080")?);
//! let urls = client.list_urls().await?;
//! ```

mod client;

use async_trait::async_trait;

use crate::{
    error::ApiError,
    types::{Resolution, ShortUrl},
};

pub use client::ServiceClient;

/// Backend operations the views depend on.
///
/// # Implementations
///
/// - [`ServiceClient`] - reqwest over HTTP
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortUrlApi: Send + Sync {
    /// `GET /urls`. The order is whatever the service returns.
    async fn list_urls(&self) -> Result<Vec<ShortUrl>, ApiError>;

    /// `POST /urls` with `{ "url": url }`.
    async fn create_url(&self, url: &str) -> Result<ShortUrl, ApiError>;

    /// `GET /urls/{short_code}`.
    ///
    /// The code is sent as a single opaque path segment. Any 2xx or 3xx answer
    /// is a success.
    async fn resolve(&self, short_code: &str) -> Result<Resolution, ApiError>;
}
