use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    Client, Method, Response, Url,
    header::{CONTENT_TYPE, HeaderMap, HeaderValue, LOCATION},
    redirect,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    config,
    error::ApiError,
    types::{CreateShortUrlRequest, Resolution, ShortUrl},
    utils,
};

use super::ShortUrlApi;

/// HTTP adapter for the shortening service.
///
/// Holds only configuration: a base address, the request timeout and the
/// default `Content-Type: application/json` header. Cheap to share behind an
/// `Arc` for the lifetime of the process.
///
/// Redirects are never followed. The service answers `GET /urls/{code}` with a
/// redirect, and following it would fetch the original site instead of
/// reporting the resolution.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    http: Client,
    base: Url,
}

impl ServiceClient {
    /// Builds a client for `base_url` with the standard 5000 ms timeout.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, config::REQUEST_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base = Url::parse(base_url.trim())
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;
        if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .redirect(redirect::Policy::none())
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self { http, base })
    }

    /// Base address without a trailing slash, as used in short links.
    pub fn base_url(&self) -> &str {
        self.base.as_str().trim_end_matches('/')
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        utils::join_segments(&self.base, segments)
            .ok_or_else(|| ApiError::InvalidBaseUrl(self.base.to_string()))
    }

    /// Sends one request through the logging hooks.
    ///
    /// `path` is the service-relative path used in log lines and errors.
    async fn send(
        &self,
        method: Method,
        path: &str,
        segments: &[&str],
        body: Option<&CreateShortUrlRequest>,
    ) -> Result<Response, ApiError> {
        let url = self.endpoint(segments)?;

        tracing::info!("Making request to: {}", path);

        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(resp) => resp,
            Err(source) => {
                tracing::error!("API Error: {}", source);
                return Err(ApiError::Transport {
                    path: path.to_string(),
                    source,
                });
            }
        };

        let status = response.status();
        if status.is_success() || status.is_redirection() {
            return Ok(response);
        }

        let payload = read_payload(response).await;
        match &payload {
            Some(payload) => tracing::error!("API Error: {}", payload),
            None => tracing::error!("API Error: {} answered {}", path, status),
        }

        Err(ApiError::Status {
            path: path.to_string(),
            status,
            payload,
        })
    }

    async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> Result<T, ApiError> {
        response.json::<T>().await.map_err(|source| {
            tracing::error!("API Error: {}", source);
            ApiError::Decode {
                path: path.to_string(),
                source,
            }
        })
    }
}

/// Reads an error body: JSON when it parses, raw text otherwise, `None` when
/// empty or unreadable.
async fn read_payload(response: Response) -> Option<Value> {
    let text = response.text().await.ok()?;
    if text.trim().is_empty() {
        return None;
    }
    Some(serde_json::from_str(&text).unwrap_or(Value::String(text)))
}

#[async_trait]
impl ShortUrlApi for ServiceClient {
    async fn list_urls(&self) -> Result<Vec<ShortUrl>, ApiError> {
        let path = "/urls";
        let response = self.send(Method::GET, path, &["urls"], None).await?;
        Self::decode(path, response).await
    }

    async fn create_url(&self, url: &str) -> Result<ShortUrl, ApiError> {
        let path = "/urls";
        let body = CreateShortUrlRequest {
            url: url.to_string(),
        };
        let response = self
            .send(Method::POST, path, &["urls"], Some(&body))
            .await?;
        Self::decode(path, response).await
    }

    async fn resolve(&self, short_code: &str) -> Result<Resolution, ApiError> {
        let path = format!("/urls/{}", short_code);
        let response = self
            .send(Method::GET, &path, &["urls", short_code], None)
            .await?;

        // relative targets point into the service, not the caller's origin
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(|loc| match response.url().join(loc) {
                Ok(absolute) => absolute.to_string(),
                Err(_) => loc.to_string(),
            });

        Ok(Resolution {
            status: response.status().as_u16(),
            location,
        })
    }
}
