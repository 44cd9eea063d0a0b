use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr};

use crate::{Res, api, api::FrontState};

pub fn router(state: FrontState) -> Router {
    Router::new()
        .route("/", get(api::home).post(api::shorten))
        .route("/shorten/{short_code}", get(api::redirect))
        .route("/health", get(api::health))
        .layer(Extension(state))
}

pub async fn start_web_server(addr: &str, state: FrontState) -> Res<()> {
    let addr = SocketAddr::from_str(addr)
        .map_err(|e| format!("Failed to parse server address {}: {}", addr, e))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on http://{}", addr);

    axum::serve(listener, router(state)).await?;
    Ok(())
}
