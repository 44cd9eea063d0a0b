#![allow(dead_code)]

use axum::Router;
use serde_json::{Value, json};
use tokio::net::TcpListener;

/// Serves `router` on an ephemeral local port and returns its base url.
pub async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// A base url nothing listens on.
pub async fn closed_port() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn record(id: &str, original: &str, code: &str, access_count: u64) -> Value {
    json!({
        "id": id,
        "original": original,
        "shortCode": code,
        "accessCount": access_count,
        "updatedAt": "2024-01-01T00:00:00Z"
    })
}
