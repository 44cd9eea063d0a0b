use axum::{Extension, response::Json};
use serde_json::{Value, json};

use super::FrontState;

pub async fn health(Extension(state): Extension<FrontState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": state.base_url,
    }))
}
