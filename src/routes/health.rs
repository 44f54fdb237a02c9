use axum::{Extension, Json};
use serde_json::{json, Value};

use crate::config::Config;

pub async fn health(Extension(config): Extension<Config>) -> Json<Value> {
    Json(json!({
        "status": "Healthy",
        "environment": config.environment,
    }))
}
