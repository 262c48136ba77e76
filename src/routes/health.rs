use actix_web::{get, Responder};
use chrono::Utc;
use serde_json::json;

use crate::response;

/// Health check endpoint
///
/// Reports liveness and the current timestamp, wrapped in the same
/// `{code, status, data}` envelope every other endpoint uses.
#[get("/health")]
pub async fn health() -> impl Responder {
    response::ok(json!({
        "status": "ok",
        "timestamp": Utc::now()
    }))
}
