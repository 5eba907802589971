//! # 健康检查处理器

use axum::response::Json;
use serde_json::{Value, json};

/// 健康检查
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
