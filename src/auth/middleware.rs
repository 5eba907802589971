//! # 认证中间件
//!
//! 从请求头中提取JWT，验证并将其解析的用户信息注入到请求扩展中。

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::api::server::AppState;
use crate::auth::types::extract_bearer_token;
use crate::error::ApiError;

/// 包含认证用户信息的上下文
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: i32,
    pub email: String,
    pub is_admin: bool,
}

/// Axum认证中间件
///
/// 拒绝响应走统一的 JSON 错误格式，不返回空体 401。
pub async fn auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    // 从请求头中提取 `Authorization`
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|header| header.to_str().ok());

    let Some(auth_header) = auth_header else {
        return Err(ApiError::unauthorized("缺少认证令牌"));
    };

    // 提取 Bearer Token
    let Some(token) = extract_bearer_token(auth_header) else {
        return Err(ApiError::unauthorized("认证头必须为 Bearer 格式"));
    };

    // 验证 Token 并确认主体仍然对应一个用户；失败原因原样上浮
    let user = state.auth_service.current_user(&state.database, token).await?;

    let auth_context = Arc::new(AuthContext {
        user_id: user.id,
        email: user.email,
        is_admin: user.is_admin,
    });
    request.extensions_mut().insert(auth_context);

    // 将请求传递给下一个中间件或处理器
    Ok(next.run(request).await)
}
