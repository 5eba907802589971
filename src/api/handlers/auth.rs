//! # 认证处理器
//!
//! 登录签发 Bearer 令牌；/me 返回令牌对应的当前用户

use axum::Extension;
use axum::extract::State;
use entity::{users, users::Entity as Users};
use sea_orm::EntityTrait;
use serde::Deserialize;
use std::sync::Arc;

use crate::api::extract::{Form, Json};
use crate::api::server::AppState;
use crate::auth::AuthContext;
use crate::auth::types::TokenResponse;
use crate::error::{ApiError, Result};

/// 登录请求（表单编码，username 字段承载邮箱）
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    /// 邮箱
    pub username: String,
    /// 密码
    pub password: String,
}

/// 用户登录
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Json<TokenResponse>> {
    let token = state
        .auth_service
        .login(state.db(), &form.username, &form.password)
        .await?;
    Ok(Json(token))
}

/// 获取当前用户
///
/// 认证中间件已验证令牌并注入 `AuthContext`。
pub async fn get_current_user(
    State(state): State<AppState>,
    Extension(auth): Extension<Arc<AuthContext>>,
) -> Result<Json<users::Model>> {
    let user = Users::find_by_id(auth.user_id)
        .one(state.db())
        .await?
        .ok_or_else(|| ApiError::unauthorized("用户不存在"))?;
    Ok(Json(user))
}
