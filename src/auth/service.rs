//! # 认证服务
//!
//! 封装登录与令牌解析的业务逻辑，避免在 HTTP handler 中重复实现。

use bcrypt::verify;
use entity::{users, users::Entity as Users};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::{debug, info, warn};

use crate::auth::jwt::JwtManager;
use crate::auth::types::TokenResponse;
use crate::error::{ApiError, Result};

/// 无效凭据统一使用同一条消息，不区分邮箱不存在与密码错误
const INVALID_CREDENTIALS: &str = "邮箱或密码错误";

/// 认证服务
pub struct AuthService {
    /// JWT 管理器
    pub jwt_manager: JwtManager,
}

impl AuthService {
    /// 创建认证服务
    #[must_use]
    pub const fn new(jwt_manager: JwtManager) -> Self {
        Self { jwt_manager }
    }

    /// 用户登录，校验凭据并签发访问令牌
    pub async fn login(
        &self,
        db: &DatabaseConnection,
        email: &str,
        password: &str,
    ) -> Result<TokenResponse> {
        if email.trim().is_empty() || password.trim().is_empty() {
            return Err(ApiError::validation("邮箱和密码不能为空"));
        }

        let user = Users::find()
            .filter(users::Column::Email.eq(email))
            .one(db)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: unknown email {}", email);
                ApiError::unauthorized(INVALID_CREDENTIALS)
            })?;

        // bcrypt 校验本身是单向的，不做明文比较
        let password_matches = verify(password, &user.password_hash)
            .map_err(|e| ApiError::internal(format!("密码校验失败: {e}")))?;
        if !password_matches {
            warn!("Login failed: wrong password for {}", email);
            return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
        }

        let access_token = self.jwt_manager.generate_access_token(&user.email)?;

        info!("User {} logged in successfully", user.email);
        Ok(TokenResponse::bearer(access_token))
    }

    /// 解析令牌并加载对应用户
    ///
    /// 令牌无效、过期或主体已不存在时均返回认证错误。
    pub async fn current_user(
        &self,
        db: &DatabaseConnection,
        token: &str,
    ) -> Result<users::Model> {
        let claims = self.jwt_manager.validate_token(token).map_err(|err| {
            debug!("Token validation failed: {}", err);
            err
        })?;

        Users::find()
            .filter(users::Column::Email.eq(&claims.sub))
            .one(db)
            .await?
            .ok_or_else(|| {
                warn!("Token valid but user {} not found in database", claims.sub);
                ApiError::unauthorized("用户不存在")
            })
    }
}
