//! # 认证类型定义
//!
//! 定义认证相关的数据结构和常量

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// JWT 载荷
///
/// `sub` 为用户邮箱，令牌在 `exp` 之前有效，无刷新与吊销机制。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    /// 主体（用户邮箱）
    pub sub: String,
    /// 签发时间
    pub iat: i64,
    /// 过期时间
    pub exp: i64,
    /// 签发者
    pub iss: String,
    /// 受众
    pub aud: String,
    /// JWT ID
    pub jti: String,
}

impl JwtClaims {
    /// 创建新的 JWT 载荷
    #[must_use]
    pub fn new(email: &str, expires_in_seconds: i64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: email.to_string(),
            iat: now,
            exp: now + expires_in_seconds,
            iss: "profile-api".to_string(),
            aud: "profile-api-users".to_string(),
            jti: uuid::Uuid::new_v4().to_string(),
        }
    }

    /// 检查 JWT 是否过期
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// 登录成功响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// 访问令牌
    pub access_token: String,
    /// 令牌类型，固定为 "bearer"
    pub token_type: String,
}

impl TokenResponse {
    /// 包装访问令牌
    #[must_use]
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// 从 Authorization 头解析 Bearer 令牌
#[must_use]
pub fn extract_bearer_token(auth_header: &str) -> Option<&str> {
    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_carry_subject_and_expiry() {
        let claims = JwtClaims::new("admin@myprofile.local", 1800);
        assert_eq!(claims.sub, "admin@myprofile.local");
        assert_eq!(claims.exp - claims.iat, 1800);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_expired_claims_detected() {
        let mut claims = JwtClaims::new("admin@myprofile.local", 1800);
        claims.exp = claims.iat - 60;
        assert!(claims.is_expired());
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(extract_bearer_token("Basic dXNlcg=="), None);
        assert_eq!(extract_bearer_token("Bearer "), None);
    }
}
