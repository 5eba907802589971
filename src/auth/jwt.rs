//! JWT token management
//!
//! Provides JWT token generation and validation functionality

use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode,
};

use crate::auth::types::JwtClaims;
use crate::config::AuthSettings;
use crate::error::{ApiError, Result};

/// JWT token manager
pub struct JwtManager {
    /// Encoding key
    encoding_key: EncodingKey,
    /// Decoding key
    decoding_key: DecodingKey,
    /// Validation configuration
    validation: Validation,
    /// 令牌有效期（秒）
    expires_in_seconds: i64,
}

impl JwtManager {
    /// Create new JWT manager
    #[must_use]
    pub fn new(settings: &AuthSettings) -> Self {
        let encoding_key = EncodingKey::from_secret(settings.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(settings.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&["profile-api"]);
        validation.set_audience(&["profile-api-users"]);
        validation.validate_exp = true;
        validation.validate_nbf = false;
        validation.leeway = 30; // 30 seconds tolerance

        Self {
            encoding_key,
            decoding_key,
            validation,
            expires_in_seconds: settings.token_expire_minutes * 60,
        }
    }

    /// Generate access token for the given subject (email)
    pub fn generate_access_token(&self, email: &str) -> Result<String> {
        let claims = JwtClaims::new(email, self.expires_in_seconds);
        let header = Header::new(Algorithm::HS256);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| ApiError::internal(format!("Token generation failed: {e}")))
    }

    /// Validate and parse token
    ///
    /// 任何验证失败（签名错误、过期、格式非法）都归入认证错误。
    pub fn validate_token(&self, token: &str) -> Result<JwtClaims> {
        let token_data: TokenData<JwtClaims> = decode(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    ApiError::unauthorized("认证令牌已过期")
                }
                _ => ApiError::unauthorized(format!("Token validation failed: {e}")),
            })?;

        let claims = token_data.claims;

        // Additional check for token expiration
        if claims.is_expired() {
            return Err(ApiError::unauthorized("认证令牌已过期"));
        }

        Ok(claims)
    }
}
