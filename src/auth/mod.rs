//! # 认证模块
//!
//! 密码校验、JWT 令牌签发与验证、请求认证中间件

pub mod jwt;
pub mod middleware;
pub mod service;
pub mod types;

pub use jwt::JwtManager;
pub use middleware::AuthContext;
pub use service::AuthService;
pub use types::{JwtClaims, TokenResponse};
