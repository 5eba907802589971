//! # 配置模块
//!
//! 从 toml 配置文件与环境变量加载应用配置

mod app_config;

pub use app_config::{AppConfig, AuthSettings, DatabaseConfig, ServerConfig};

use std::env;
use std::path::Path;

use crate::error::{ApiError, Result};

/// 加载配置文件
///
/// 按 `RUST_ENV` 选择 `config/config.{env}.toml`，文件不存在时使用默认配置。
/// `DATABASE_URL`、`JWT_SECRET`、`PORT` 环境变量优先于文件内容。
pub fn load_config() -> Result<AppConfig> {
    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
    let config_file = format!("config/config.{env_name}.toml");

    let mut config = if Path::new(&config_file).exists() {
        let config_content = std::fs::read_to_string(&config_file).map_err(|e| {
            ApiError::config_with_source(format!("读取配置文件失败: {config_file}"), e)
        })?;
        toml::from_str(&config_content)?
    } else {
        tracing::debug!("配置文件 {} 不存在，使用默认配置", config_file);
        AppConfig::default()
    };

    apply_env_overrides(&mut config);

    // 验证配置的有效性
    config
        .validate()
        .map_err(ApiError::config)?;

    Ok(config)
}

/// 环境变量覆盖
fn apply_env_overrides(config: &mut AppConfig) {
    if let Ok(url) = env::var("DATABASE_URL") {
        config.database.url = url;
    }
    if let Ok(secret) = env::var("JWT_SECRET") {
        config.auth.jwt_secret = secret;
    }
    if let Ok(port) = env::var("PORT")
        && let Ok(port) = port.parse()
    {
        config.server.port = port;
    }
}
