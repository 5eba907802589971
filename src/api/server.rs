//! # API 服务器
//!
//! Axum HTTP服务器，承载全部内容与店铺接口

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::auth::AuthService;
use crate::config::ServerConfig;
use crate::error::{ApiError, Result};

/// 应用状态
///
/// 持久化句柄在进程启动时构建一次，经由 axum state 注入每个 handler，
/// 不依赖任何全局可变状态。
#[derive(Clone)]
pub struct AppState {
    /// 数据库连接池
    pub database: Arc<DatabaseConnection>,
    /// 认证服务
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    #[must_use]
    pub fn new(database: DatabaseConnection, auth_service: AuthService) -> Self {
        Self {
            database: Arc::new(database),
            auth_service: Arc::new(auth_service),
        }
    }

    /// 数据库连接引用
    #[must_use]
    pub fn db(&self) -> &DatabaseConnection {
        &self.database
    }
}

/// API 服务器
pub struct ApiServer {
    /// 配置
    config: ServerConfig,
    /// 路由器
    router: Router,
}

impl ApiServer {
    /// 创建新的 API 服务器
    #[must_use]
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        let router = Self::create_router(state, &config);
        Self { config, router }
    }

    /// 创建路由器
    fn create_router(state: AppState, config: &ServerConfig) -> Router {
        let mut router = super::routes::create_routes(state).layer(TraceLayer::new_for_http());

        // 前端直接访问，开发环境放开跨域
        if config.enable_cors {
            router = router.layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            );
        }

        router
    }

    /// 仅构建路由（集成测试使用）
    #[must_use]
    pub fn router(state: AppState) -> Router {
        Self::create_router(state, &ServerConfig::default())
    }

    /// 启动服务器并一直运行
    pub async fn serve(self) -> Result<()> {
        let addr: SocketAddr = format!("{}:{}", self.config.bind_address, self.config.port)
            .parse()
            .map_err(|e| ApiError::config(format!("无效的监听地址: {e}")))?;

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| ApiError::internal(format!("端口绑定失败 {addr}: {e}")))?;

        info!("API server listening on {}", addr);

        axum::serve(listener, self.router)
            .await
            .map_err(|e| ApiError::internal(format!("服务器运行失败: {e}")))
    }
}
