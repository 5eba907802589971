//! # 集成测试公共设施
//!
//! 在内存 sqlite 上跑完整迁移，构建真实路由进行端到端测试

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tower::util::ServiceExt;

use profile_api::api::{ApiServer, AppState};
use profile_api::auth::{AuthService, JwtManager};
use profile_api::config::AuthSettings;

/// 测试环境：真实路由 + 数据库句柄
pub struct TestApp {
    pub router: Router,
    pub db: DatabaseConnection,
    pub auth_settings: AuthSettings,
}

impl TestApp {
    /// 创建测试环境
    ///
    /// 内存库必须限制为单连接，否则连接池中的每个连接
    /// 各自持有一份独立的内存数据库。
    pub async fn setup() -> Self {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1);
        let db = Database::connect(options)
            .await
            .expect("connect in-memory sqlite");

        migration::Migrator::up(&db, None)
            .await
            .expect("run migrations");

        let auth_settings = AuthSettings::default();
        let auth_service = AuthService::new(JwtManager::new(&auth_settings));
        let state = AppState::new(db.clone(), auth_service);

        Self {
            router: ApiServer::router(state),
            db,
            auth_settings,
        }
    }

    /// 发送请求并返回响应
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("route request");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let body = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("parse json body")
        };
        (status, body)
    }

    /// 用种子管理员账号登录，返回访问令牌
    pub async fn login_as_admin(&self) -> String {
        let (status, body) = self
            .send(form_request(
                "/api/auth/login",
                "username=admin@myprofile.local&password=admin123",
            ))
            .await;
        assert_eq!(status, StatusCode::OK, "admin login failed: {body}");
        body["access_token"]
            .as_str()
            .expect("access_token in login response")
            .to_string()
    }
}

/// 构建 GET 请求
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// 构建带 Bearer 令牌的 GET 请求
pub fn get_request_auth(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

/// 构建 JSON 请求
pub fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// 构建原样字节的 JSON 请求（用于构造畸形请求体）
pub fn raw_json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// 构建带 Bearer 令牌的 JSON 请求
pub fn json_request_auth(
    method: &str,
    uri: &str,
    body: &serde_json::Value,
    token: &str,
) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// 构建表单编码请求（登录接口使用）
pub fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}
