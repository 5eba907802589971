//! # 认证集成测试
//!
//! 登录、令牌验证与受保护路由的完整流程

mod common;

use axum::http::StatusCode;
use bcrypt::{DEFAULT_COST, hash};
use entity::users;
use pretty_assertions::assert_eq;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use serde_json::json;

use profile_api::auth::JwtManager;
use profile_api::config::AuthSettings;

use common::{TestApp, form_request, get_request, get_request_auth, json_request};

#[tokio::test]
async fn test_login_roundtrip_with_me() {
    let app = TestApp::setup().await;

    let password_hash = hash("s3cret-pass", DEFAULT_COST).unwrap();
    let user = users::ActiveModel {
        name: Set("Bob".to_string()),
        email: Set("bob@example.com".to_string()),
        password_hash: Set(password_hash),
        is_admin: Set(false),
        ..Default::default()
    };
    user.insert(&app.db).await.unwrap();

    let (status, body) = app
        .send(form_request(
            "/api/auth/login",
            "username=bob%40example.com&password=s3cret-pass",
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token_type"], "bearer");
    let token = body["access_token"].as_str().unwrap().to_string();

    // 令牌换回同一个用户，响应不包含密码哈希
    let (status, me) = app.send(get_request_auth("/api/auth/me", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["email"], "bob@example.com");
    assert_eq!(me["name"], "Bob");
    assert!(me.get("password_hash").is_none());
}

#[tokio::test]
async fn test_login_wrong_password_rejected() {
    let app = TestApp::setup().await;

    let (status, body) = app
        .send(form_request(
            "/api/auth/login",
            "username=admin%40myprofile.local&password=wrong-password",
        ))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "AUTH_ERROR");
}

#[tokio::test]
async fn test_login_unknown_email_rejected_with_same_error() {
    let app = TestApp::setup().await;

    let (status_unknown, body_unknown) = app
        .send(form_request(
            "/api/auth/login",
            "username=nobody%40example.com&password=whatever",
        ))
        .await;
    let (status_wrong, body_wrong) = app
        .send(form_request(
            "/api/auth/login",
            "username=admin%40myprofile.local&password=whatever",
        ))
        .await;

    // 未区分邮箱不存在与密码错误
    assert_eq!(status_unknown, StatusCode::UNAUTHORIZED);
    assert_eq!(status_wrong, StatusCode::UNAUTHORIZED);
    assert_eq!(body_unknown["error"]["message"], body_wrong["error"]["message"]);
}

#[tokio::test]
async fn test_empty_credentials_rejected_before_lookup() {
    let app = TestApp::setup().await;

    let (status, _) = app
        .send(form_request("/api/auth/login", "username=&password="))
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_me_without_token_rejected() {
    let app = TestApp::setup().await;

    let (status, body) = app.send(get_request("/api/auth/me")).await;

    // 中间件的拒绝同样走统一 JSON 错误格式，不是空体 401
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "AUTH_ERROR");
}

#[tokio::test]
async fn test_tampered_token_rejected() {
    let app = TestApp::setup().await;
    let token = app.login_as_admin().await;

    let mut tampered = token.clone();
    tampered.pop();
    tampered.push('A');

    let (status, _) = app.send(get_request_auth("/api/auth/me", &tampered)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let app = TestApp::setup().await;

    // 用相同密钥签发一个已过期的令牌
    let expired_manager = JwtManager::new(&AuthSettings {
        jwt_secret: app.auth_settings.jwt_secret.clone(),
        token_expire_minutes: -10,
    });
    let expired_token = expired_manager
        .generate_access_token("admin@myprofile.local")
        .unwrap();

    let (status, _) = app
        .send(get_request_auth("/api/auth/me", &expired_token))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_for_deleted_user_rejected() {
    let app = TestApp::setup().await;

    let password_hash = hash("pass-123", DEFAULT_COST).unwrap();
    let user = users::ActiveModel {
        name: Set("Temp".to_string()),
        email: Set("temp@example.com".to_string()),
        password_hash: Set(password_hash),
        is_admin: Set(false),
        ..Default::default()
    };
    let user = user.insert(&app.db).await.unwrap();

    let (_, body) = app
        .send(form_request(
            "/api/auth/login",
            "username=temp%40example.com&password=pass-123",
        ))
        .await;
    let token = body["access_token"].as_str().unwrap().to_string();

    // 令牌有效但主体已不存在
    entity::Users::delete_by_id(user.id)
        .exec(&app.db)
        .await
        .unwrap();

    let (status, _) = app.send(get_request_auth("/api/auth/me", &token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_mutations_require_auth() {
    let app = TestApp::setup().await;

    for (method, uri, body) in [
        (
            "POST",
            "/api/projects",
            json!({ "title": "x", "description": "y" }),
        ),
        (
            "POST",
            "/api/categories",
            json!({ "name": "x", "slug": "x" }),
        ),
        (
            "POST",
            "/api/products",
            json!({ "name": "x", "slug": "x", "price": 100, "category_id": 1 }),
        ),
        (
            "POST",
            "/api/pages",
            json!({ "title": "x", "slug": "x", "content": "y" }),
        ),
    ] {
        let (status, _) = app.send(json_request(method, uri, &body)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
    }

    let (status, _) = app.send(get_request("/api/orders")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = app.send(get_request("/api/dashboard/stats")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
