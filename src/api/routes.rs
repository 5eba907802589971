//! # 路由配置
//!
//! 定义所有API路由和路由组织。每个资源拆分公开路由与需要
//! Bearer 认证的路由，认证中间件只挂在后者上。

use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post, put};

use crate::api::handlers;
use crate::api::server::AppState;
use crate::auth::middleware::auth;

/// 创建所有路由
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        // 健康检查路由
        .route("/health", get(handlers::health::health_check))
        // 站点介绍路由
        .nest("/api/about", about_routes(state.clone()))
        // 项目路由
        .nest("/api/projects", project_routes(state.clone()))
        // 联系表单路由
        .nest("/api/contact", contact_routes(state.clone()))
        // 认证路由
        .nest("/api/auth", auth_routes(state.clone()))
        // 商品分类路由
        .nest("/api/categories", category_routes(state.clone()))
        // 商品路由
        .nest("/api/products", product_routes(state.clone()))
        // 订单路由
        .nest("/api/orders", order_routes(state.clone()))
        // 内容页路由
        .nest("/api/pages", page_routes(state.clone()))
        // 后台统计路由
        .nest("/api/dashboard", dashboard_routes(state.clone()))
        .with_state(state)
}

/// 站点介绍路由
fn about_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/", put(handlers::about::update_about))
        .route_layer(from_fn_with_state(state, auth));

    Router::new()
        .route("/", get(handlers::about::get_about))
        .merge(protected)
}

/// 项目路由
fn project_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(handlers::projects::create_project))
        .route(
            "/{id}",
            put(handlers::projects::update_project).delete(handlers::projects::delete_project),
        )
        .route_layer(from_fn_with_state(state, auth));

    Router::new()
        .route("/", get(handlers::projects::list_projects))
        .route("/{id}", get(handlers::projects::get_project))
        .merge(protected)
}

/// 联系表单路由
fn contact_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/", get(handlers::contact::list_contacts))
        .route_layer(from_fn_with_state(state, auth));

    Router::new()
        .route("/", post(handlers::contact::submit_contact))
        .merge(protected)
}

/// 认证路由
fn auth_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/me", get(handlers::auth::get_current_user))
        .route_layer(from_fn_with_state(state, auth));

    Router::new()
        .route("/login", post(handlers::auth::login))
        .merge(protected)
}

/// 商品分类路由
fn category_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(handlers::categories::create_category))
        .route_layer(from_fn_with_state(state, auth));

    Router::new()
        .route("/", get(handlers::categories::list_categories))
        .merge(protected)
}

/// 商品路由
fn product_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(handlers::products::create_product))
        .route_layer(from_fn_with_state(state, auth));

    Router::new()
        .route("/", get(handlers::products::list_products))
        .merge(protected)
}

/// 订单路由
fn order_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/", get(handlers::orders::list_orders))
        .route_layer(from_fn_with_state(state, auth));

    Router::new()
        .route("/", post(handlers::orders::create_order))
        .merge(protected)
}

/// 内容页路由
fn page_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(handlers::pages::create_page))
        .route("/{slug}", put(handlers::pages::update_page))
        .route_layer(from_fn_with_state(state, auth));

    Router::new()
        .route("/", get(handlers::pages::list_pages))
        .route("/{slug}", get(handlers::pages::get_page))
        .merge(protected)
}

/// 后台统计路由
fn dashboard_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/stats", get(handlers::dashboard::get_stats))
        .route_layer(from_fn_with_state(state, auth))
}
