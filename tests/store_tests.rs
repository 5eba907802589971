//! # 店铺接口集成测试
//!
//! 分类、商品、订单与后台统计

mod common;

use axum::http::StatusCode;
use entity::{order_items::Entity as OrderItems, orders::Entity as Orders};
use pretty_assertions::assert_eq;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use serde_json::json;

use common::{TestApp, get_request, get_request_auth, json_request, json_request_auth};

#[tokio::test]
async fn test_category_create_and_list() {
    let app = TestApp::setup().await;
    let token = app.login_as_admin().await;

    let (status, created) = app
        .send(json_request_auth(
            "POST",
            "/api/categories",
            &json!({ "name": "Apparel", "slug": "apparel" }),
            &token,
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(created["id"].as_i64().is_some());
    assert!(created["parent_id"].is_null());

    let (status, list) = app.send(get_request("/api/categories")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["slug"], "apparel");
}

#[tokio::test]
async fn test_duplicate_category_slug_fails_loudly() {
    let app = TestApp::setup().await;
    let token = app.login_as_admin().await;

    let body = json!({ "name": "Apparel", "slug": "apparel" });
    let (status, _) = app
        .send(json_request_auth("POST", "/api/categories", &body, &token))
        .await;
    assert_eq!(status, StatusCode::OK);

    // 第二次创建同一 slug 必须以持久化错误失败，不能静默重复
    let (status, response) = app
        .send(json_request_auth("POST", "/api/categories", &body, &token))
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response["error"]["code"], "DATABASE_ERROR");

    let (_, list) = app.send(get_request("/api/categories")).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_product_list_filters_by_category() {
    let app = TestApp::setup().await;
    let token = app.login_as_admin().await;

    for (name, slug, category_id) in [
        ("T-Shirt", "t-shirt", 1),
        ("Mug", "mug", 2),
        ("Hoodie", "hoodie", 1),
    ] {
        let (status, _) = app
            .send(json_request_auth(
                "POST",
                "/api/products",
                &json!({
                    "name": name,
                    "slug": slug,
                    "price": 1999,
                    "stock": 10,
                    "category_id": category_id
                }),
                &token,
            ))
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, all) = app.send(get_request("/api/products")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 3);

    let (status, filtered) = app.send(get_request("/api/products?category_id=1")).await;
    assert_eq!(status, StatusCode::OK);
    let filtered = filtered.as_array().unwrap();
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|p| p["category_id"] == 1));
}

#[tokio::test]
async fn test_order_with_items_creates_all_rows() {
    let app = TestApp::setup().await;

    let (status, order) = app
        .send(json_request(
            "POST",
            "/api/orders",
            &json!({
                "customer_name": "Alice",
                "customer_email": "alice@example.com",
                "total_amount": 5997,
                "status": "pending",
                "items": [
                    { "product_id": 1, "quantity": 2, "price": 1999 },
                    { "product_id": 2, "quantity": 1, "price": 1999 }
                ]
            }),
        ))
        .await;

    assert_eq!(status, StatusCode::OK);
    let order_id = order["id"].as_i64().unwrap();
    assert_eq!(order["status"], "pending");
    assert_eq!(order["items"].as_array().unwrap().len(), 2);

    // 恰好 1 行订单 + 2 行行项目，且行项目都指向该订单
    assert_eq!(Orders::find().count(&app.db).await.unwrap(), 1);
    let items = OrderItems::find()
        .filter(entity::order_items::Column::OrderId.eq(order_id as i32))
        .all(&app.db)
        .await
        .unwrap();
    assert_eq!(items.len(), 2);
}

#[tokio::test]
async fn test_order_with_unknown_status_rejected_before_write() {
    let app = TestApp::setup().await;

    let (status, body) = app
        .send(json_request(
            "POST",
            "/api/orders",
            &json!({
                "customer_name": "Alice",
                "customer_email": "alice@example.com",
                "total_amount": 100,
                "status": "teleported",
                "items": []
            }),
        ))
        .await;

    // 校验失败发生在任何数据库写入之前，且以统一 JSON 错误格式返回
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(Orders::find().count(&app.db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_order_list_requires_auth_and_includes_items() {
    let app = TestApp::setup().await;

    for n in 0..2 {
        let (status, _) = app
            .send(json_request(
                "POST",
                "/api/orders",
                &json!({
                    "customer_name": format!("Customer {n}"),
                    "customer_email": "c@example.com",
                    "total_amount": 1000 + n,
                    "items": [{ "product_id": 1, "quantity": 1, "price": 1000 }]
                }),
            ))
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    let token = app.login_as_admin().await;
    let (status, list) = app.send(get_request_auth("/api/orders", &token)).await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert!(list.iter().all(|o| o["items"].as_array().unwrap().len() == 1));
    // 未显式提交 status 时默认 pending
    assert!(list.iter().all(|o| o["status"] == "pending"));
}

#[tokio::test]
async fn test_dashboard_stats_counts_and_revenue() {
    let app = TestApp::setup().await;
    let token = app.login_as_admin().await;

    for (amount, status_text) in [(1000, "delivered"), (500, "pending"), (9999, "cancelled")] {
        let (status, _) = app
            .send(json_request(
                "POST",
                "/api/orders",
                &json!({
                    "customer_name": "C",
                    "customer_email": "c@example.com",
                    "total_amount": amount,
                    "status": status_text,
                    "items": []
                }),
            ))
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, stats) = app
        .send(get_request_auth("/api/dashboard/stats", &token))
        .await;

    assert_eq!(status, StatusCode::OK);
    // 迁移种子了 3 个示例项目
    assert_eq!(stats["projects"], 3);
    assert_eq!(stats["orders"], 3);
    assert_eq!(stats["contacts"], 0);
    // 已取消订单不计入营收
    assert_eq!(stats["revenue"], 1500);
}
