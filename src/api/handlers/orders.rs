//! # 订单处理器
//!
//! 订单头与行项目在同一事务中写入，要么全部落库要么全部回滚

use axum::extract::State;
use entity::{order_items, order_items::Entity as OrderItems, orders, orders::Entity as Orders};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set, TransactionTrait};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::extract::Json;
use crate::api::server::AppState;
use crate::error::{ApiError, Result};

/// 订单状态
///
/// 在请求层校验，持久化时以文本存储。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// 持久化使用的文本值
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// 订单行项目请求
#[derive(Debug, Deserialize)]
pub struct OrderItemRequest {
    /// 商品 id
    pub product_id: i32,
    /// 数量
    pub quantity: i32,
    /// 下单时单价（最小货币单位）
    pub price: i64,
}

/// 创建订单请求
#[derive(Debug, Deserialize)]
pub struct OrderRequest {
    /// 客户姓名
    pub customer_name: String,
    /// 客户邮箱
    pub customer_email: String,
    /// 订单总额（最小货币单位）
    pub total_amount: i64,
    /// 订单状态
    #[serde(default)]
    pub status: OrderStatus,
    /// 行项目
    pub items: Vec<OrderItemRequest>,
}

/// 订单响应，包含行项目
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    /// 订单 id
    pub id: i32,
    /// 客户姓名
    pub customer_name: String,
    /// 客户邮箱
    pub customer_email: String,
    /// 订单总额
    pub total_amount: i64,
    /// 订单状态
    pub status: String,
    /// 创建时间
    pub created_at: chrono::NaiveDateTime,
    /// 行项目
    pub items: Vec<order_items::Model>,
}

impl OrderResponse {
    fn from_parts(order: orders::Model, items: Vec<order_items::Model>) -> Self {
        Self {
            id: order.id,
            customer_name: order.customer_name,
            customer_email: order.customer_email,
            total_amount: order.total_amount,
            status: order.status,
            created_at: order.created_at,
            items,
        }
    }
}

/// 创建订单
///
/// 订单头与 N 条行项目在一个事务中提交，行项目写入失败时
/// 订单头一并回滚，不会留下空订单。
pub async fn create_order(
    State(state): State<AppState>,
    Json(request): Json<OrderRequest>,
) -> Result<Json<OrderResponse>> {
    if request.customer_name.trim().is_empty() || request.customer_email.trim().is_empty() {
        return Err(ApiError::validation("客户姓名和邮箱不能为空"));
    }

    let (order, items) = state
        .db()
        .transaction::<_, (orders::Model, Vec<order_items::Model>), ApiError>(|txn| {
            Box::pin(async move {
                let order_model = orders::ActiveModel {
                    customer_name: Set(request.customer_name),
                    customer_email: Set(request.customer_email),
                    total_amount: Set(request.total_amount),
                    status: Set(request.status.as_str().to_string()),
                    ..Default::default()
                };
                let order = order_model.insert(txn).await?;

                let mut items = Vec::with_capacity(request.items.len());
                for item in request.items {
                    let item_model = order_items::ActiveModel {
                        order_id: Set(order.id),
                        product_id: Set(item.product_id),
                        quantity: Set(item.quantity),
                        price: Set(item.price),
                        ..Default::default()
                    };
                    items.push(item_model.insert(txn).await?);
                }

                Ok((order, items))
            })
        })
        .await?;

    info!("Order {} created with {} items", order.id, items.len());
    Ok(Json(OrderResponse::from_parts(order, items)))
}

/// 列出订单，按创建时间倒序，每个订单附带行项目
pub async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<OrderResponse>>> {
    let rows = Orders::find()
        .find_with_related(OrderItems)
        .order_by_desc(orders::Column::CreatedAt)
        .all(state.db())
        .await?;

    let orders = rows
        .into_iter()
        .map(|(order, items)| OrderResponse::from_parts(order, items))
        .collect();

    Ok(Json(orders))
}
