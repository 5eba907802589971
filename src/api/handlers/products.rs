//! # 商品处理器

use axum::extract::State;
use entity::{products, products::Entity as Products};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use serde::Deserialize;

use crate::api::extract::{Json, Query};
use crate::api::server::AppState;
use crate::error::Result;

/// 商品列表查询参数
#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    /// 分类过滤
    pub category_id: Option<i32>,
}

/// 创建商品请求
#[derive(Debug, Deserialize)]
pub struct ProductRequest {
    /// 商品名称
    pub name: String,
    /// URL 标识
    pub slug: String,
    /// 价格（最小货币单位）
    pub price: i64,
    /// 库存
    #[serde(default)]
    pub stock: i32,
    /// 所属分类 id
    pub category_id: i32,
    /// 是否上架
    #[serde(default = "default_active")]
    pub is_active: bool,
}

const fn default_active() -> bool {
    true
}

/// 列出商品，可按分类过滤
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Result<Json<Vec<products::Model>>> {
    let mut select = Products::find();

    if let Some(category_id) = query.category_id {
        select = select.filter(products::Column::CategoryId.eq(category_id));
    }

    let items = select.all(state.db()).await?;
    Ok(Json(items))
}

/// 创建商品
pub async fn create_product(
    State(state): State<AppState>,
    Json(request): Json<ProductRequest>,
) -> Result<Json<products::Model>> {
    let model = products::ActiveModel {
        name: Set(request.name),
        slug: Set(request.slug),
        price: Set(request.price),
        stock: Set(request.stock),
        category_id: Set(request.category_id),
        is_active: Set(request.is_active),
        ..Default::default()
    };
    let product = model.insert(state.db()).await?;
    Ok(Json(product))
}
