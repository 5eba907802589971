//! # 后台统计处理器

use axum::extract::State;
use axum::response::Json;
use entity::{
    contact_submissions::Entity as ContactSubmissions, orders, orders::Entity as Orders,
    products::Entity as Products, projects::Entity as Projects,
};
use sea_orm::{ColumnTrait, EntityTrait, FromQueryResult, PaginatorTrait, QueryFilter, QuerySelect};
use serde::Serialize;

use crate::api::server::AppState;
use crate::error::Result;

/// 后台统计响应
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    /// 项目总数
    pub projects: u64,
    /// 商品总数
    pub products: u64,
    /// 订单总数
    pub orders: u64,
    /// 联系表单总数
    pub contacts: u64,
    /// 累计营收（最小货币单位，不含已取消订单）
    pub revenue: i64,
}

#[derive(Debug, FromQueryResult)]
struct RevenueRow {
    revenue: Option<i64>,
}

/// 获取后台统计数据
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<DashboardStats>> {
    let db = state.db();

    let projects = Projects::find().count(db).await?;
    let products = Products::find().count(db).await?;
    let order_count = Orders::find().count(db).await?;
    let contacts = ContactSubmissions::find().count(db).await?;

    // 已取消订单不计入营收
    let revenue = Orders::find()
        .select_only()
        .column_as(orders::Column::TotalAmount.sum(), "revenue")
        .filter(orders::Column::Status.ne("cancelled"))
        .into_model::<RevenueRow>()
        .one(db)
        .await?
        .and_then(|row| row.revenue)
        .unwrap_or(0);

    Ok(Json(DashboardStats {
        projects,
        products,
        orders: order_count,
        contacts,
        revenue,
    }))
}
