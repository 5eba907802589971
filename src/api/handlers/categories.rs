//! # 商品分类处理器

use axum::extract::State;
use entity::{categories, categories::Entity as Categories};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use serde::Deserialize;

use crate::api::extract::Json;
use crate::api::server::AppState;
use crate::error::Result;

/// 创建分类请求
#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    /// 分类名称
    pub name: String,
    /// URL 标识
    pub slug: String,
    /// 父分类 id
    pub parent_id: Option<i32>,
}

/// 列出分类，按插入顺序返回
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<categories::Model>>> {
    let items = Categories::find().all(state.db()).await?;
    Ok(Json(items))
}

/// 创建分类
///
/// slug 重复时由唯一索引拒绝，错误上浮为数据库错误。
pub async fn create_category(
    State(state): State<AppState>,
    Json(request): Json<CategoryRequest>,
) -> Result<Json<categories::Model>> {
    let model = categories::ActiveModel {
        name: Set(request.name),
        slug: Set(request.slug),
        parent_id: Set(request.parent_id),
        ..Default::default()
    };
    let category = model.insert(state.db()).await?;
    Ok(Json(category))
}
