//! # 内容页处理器
//!
//! 页面对外统一按 slug 寻址

use axum::extract::State;
use chrono::Utc;
use entity::{pages, pages::Entity as Pages};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use serde::Deserialize;

use crate::api::extract::{Json, Path};
use crate::api::server::AppState;
use crate::error::{ApiError, Result};

/// 创建/更新页面请求
#[derive(Debug, Deserialize)]
pub struct PageRequest {
    /// 标题
    pub title: String,
    /// URL 标识
    pub slug: String,
    /// 正文
    pub content: String,
    /// 是否启用
    #[serde(default = "default_active")]
    pub is_active: bool,
}

const fn default_active() -> bool {
    true
}

/// 列出页面，按插入顺序返回
pub async fn list_pages(State(state): State<AppState>) -> Result<Json<Vec<pages::Model>>> {
    let items = Pages::find().all(state.db()).await?;
    Ok(Json(items))
}

/// 按 slug 获取页面
pub async fn get_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<pages::Model>> {
    let page = find_by_slug(&state, &slug).await?;
    Ok(Json(page))
}

/// 创建页面
pub async fn create_page(
    State(state): State<AppState>,
    Json(request): Json<PageRequest>,
) -> Result<Json<pages::Model>> {
    let model = pages::ActiveModel {
        title: Set(request.title),
        slug: Set(request.slug),
        content: Set(request.content),
        is_active: Set(request.is_active),
        updated_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    };
    let page = model.insert(state.db()).await?;
    Ok(Json(page))
}

/// 按 slug 更新页面，全量覆盖每个字段并刷新更新时间
///
/// 请求体中的 slug 可以与路径不同，即允许重命名页面。
pub async fn update_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(request): Json<PageRequest>,
) -> Result<Json<pages::Model>> {
    let existing = find_by_slug(&state, &slug).await?;

    let mut model: pages::ActiveModel = existing.into();
    model.title = Set(request.title);
    model.slug = Set(request.slug);
    model.content = Set(request.content);
    model.is_active = Set(request.is_active);
    model.updated_at = Set(Utc::now().naive_utc());
    let page = model.update(state.db()).await?;

    Ok(Json(page))
}

async fn find_by_slug(state: &AppState, slug: &str) -> Result<pages::Model> {
    Pages::find()
        .filter(pages::Column::Slug.eq(slug))
        .one(state.db())
        .await?
        .ok_or_else(|| ApiError::not_found(format!("页面 {slug} 不存在")))
}
