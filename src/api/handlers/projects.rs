//! # 项目处理器
//!
//! 作品集项目的增删改查

use axum::extract::State;
use entity::{projects, projects::Entity as Projects};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use serde::Deserialize;
use tracing::info;

use crate::api::extract::{Json, Path};
use crate::api::response::MessageResponse;
use crate::api::server::AppState;
use crate::error::{ApiError, Result};

/// 创建/更新项目请求
#[derive(Debug, Deserialize)]
pub struct ProjectRequest {
    /// 标题
    pub title: String,
    /// 描述
    pub description: String,
    /// 技术栈
    pub technologies: Option<String>,
    /// 图片
    pub images: Option<String>,
    /// 项目链接
    pub project_url: Option<String>,
    /// GitHub 链接
    pub github_url: Option<String>,
    /// 是否精选
    #[serde(default)]
    pub featured: bool,
}

/// 列出项目，按创建时间倒序
pub async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<projects::Model>>> {
    let items = Projects::find()
        .order_by_desc(projects::Column::CreatedAt)
        .all(state.db())
        .await?;
    Ok(Json(items))
}

/// 按 id 获取项目
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<projects::Model>> {
    let project = Projects::find_by_id(id)
        .one(state.db())
        .await?
        .ok_or_else(|| ApiError::not_found(format!("项目 {id} 不存在")))?;
    Ok(Json(project))
}

/// 创建项目
pub async fn create_project(
    State(state): State<AppState>,
    Json(request): Json<ProjectRequest>,
) -> Result<Json<projects::Model>> {
    let model = projects::ActiveModel {
        title: Set(request.title),
        description: Set(request.description),
        technologies: Set(request.technologies),
        images: Set(request.images),
        project_url: Set(request.project_url),
        github_url: Set(request.github_url),
        featured: Set(request.featured),
        ..Default::default()
    };
    let project = model.insert(state.db()).await?;

    info!("Project {} created", project.id);
    Ok(Json(project))
}

/// 更新项目，全量覆盖每个字段
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<ProjectRequest>,
) -> Result<Json<projects::Model>> {
    let existing = Projects::find_by_id(id)
        .one(state.db())
        .await?
        .ok_or_else(|| ApiError::not_found(format!("项目 {id} 不存在")))?;

    let mut model: projects::ActiveModel = existing.into();
    model.title = Set(request.title);
    model.description = Set(request.description);
    model.technologies = Set(request.technologies);
    model.images = Set(request.images);
    model.project_url = Set(request.project_url);
    model.github_url = Set(request.github_url);
    model.featured = Set(request.featured);
    let project = model.update(state.db()).await?;

    Ok(Json(project))
}

/// 删除项目
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>> {
    let existing = Projects::find_by_id(id)
        .one(state.db())
        .await?
        .ok_or_else(|| ApiError::not_found(format!("项目 {id} 不存在")))?;

    Projects::delete_by_id(existing.id).exec(state.db()).await?;

    info!("Project {} deleted", id);
    Ok(Json(MessageResponse::new("Project deleted successfully")))
}
