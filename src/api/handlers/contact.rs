//! # 联系表单处理器
//!
//! 提交公开，查询需要认证；记录只追加

use axum::extract::State;
use entity::{contact_submissions, contact_submissions::Entity as ContactSubmissions};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use serde::Deserialize;
use tracing::info;

use crate::api::extract::Json;
use crate::api::server::AppState;
use crate::error::Result;

/// 联系表单提交请求
#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    /// 姓名
    pub name: String,
    /// 邮箱
    pub email: String,
    /// 留言内容
    pub message: String,
}

/// 提交联系表单
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(request): Json<ContactRequest>,
) -> Result<Json<contact_submissions::Model>> {
    let model = contact_submissions::ActiveModel {
        name: Set(request.name),
        email: Set(request.email),
        message: Set(request.message),
        ..Default::default()
    };
    let submission = model.insert(state.db()).await?;

    info!("Contact submission {} received", submission.id);
    Ok(Json(submission))
}

/// 列出联系表单提交，按创建时间倒序
pub async fn list_contacts(
    State(state): State<AppState>,
) -> Result<Json<Vec<contact_submissions::Model>>> {
    let items = ContactSubmissions::find()
        .order_by_desc(contact_submissions::Column::CreatedAt)
        .all(state.db())
        .await?;
    Ok(Json(items))
}
