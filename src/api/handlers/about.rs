//! # 站点介绍处理器
//!
//! About Us 为单行资源，约定只使用第一行；首次读取时懒创建默认内容。

use axum::extract::State;
use entity::{about_us, about_us::Entity as AboutUs};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use serde::Deserialize;

use crate::api::extract::Json;
use crate::api::server::AppState;
use crate::error::Result;

/// 更新站点介绍请求
///
/// PUT 为全量覆盖：未提交的可选字段会被清空。
#[derive(Debug, Deserialize)]
pub struct AboutUsRequest {
    /// 标题
    pub title: String,
    /// 描述
    pub description: String,
    /// 使命
    pub mission: Option<String>,
    /// 愿景
    pub vision: Option<String>,
    /// 团队成员
    pub team_members: Option<String>,
    /// 图片
    pub images: Option<String>,
}

/// 获取站点介绍
///
/// 表为空时创建一条固定默认内容，并发首读可能竞争建行，
/// 表上没有唯一约束，这是已接受的限制。
pub async fn get_about(State(state): State<AppState>) -> Result<Json<about_us::Model>> {
    if let Some(about) = AboutUs::find().one(state.db()).await? {
        return Ok(Json(about));
    }

    let default_about = about_us::ActiveModel {
        title: Set("About Us".to_string()),
        description: Set(
            "Welcome to our profile. We specialize in building amazing digital experiences."
                .to_string(),
        ),
        mission: Set(Some("To innovate and deliver quality software.".to_string())),
        vision: Set(Some("To be a global leader in technology.".to_string())),
        ..Default::default()
    };
    let about = default_about.insert(state.db()).await?;

    Ok(Json(about))
}

/// 更新站点介绍
///
/// 已有行则逐字段覆盖，没有行则按请求内容创建。
pub async fn update_about(
    State(state): State<AppState>,
    Json(request): Json<AboutUsRequest>,
) -> Result<Json<about_us::Model>> {
    let about = match AboutUs::find().one(state.db()).await? {
        Some(existing) => {
            let mut model: about_us::ActiveModel = existing.into();
            model.title = Set(request.title);
            model.description = Set(request.description);
            model.mission = Set(request.mission);
            model.vision = Set(request.vision);
            model.team_members = Set(request.team_members);
            model.images = Set(request.images);
            model.update(state.db()).await?
        }
        None => {
            let model = about_us::ActiveModel {
                title: Set(request.title),
                description: Set(request.description),
                mission: Set(request.mission),
                vision: Set(request.vision),
                team_members: Set(request.team_members),
                images: Set(request.images),
                ..Default::default()
            };
            model.insert(state.db()).await?
        }
    };

    Ok(Json(about))
}
