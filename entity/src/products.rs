//! # 商品实体定义

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 商品实体
///
/// `price` 以最小货币单位（分）存储，避免浮点舍入。
/// `category_id` 按约定指向分类，数据库层不做外键约束。
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub price: i64,
    pub stock: i32,
    pub category_id: i32,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
