//! # 订单实体定义
//!
//! 订单主表，行项目见 `order_items`

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 订单实体
///
/// `status` 以文本存储，取值校验在请求层完成，
/// 合法值为 pending/processing/shipped/delivered/cancelled。
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub customer_name: String,
    pub customer_email: String,
    pub total_amount: i64,
    pub status: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::order_items::Entity")]
    OrderItems,
}

impl Related<super::order_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
