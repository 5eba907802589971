//! # MyProfile API Library
//!
//! 作品集与小型店铺的后端：内容管理（站点介绍、项目、页面）、
//! 店铺（分类、商品、订单）、联系表单与基于 Bearer 令牌的认证。

pub mod api;
pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod logging;

pub use error::{ApiError, Result};
