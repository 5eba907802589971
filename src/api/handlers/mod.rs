//! # 请求处理器
//!
//! 每个资源一个处理器模块，(资源, HTTP 动词) 对应一个处理函数

pub mod about;
pub mod auth;
pub mod categories;
pub mod contact;
pub mod dashboard;
pub mod health;
pub mod orders;
pub mod pages;
pub mod products;
pub mod projects;
