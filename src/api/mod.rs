//! # API 模块
//!
//! Axum HTTP 服务器、路由与请求处理器

pub mod extract;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod server;

pub use server::{ApiServer, AppState};
