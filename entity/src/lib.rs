//! # Entity 模块
//!
//! 包含所有 Sea-ORM 实体定义

pub mod users;
pub mod about_us;
pub mod projects;
pub mod contact_submissions;
pub mod pages;
pub mod categories;
pub mod products;
pub mod orders;
pub mod order_items;

pub use users::Entity as Users;
pub use about_us::Entity as AboutUs;
pub use projects::Entity as Projects;
pub use contact_submissions::Entity as ContactSubmissions;
pub use pages::Entity as Pages;
pub use categories::Entity as Categories;
pub use products::Entity as Products;
pub use orders::Entity as Orders;
pub use order_items::Entity as OrderItems;
