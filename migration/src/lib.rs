pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_users_table;
mod m20240101_000002_create_about_us_table;
mod m20240101_000003_create_projects_table;
mod m20240101_000004_create_contact_submissions_table;
mod m20240101_000005_create_pages_table;
mod m20240101_000006_create_categories_table;
mod m20240101_000007_create_products_table;
mod m20240101_000008_create_orders_tables;
mod m20240101_000009_insert_default_admin_data;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users_table::Migration),
            Box::new(m20240101_000002_create_about_us_table::Migration),
            Box::new(m20240101_000003_create_projects_table::Migration),
            Box::new(m20240101_000004_create_contact_submissions_table::Migration),
            Box::new(m20240101_000005_create_pages_table::Migration),
            Box::new(m20240101_000006_create_categories_table::Migration),
            Box::new(m20240101_000007_create_products_table::Migration),
            Box::new(m20240101_000008_create_orders_tables::Migration),
            Box::new(m20240101_000009_insert_default_admin_data::Migration),
        ]
    }
}
