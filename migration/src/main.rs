use sea_orm_migration::prelude::*;
use std::env;
use std::path::Path;

#[tokio::main]
async fn main() {
    // 未设置 DATABASE_URL 时落到工作区根目录下的 data/dev.db，
    // 兼容从工作区根或 migration 目录内执行
    if env::var("DATABASE_URL").is_err() {
        let db_path = if Path::new("migration").is_dir() {
            "data/dev.db"
        } else {
            "../data/dev.db"
        };
        unsafe {
            env::set_var("DATABASE_URL", format!("sqlite://{db_path}"));
        }
    }
    cli::run_cli(migration::Migrator).await;
}
