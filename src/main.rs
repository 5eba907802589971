//! # MyProfile API 主程序
//!
//! 作品集与小型店铺的后端服务

use profile_api::{
    Result,
    api::{ApiServer, AppState},
    auth::{AuthService, JwtManager},
    config, database, logging,
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志系统
    logging::init_logging(None);

    // 加载配置
    let config = config::load_config()?;

    // 初始化数据库连接并执行迁移
    let db = database::init_database(&config.database).await?;
    database::run_migrations(&db).await?;

    // 组装应用状态
    let jwt_manager = JwtManager::new(&config.auth);
    let auth_service = AuthService::new(jwt_manager);
    let state = AppState::new(db, auth_service);

    // 启动服务
    info!("服务启动");
    let server = ApiServer::new(config.server, state);
    if let Err(e) = server.serve().await {
        error!("服务启动失败: {e:?}");
        std::process::exit(1);
    }

    info!("服务正常关闭");
    Ok(())
}
