use bcrypt::{DEFAULT_COST, hash};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 插入默认管理员用户
        // 默认密码 admin123，部署后应立即修改
        let password_hash = hash("admin123", DEFAULT_COST)
            .map_err(|e| DbErr::Custom(format!("密码哈希失败: {e}")))?;

        manager
            .exec_stmt(
                Query::insert()
                    .into_table(Users::Table)
                    .columns([
                        Users::Name,
                        Users::Email,
                        Users::PasswordHash,
                        Users::IsAdmin,
                    ])
                    .values_panic([
                        "Admin".into(),
                        "admin@myprofile.local".into(),
                        password_hash.into(),
                        true.into(),
                    ])
                    .to_owned(),
            )
            .await?;

        // 插入默认 About Us 内容
        manager
            .exec_stmt(
                Query::insert()
                    .into_table(AboutUs::Table)
                    .columns([
                        AboutUs::Title,
                        AboutUs::Description,
                        AboutUs::Mission,
                        AboutUs::Vision,
                        AboutUs::TeamMembers,
                    ])
                    .values_panic([
                        "Building Future with Innovation".into(),
                        "We are a forward-thinking development studio specializing in modern web solutions."
                            .into(),
                        "To empower businesses by creating scalable, high-quality digital products."
                            .into(),
                        "To be the global benchmark for creative engineering.".into(),
                        "Antigravity Team".into(),
                    ])
                    .to_owned(),
            )
            .await?;

        // 插入示例项目
        for (title, description, technologies, featured) in [
            (
                "Vanguard E-Commerce",
                "A high-performance e-commerce engine with real-time inventory tracking and an edge-cached storefront.",
                "Rust, Axum, PostgreSQL, Redis",
                true,
            ),
            (
                "Nexus Analytics Dashboard",
                "Enterprise-grade analytics platform providing real-time data visualization and predictive insights.",
                "React, Python, D3.js",
                true,
            ),
            (
                "Aura UI System",
                "A design system and component library focused on glassmorphism and modern aesthetics.",
                "TypeScript, Tailwind CSS",
                false,
            ),
        ] {
            manager
                .exec_stmt(
                    Query::insert()
                        .into_table(Projects::Table)
                        .columns([
                            Projects::Title,
                            Projects::Description,
                            Projects::Technologies,
                            Projects::Featured,
                        ])
                        .values_panic([
                            title.into(),
                            description.into(),
                            technologies.into(),
                            featured.into(),
                        ])
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 删除默认admin用户，示例内容保留
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Users::Table)
                    .and_where(Expr::col(Users::Email).eq("admin@myprofile.local"))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

// 表定义枚举
#[derive(DeriveIden)]
#[allow(dead_code)]
enum Users {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    IsAdmin,
}

#[derive(DeriveIden)]
#[allow(dead_code)]
enum AboutUs {
    Table,
    Title,
    Description,
    Mission,
    Vision,
    TeamMembers,
}

#[derive(DeriveIden)]
#[allow(dead_code)]
enum Projects {
    Table,
    Title,
    Description,
    Technologies,
    Featured,
}
