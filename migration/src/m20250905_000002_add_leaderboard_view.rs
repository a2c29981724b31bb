use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// 排行榜视图: rank 并列名次 (RANK), position 连续序号 (ROW_NUMBER)
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let sql = r#"
            CREATE VIEW leaderboard AS
            SELECT
                u.id,
                u.rfid_id,
                u.name,
                u.student_id,
                up.total_bottles,
                up.total_points,
                RANK() OVER (ORDER BY up.total_points DESC) AS rank,
                ROW_NUMBER() OVER (ORDER BY up.total_points DESC) AS position
            FROM users u
            JOIN user_points up ON u.rfid_id = up.rfid_id
        "#;
        manager.get_connection().execute_unprepared(sql).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP VIEW IF EXISTS leaderboard")
            .await?;
        Ok(())
    }
}
