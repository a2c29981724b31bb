use crate::error::AppResult;
use crate::models::{LeaderboardEntry, MyRankResponse};
use sea_orm::{DatabaseConnection, DbBackend, FromQueryResult, Statement};

#[derive(Clone)]
pub struct LeaderboardService {
    pool: DatabaseConnection,
}

impl LeaderboardService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 前 10 名
    pub async fn top(&self) -> AppResult<Vec<LeaderboardEntry>> {
        let rows = LeaderboardEntry::find_by_statement(Statement::from_string(
            DbBackend::Postgres,
            r#"
            SELECT name, student_id, total_bottles, total_points, rank, position
            FROM leaderboard
            WHERE position <= 10
            ORDER BY position
            LIMIT 10
            "#
            .to_string(),
        ))
        .all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// 当前账户的名次; 还没有积分行时返回 None
    pub async fn my_rank(&self, user_id: i64) -> AppResult<Option<MyRankResponse>> {
        let row = MyRankResponse::find_by_statement(Statement::from_sql_and_values(
            DbBackend::Postgres,
            r#"
            SELECT rank, position, total_bottles, total_points
            FROM leaderboard
            WHERE id = $1
            "#,
            [user_id.into()],
        ))
        .one(&self.pool)
        .await?;
        Ok(row)
    }

    /// 当前账户前后各 2 名
    pub async fn around_me(&self, user_id: i64) -> AppResult<Vec<LeaderboardEntry>> {
        let Some(me) = self.my_rank(user_id).await? else {
            return Ok(Vec::new());
        };

        let range = 2i64;
        let rows = LeaderboardEntry::find_by_statement(Statement::from_sql_and_values(
            DbBackend::Postgres,
            r#"
            SELECT name, student_id, total_bottles, total_points, rank, position
            FROM leaderboard
            WHERE position BETWEEN $1 AND $2
            ORDER BY position
            "#,
            [(me.position - range).into(), (me.position + range).into()],
        ))
        .all(&self.pool)
        .await?;
        Ok(rows)
    }
}
