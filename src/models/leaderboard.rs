use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 排行榜视图行。rank 为并列名次, position 为连续序号。
#[derive(Debug, Serialize, Deserialize, FromQueryResult, ToSchema)]
pub struct LeaderboardEntry {
    pub name: String,
    pub student_id: String,
    pub total_bottles: i64,
    pub total_points: i64,
    pub rank: i64,
    pub position: i64,
}

#[derive(Debug, Serialize, Deserialize, FromQueryResult, ToSchema)]
pub struct MyRankResponse {
    pub rank: i64,
    pub position: i64,
    pub total_bottles: i64,
    pub total_points: i64,
}
