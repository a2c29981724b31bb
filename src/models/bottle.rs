use crate::entities::BottleStatus;
use chrono::{DateTime, Utc};
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AddBottleRequest {
    #[schema(example = "RFID1")]
    pub rfid: String,
    /// 默认 1
    pub bottles: Option<i64>,
    /// 默认 10
    pub points: Option<i64>,
    /// 原始传感器读数, 原样落库
    #[schema(value_type = Option<Object>)]
    pub sensor_data: Option<serde_json::Value>,
    #[schema(example = "RVM-03")]
    pub machine_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AddBottleResponse {
    pub status: BottleStatus,
    pub points_added: i64,
    pub bottles_added: i64,
}

/// 每台回收机的累计统计
#[derive(Debug, Serialize, Deserialize, FromQueryResult, ToSchema)]
pub struct MachineStatsResponse {
    pub machine_id: Option<String>,
    pub total_operations: i64,
    pub total_bottles: i64,
    pub total_points: i64,
    pub suspicious_count: i64,
    pub last_activity: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, FromQueryResult, ToSchema)]
pub struct SuspiciousActivityResponse {
    pub id: i64,
    pub rfid_id: String,
    pub machine_id: Option<String>,
    pub bottles_inserted: i64,
    pub points_earned: i64,
    pub suspicion_reason: Option<String>,
    pub insertion_time: Option<DateTime<Utc>>,
    pub name: String,
    pub student_id: String,
}
