use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "bottle_status")]
#[serde(rename_all = "snake_case")]
pub enum BottleStatus {
    #[sea_orm(string_value = "valid")]
    Valid,
    #[sea_orm(string_value = "suspicious")]
    Suspicious,
}

impl std::fmt::Display for BottleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BottleStatus::Valid => write!(f, "valid"),
            BottleStatus::Suspicious => write!(f, "suspicious"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "bottle_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub rfid_id: String,
    pub machine_id: Option<String>,
    pub bottles_inserted: i64,
    pub points_earned: i64,
    pub sensor_readings: Option<Json>,
    pub status: BottleStatus,
    pub suspicion_reason: Option<String>,
    pub insertion_time: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
