use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// 登录尝试流水, 只追加。用户名不存在时 user_id 为空。
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "login_attempts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: Option<i64>,
    pub ip_address: Option<String>,
    pub success: bool,
    pub attempted_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
