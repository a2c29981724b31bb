use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "coupons_catalog")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub coupon_name: String,
    pub description: Option<String>,
    pub points_required: i64,
    /// 面值(美分), 仅用于展示
    pub coupon_value: i64,
    pub validity_days: i32,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
