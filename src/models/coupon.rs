use crate::entities::coupon_entity as coupons;
use chrono::{DateTime, Utc};
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CouponResponse {
    pub id: i64,
    pub coupon_name: String,
    pub description: Option<String>,
    pub points_required: i64,
    /// 面值(美分)
    pub coupon_value: i64,
    pub validity_days: i32,
}

impl From<coupons::Model> for CouponResponse {
    fn from(coupon: coupons::Model) -> Self {
        Self {
            id: coupon.id,
            coupon_name: coupon.coupon_name,
            description: coupon.description,
            points_required: coupon.points_required,
            coupon_value: coupon.coupon_value,
            validity_days: coupon.validity_days,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RedeemRequest {
    #[schema(example = "RFID1")]
    pub rfid: String,
    pub coupon_id: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RedeemResponse {
    /// 8位兑换码
    pub code: String,
    pub coupon: String,
    pub points_used: i64,
}

/// 学生当前可用的兑换码（兑换记录 ⋈ 目录）
#[derive(Debug, Serialize, Deserialize, FromQueryResult, ToSchema)]
pub struct RedeemedCodeResponse {
    pub redemption_code: String,
    pub coupon_name: String,
    pub status: String,
    pub expiry_date: DateTime<Utc>,
}
