use crate::entities::{
    RedemptionStatus, coupon_entity as coupons, redeemed_coupon_entity as redeemed_coupons,
    user_point_entity as user_points,
};
use crate::error::{AppError, AppResult};
use crate::models::{CouponResponse, RedeemRequest, RedeemResponse, RedeemedCodeResponse};
use crate::utils::generate_redemption_code;
use chrono::{Duration, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbBackend, EntityTrait, FromQueryResult,
    QueryFilter, QueryOrder, Set, Statement, TransactionTrait,
};

#[derive(Clone)]
pub struct RedemptionService {
    pool: DatabaseConnection,
}

impl RedemptionService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 积分兑换券
    ///
    /// 逻辑 (单事务, 任一步失败整体回滚):
    /// 1. 读账户积分行, 不存在报 NOT_FOUND
    /// 2. 读目录中启用的券, 不存在报 NOT_FOUND
    /// 3. 余额不足直接拒绝, 不做部分扣减
    /// 4. 生成8位兑换码
    /// 5. 条件原子扣减 (WHERE total_points >= cost); 并发兑换输掉竞争的
    ///    一方在这里拿到 0 行, 同样报积分不足 —— 余额不会为负
    /// 6. 写入兑换记录 (active, 30 天有效)
    pub async fn redeem(&self, request: RedeemRequest) -> AppResult<RedeemResponse> {
        let txn = self.pool.begin().await?;

        let balance = user_points::Entity::find_by_id(request.rfid.clone())
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let coupon = coupons::Entity::find_by_id(request.coupon_id)
            .filter(coupons::Column::IsActive.eq(true))
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound("Coupon not found".to_string()))?;

        if balance.total_points < coupon.points_required {
            return Err(AppError::InsufficientPoints {
                required: coupon.points_required,
                available: balance.total_points,
            });
        }

        let code = generate_redemption_code();

        let deducted = user_points::Entity::update_many()
            .col_expr(
                user_points::Column::TotalPoints,
                Expr::col(user_points::Column::TotalPoints).sub(coupon.points_required),
            )
            .col_expr(
                user_points::Column::LastUpdated,
                Expr::value(Utc::now()),
            )
            .filter(user_points::Column::RfidId.eq(&request.rfid))
            .filter(user_points::Column::TotalPoints.gte(coupon.points_required))
            .exec(&txn)
            .await?;

        if deducted.rows_affected == 0 {
            // 并发兑换抢先扣掉了余额
            return Err(AppError::InsufficientPoints {
                required: coupon.points_required,
                available: balance.total_points,
            });
        }

        redeemed_coupons::ActiveModel {
            rfid_id: Set(request.rfid.clone()),
            coupon_id: Set(coupon.id),
            points_used: Set(coupon.points_required),
            redemption_code: Set(code.clone()),
            status: Set(RedemptionStatus::Active),
            expiry_date: Set(Utc::now() + Duration::days(30)),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(RedeemResponse {
            code,
            coupon: coupon.coupon_name,
            points_used: coupon.points_required,
        })
    }

    /// 可兑换的券目录（按所需积分升序）
    pub async fn list_coupons(&self) -> AppResult<Vec<CouponResponse>> {
        let list = coupons::Entity::find()
            .filter(coupons::Column::IsActive.eq(true))
            .order_by_asc(coupons::Column::PointsRequired)
            .all(&self.pool)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    /// 账户当前有效（active 且未过期）的兑换码
    pub async fn user_codes(&self, rfid: &str) -> AppResult<Vec<RedeemedCodeResponse>> {
        let rows = RedeemedCodeResponse::find_by_statement(Statement::from_sql_and_values(
            DbBackend::Postgres,
            r#"
            SELECT rc.redemption_code, cc.coupon_name, rc.status::text AS status, rc.expiry_date
            FROM redeemed_coupons rc
            JOIN coupons_catalog cc ON rc.coupon_id = cc.id
            WHERE rc.rfid_id = $1 AND rc.status = 'active' AND rc.expiry_date > NOW()
            ORDER BY rc.redeemed_at DESC
            "#,
            [rfid.into()],
        ))
        .all(&self.pool)
        .await?;
        Ok(rows)
    }
}
