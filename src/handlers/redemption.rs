use crate::middlewares::AuthContext;
use crate::models::*;
use crate::services::RedemptionService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    post,
    path = "/redemption/redeem",
    tag = "redemption",
    request_body = RedeemRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "兑换成功", body = RedeemResponse),
        (status = 400, description = "积分不足"),
        (status = 401, description = "未授权"),
        (status = 404, description = "账户或券不存在")
    )
)]
pub async fn redeem(
    redemption_service: web::Data<RedemptionService>,
    _auth: AuthContext,
    request: web::Json<RedeemRequest>,
) -> Result<HttpResponse> {
    match redemption_service.redeem(request.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/redemption/coupons",
    tag = "redemption",
    responses(
        (status = 200, description = "可兑换的券目录", body = [CouponResponse])
    )
)]
pub async fn list_coupons(
    redemption_service: web::Data<RedemptionService>,
) -> Result<HttpResponse> {
    match redemption_service.list_coupons().await {
        Ok(coupons) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": coupons
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn redemption_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/redemption")
            .route("/redeem", web::post().to(redeem))
            .route("/coupons", web::get().to(list_coupons)),
    );
}
