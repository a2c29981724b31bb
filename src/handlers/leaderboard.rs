use crate::middlewares::AuthContext;
use crate::models::*;
use crate::services::LeaderboardService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/leaderboard/top",
    tag = "leaderboard",
    responses(
        (status = 200, description = "前 10 名", body = [LeaderboardEntry])
    )
)]
pub async fn top(leaderboard_service: web::Data<LeaderboardService>) -> Result<HttpResponse> {
    match leaderboard_service.top().await {
        Ok(entries) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": entries
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/leaderboard/my-rank",
    tag = "leaderboard",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "当前账户名次", body = MyRankResponse),
        (status = 401, description = "未授权")
    )
)]
pub async fn my_rank(
    leaderboard_service: web::Data<LeaderboardService>,
    auth: AuthContext,
) -> Result<HttpResponse> {
    match leaderboard_service.my_rank(auth.user.id).await {
        Ok(Some(rank)) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": rank
        }))),
        Ok(None) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": null,
            "message": "Start recycling to get on the leaderboard!"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/leaderboard/around-me",
    tag = "leaderboard",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "当前账户前后名次", body = [LeaderboardEntry]),
        (status = 401, description = "未授权")
    )
)]
pub async fn around_me(
    leaderboard_service: web::Data<LeaderboardService>,
    auth: AuthContext,
) -> Result<HttpResponse> {
    match leaderboard_service.around_me(auth.user.id).await {
        Ok(entries) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": entries
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn leaderboard_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/leaderboard")
            .route("/top", web::get().to(top))
            .route("/my-rank", web::get().to(my_rank))
            .route("/around-me", web::get().to(around_me)),
    );
}
