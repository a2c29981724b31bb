use actix_web::web;
use utoipa::OpenApi;
use utoipa::{
    Modify,
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa_swagger_ui::SwaggerUi;

use crate::entities::{BottleStatus, RedemptionStatus};
use crate::handlers;
use crate::models::*;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::verify_session,
        handlers::auth::logout,
        handlers::redemption::redeem,
        handlers::redemption::list_coupons,
        handlers::monitoring::add_bottle,
        handlers::monitoring::machine_stats,
        handlers::monitoring::suspicious_activities,
        handlers::leaderboard::top,
        handlers::leaderboard::my_rank,
        handlers::leaderboard::around_me,
        handlers::student::by_rfid,
        handlers::student::by_student_id,
        handlers::student::active_codes,
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            VerifySessionRequest,
            LogoutRequest,
            UserResponse,
            AuthResponse,
            CouponResponse,
            RedeemRequest,
            RedeemResponse,
            RedeemedCodeResponse,
            AddBottleRequest,
            AddBottleResponse,
            MachineStatsResponse,
            SuspiciousActivityResponse,
            LeaderboardEntry,
            MyRankResponse,
            BottleStatus,
            RedemptionStatus,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "注册 / 登录 / 会话"),
        (name = "redemption", description = "积分兑换"),
        (name = "monitoring", description = "投瓶摄入与机器监控"),
        (name = "leaderboard", description = "排行榜"),
        (name = "student", description = "学生查询")
    ),
    info(
        title = "Eco Recycle API",
        description = "校园回收积分平台后端",
        version = "0.1.0"
    ),
    servers(
        (url = "/api", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}
