use crate::models::*;
use crate::services::AuthService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "注册成功", body = UserResponse),
        (status = 400, description = "请求参数错误"),
        (status = 409, description = "RFID或用户名已存在")
    )
)]
pub async fn register(
    auth_service: web::Data<AuthService>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse> {
    match auth_service.register(request.into_inner()).await {
        Ok(user) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Registration successful",
            "data": user
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "登录成功", body = AuthResponse),
        (status = 401, description = "凭证无效"),
        (status = 423, description = "账户已锁定")
    )
)]
pub async fn login(
    auth_service: web::Data<AuthService>,
    req: HttpRequest,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    let ip = req
        .connection_info()
        .realip_remote_addr()
        .map(|s| s.to_string());

    match auth_service.login(request.into_inner(), ip).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Login successful",
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/auth/verify-session",
    tag = "auth",
    request_body = VerifySessionRequest,
    responses(
        (status = 200, description = "会话有效", body = UserResponse),
        (status = 401, description = "会话无效或已过期")
    )
)]
pub async fn verify_session(
    auth_service: web::Data<AuthService>,
    request: web::Json<VerifySessionRequest>,
) -> Result<HttpResponse> {
    match auth_service.verify_session(&request.session_token).await {
        Ok(user) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": user
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = "auth",
    request_body = LogoutRequest,
    responses(
        (status = 200, description = "注销成功（幂等）")
    )
)]
pub async fn logout(
    auth_service: web::Data<AuthService>,
    request: web::Json<LogoutRequest>,
) -> Result<HttpResponse> {
    match auth_service.logout(&request.session_token).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Logout successful"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn auth_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/register", web::post().to(register))
            .route("/login", web::post().to(login))
            .route("/verify-session", web::post().to(verify_session))
            .route("/logout", web::post().to(logout)),
    );
}
