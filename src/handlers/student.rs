use crate::models::*;
use crate::services::{RedemptionService, StudentService};
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/student/rfid/{rfid}",
    tag = "student",
    params(
        ("rfid" = String, Path, description = "RFID 卡号")
    ),
    responses(
        (status = 200, description = "学生信息", body = UserResponse),
        (status = 404, description = "学生不存在")
    )
)]
pub async fn by_rfid(
    student_service: web::Data<StudentService>,
    rfid: web::Path<String>,
) -> Result<HttpResponse> {
    match student_service.by_rfid(&rfid).await {
        Ok(user) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": user
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/student/id/{student_id}",
    tag = "student",
    params(
        ("student_id" = String, Path, description = "学号")
    ),
    responses(
        (status = 200, description = "学生信息", body = UserResponse),
        (status = 404, description = "学生不存在")
    )
)]
pub async fn by_student_id(
    student_service: web::Data<StudentService>,
    student_id: web::Path<String>,
) -> Result<HttpResponse> {
    match student_service.by_student_id(&student_id).await {
        Ok(user) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": user
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/student/{rfid}/codes",
    tag = "student",
    params(
        ("rfid" = String, Path, description = "RFID 卡号")
    ),
    responses(
        (status = 200, description = "当前有效的兑换码", body = [RedeemedCodeResponse])
    )
)]
pub async fn active_codes(
    redemption_service: web::Data<RedemptionService>,
    rfid: web::Path<String>,
) -> Result<HttpResponse> {
    match redemption_service.user_codes(&rfid).await {
        Ok(codes) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": codes
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn student_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/student")
            .route("/rfid/{rfid}", web::get().to(by_rfid))
            .route("/id/{student_id}", web::get().to(by_student_id))
            .route("/{rfid}/codes", web::get().to(active_codes)),
    );
}
