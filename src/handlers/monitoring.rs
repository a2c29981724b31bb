use crate::models::*;
use crate::services::MonitoringService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    post,
    path = "/monitoring/add-bottle",
    tag = "monitoring",
    request_body = AddBottleRequest,
    responses(
        (status = 200, description = "投瓶已记录", body = AddBottleResponse),
        (status = 400, description = "请求参数错误")
    )
)]
pub async fn add_bottle(
    monitoring_service: web::Data<MonitoringService>,
    request: web::Json<AddBottleRequest>,
) -> Result<HttpResponse> {
    match monitoring_service.record_bottle_event(request.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/monitoring/machine-stats",
    tag = "monitoring",
    responses(
        (status = 200, description = "回收机统计", body = [MachineStatsResponse])
    )
)]
pub async fn machine_stats(monitoring_service: web::Data<MonitoringService>) -> Result<HttpResponse> {
    match monitoring_service.machine_stats().await {
        Ok(stats) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": stats
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/monitoring/suspicious-activities",
    tag = "monitoring",
    responses(
        (status = 200, description = "最近的可疑投瓶记录", body = [SuspiciousActivityResponse])
    )
)]
pub async fn suspicious_activities(
    monitoring_service: web::Data<MonitoringService>,
) -> Result<HttpResponse> {
    match monitoring_service.suspicious_activities().await {
        Ok(rows) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": rows
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn monitoring_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/monitoring")
            .route("/add-bottle", web::post().to(add_bottle))
            .route("/machine-stats", web::get().to(machine_stats))
            .route("/suspicious-activities", web::get().to(suspicious_activities)),
    );
}
