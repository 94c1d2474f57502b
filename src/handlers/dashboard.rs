use crate::models::*;
use crate::services::DashboardService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/dashboard/overview",
    tag = "dashboard",
    responses(
        (status = 200, description = "Installation totals by lifecycle status", body = DashboardOverviewResponse)
    )
)]
pub async fn overview(dashboard_service: web::Data<DashboardService>) -> Result<HttpResponse> {
    match dashboard_service.overview().await {
        Ok(resp) => Ok(HttpResponse::Ok().json(json!({"success": true, "data": resp}))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/dashboard/industries",
    tag = "dashboard",
    responses(
        (status = 200, description = "Dispatch counts by industry category")
    )
)]
pub async fn industries(dashboard_service: web::Data<DashboardService>) -> Result<HttpResponse> {
    match dashboard_service.industry_breakdown().await {
        Ok(resp) => Ok(HttpResponse::Ok().json(json!({"success": true, "data": resp}))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/dashboard/expiring",
    tag = "dashboard",
    responses(
        (status = 200, description = "Devices expiring soon or already expired")
    )
)]
pub async fn expiring(dashboard_service: web::Data<DashboardService>) -> Result<HttpResponse> {
    match dashboard_service.expiring_devices().await {
        Ok(resp) => Ok(HttpResponse::Ok().json(json!({"success": true, "data": resp}))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/dashboard/partners",
    tag = "dashboard",
    responses(
        (status = 200, description = "Channel partner performance")
    )
)]
pub async fn partners(dashboard_service: web::Data<DashboardService>) -> Result<HttpResponse> {
    match dashboard_service.partner_performance().await {
        Ok(resp) => Ok(HttpResponse::Ok().json(json!({"success": true, "data": resp}))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn dashboard_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/dashboard")
            .route("/overview", web::get().to(overview))
            .route("/industries", web::get().to(industries))
            .route("/expiring", web::get().to(expiring))
            .route("/partners", web::get().to(partners)),
    );
}
