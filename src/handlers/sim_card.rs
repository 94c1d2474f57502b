use crate::entities::{SimProvider, SimStatus};
use crate::models::*;
use crate::services::SimService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    post,
    path = "/sims",
    tag = "sim",
    request_body = CreateSimRequest,
    responses(
        (status = 200, description = "SIM added to inventory", body = SimResponse),
        (status = 400, description = "Invalid or duplicate SIM number")
    )
)]
pub async fn add_sim(
    sim_service: web::Data<SimService>,
    request: web::Json<CreateSimRequest>,
) -> Result<HttpResponse> {
    match sim_service.add_sim(request.into_inner()).await {
        Ok(resp) => Ok(HttpResponse::Ok().json(json!({"success": true, "data": resp}))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/sims",
    tag = "sim",
    params(
        ("page" = Option<u32>, Query, description = "Page number"),
        ("per_page" = Option<u32>, Query, description = "Items per page"),
        ("status" = Option<SimStatus>, Query, description = "Filter by status"),
        ("provider" = Option<SimProvider>, Query, description = "Filter by provider")
    ),
    responses(
        (status = 200, description = "SIM inventory list")
    )
)]
pub async fn list_sims(
    sim_service: web::Data<SimService>,
    query: web::Query<SimQuery>,
) -> Result<HttpResponse> {
    match sim_service.list_sims(&query.into_inner()).await {
        Ok(resp) => Ok(HttpResponse::Ok().json(json!({"success": true, "data": resp}))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/sims/available",
    tag = "sim",
    responses(
        (status = 200, description = "Numbers of SIMs free to dispatch")
    )
)]
pub async fn available_sims(sim_service: web::Data<SimService>) -> Result<HttpResponse> {
    match sim_service.available_sim_numbers().await {
        Ok(resp) => Ok(HttpResponse::Ok().json(json!({"success": true, "data": resp}))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn sim_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/sims")
            .route("", web::post().to(add_sim))
            .route("", web::get().to(list_sims))
            .route("/available", web::get().to(available_sims)),
    );
}
