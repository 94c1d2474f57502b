use crate::entities::{Connectivity, SimProvider};
use crate::models::*;
use crate::services::DispatchService;
use crate::utils::renewal::LifecycleStatus;
use actix_web::{HttpResponse, ResponseError, Result, web};
use sea_orm::Iterable;
use serde_json::json;

#[utoipa::path(
    post,
    path = "/dispatches",
    tag = "dispatch",
    request_body = CreateDispatchRequest,
    responses(
        (status = 200, description = "Dispatch recorded", body = DeviceResponse),
        (status = 400, description = "Invalid or duplicate dispatch data")
    )
)]
pub async fn create_dispatch(
    dispatch_service: web::Data<DispatchService>,
    request: web::Json<CreateDispatchRequest>,
) -> Result<HttpResponse> {
    match dispatch_service.create_dispatch(request.into_inner()).await {
        Ok(resp) => Ok(HttpResponse::Ok().json(json!({"success": true, "data": resp}))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/dispatches",
    tag = "dispatch",
    params(
        ("page" = Option<u32>, Query, description = "Page number"),
        ("per_page" = Option<u32>, Query, description = "Items per page"),
        ("status" = Option<LifecycleStatus>, Query, description = "Filter by derived lifecycle status"),
        ("product_name" = Option<String>, Query, description = "Filter by product"),
        ("end_user" = Option<String>, Query, description = "Filter by end user")
    ),
    responses(
        (status = 200, description = "Dispatch list")
    )
)]
pub async fn list_dispatches(
    dispatch_service: web::Data<DispatchService>,
    query: web::Query<DeviceQuery>,
) -> Result<HttpResponse> {
    match dispatch_service.list_dispatches(&query.into_inner()).await {
        Ok(resp) => Ok(HttpResponse::Ok().json(json!({"success": true, "data": resp}))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/dispatches/options",
    tag = "dispatch",
    responses(
        (status = 200, description = "Selectable products, connectivity and SIM providers", body = DispatchOptionsResponse)
    )
)]
pub async fn dispatch_options() -> Result<HttpResponse> {
    let resp = DispatchOptionsResponse {
        products: BASE_PRODUCT_LIST.iter().map(|p| p.to_string()).collect(),
        connectivity: Connectivity::iter().map(|c| c.to_string()).collect(),
        sim_providers: SimProvider::iter().map(|p| p.to_string()).collect(),
    };
    Ok(HttpResponse::Ok().json(json!({"success": true, "data": resp})))
}

#[utoipa::path(
    get,
    path = "/dispatches/{serial_number}",
    tag = "dispatch",
    params(
        ("serial_number" = String, Path, description = "Device serial number")
    ),
    responses(
        (status = 200, description = "Dispatch record", body = DeviceResponse),
        (status = 404, description = "Unknown serial number")
    )
)]
pub async fn get_dispatch(
    dispatch_service: web::Data<DispatchService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match dispatch_service.get_dispatch(&path.into_inner()).await {
        Ok(resp) => Ok(HttpResponse::Ok().json(json!({"success": true, "data": resp}))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn dispatch_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/dispatches")
            .route("", web::post().to(create_dispatch))
            .route("", web::get().to(list_dispatches))
            // literal route must register before the serial capture
            .route("/options", web::get().to(dispatch_options))
            .route("/{serial_number}", web::get().to(get_dispatch)),
    );
}
